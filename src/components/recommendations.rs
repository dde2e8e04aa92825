//! Markdown recommendation panel.

use leptos::prelude::*;
use pulldown_cmark::{Options, Parser, html};

/// Renders the backend's Markdown recommendation text to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
	let mut options = Options::empty();
	options.insert(Options::ENABLE_TABLES);
	options.insert(Options::ENABLE_STRIKETHROUGH);

	let parser = Parser::new_ext(markdown, options);
	let mut out = String::new();
	html::push_html(&mut out, parser);
	out
}

/// Card showing the generated recommendations.
#[component]
pub fn RecommendationPanel(
	/// Markdown text from the backend.
	#[prop(into)]
	text: Signal<String>,
) -> impl IntoView {
	view! {
		<section class="card recommendations">
			<h2>"Recommendations"</h2>
			<div class="markdown" inner_html=move || markdown_to_html(&text.get())></div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::markdown_to_html;

	#[test]
	fn renders_headings_lists_and_emphasis() {
		let html = markdown_to_html("# Findings\n\n- scale the *db* service\n");
		assert!(html.contains("<h1>Findings</h1>"));
		assert!(html.contains("<li>scale the <em>db</em> service</li>"));
	}

	#[test]
	fn renders_tables_when_the_model_emits_them() {
		let html = markdown_to_html("| a | b |\n| - | - |\n| 1 | 2 |\n");
		assert!(html.contains("<table>"));
	}
}
