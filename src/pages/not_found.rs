//! 404 fallback page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Shown for any route the router does not know.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="landing">
			<h1>"Page not found"</h1>
			<A href="/" attr:class="button-primary">
				"Back to start"
			</A>
		</div>
	}
}
