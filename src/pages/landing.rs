//! Chrome-less landing page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Entry hero with a link into the dashboard.
#[component]
pub fn Landing() -> impl IntoView {
	view! {
		<div class="landing">
			<h1>"Compose Scope"</h1>
			<p class="tagline">
				"Upload a Docker Compose file, explore its topology, and keep an eye on your container and cloud metrics."
			</p>
			<A href="/dashboard" attr:class="button-primary">
				"Get started"
			</A>
		</div>
	}
}
