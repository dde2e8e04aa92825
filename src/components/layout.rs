//! Shell chrome shared by the working pages: top bar with navigation.

use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps a page in the app shell.
#[component]
pub fn Layout(
	/// Page content.
	children: Children,
) -> impl IntoView {
	view! {
		<div class="app-shell">
			<header class="top-bar">
				<span class="brand">"Compose Scope"</span>
				<nav>
					<A href="/dashboard">"Dashboard"</A>
					<A href="/docker">"Docker"</A>
					<A href="/aws">"AWS"</A>
				</nav>
			</header>
			<main class="page">{children()}</main>
		</div>
	}
}
