//! compose-scope: browser dashboard for Docker Compose topology and runtime
//! metrics.
//!
//! A Leptos CSR app: upload a Compose file, explore the resulting
//! service/volume/port/network graph on an interactive canvas, read generated
//! recommendations, and watch container and cloud-instance metrics refresh on
//! a timer. All parsing and metric collection happens in an external HTTP
//! backend; this crate is presentation and state binding only.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod api;
pub mod components;
pub mod graph;
pub mod pages;
pub mod poll;
pub mod state;

use crate::components::layout::Layout;
use crate::pages::aws::Aws;
use crate::pages::dashboard::Dashboard;
use crate::pages::docker::Docker;
use crate::pages::landing::Landing;
use crate::pages::not_found::NotFound;
use crate::state::AppState;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("compose-scope: logging initialized");
}

/// App router: landing page plus the three working pages, sharing one
/// explicitly threaded [`AppState`].
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let state = AppState::new();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Compose Scope" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Landing />
				<Route
					path=path!("/dashboard")
					view=move || view! { <Layout><Dashboard state=state /></Layout> }
				/>
				<Route path=path!("/docker") view=|| view! { <Layout><Docker /></Layout> } />
				<Route path=path!("/aws") view=|| view! { <Layout><Aws /></Layout> } />
			</Routes>
		</Router>
	}
}
