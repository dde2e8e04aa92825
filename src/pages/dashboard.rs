//! Dashboard page: upload, topology canvas, selection info, recommendations.

use leptos::prelude::*;

use crate::components::recommendations::RecommendationPanel;
use crate::components::topology::TopologyCanvas;
use crate::components::upload::UploadPanel;
use crate::graph::{Selection, build_render_graph};
use crate::state::AppState;

/// The main working page.
#[component]
pub fn Dashboard(
	/// Shared application state.
	state: AppState,
) -> impl IntoView {
	let selection = RwSignal::new(None::<Selection>);

	// Rebuilt from scratch whenever a new parse arrives; the canvas below is
	// remounted with it, tearing down the previous widget instance.
	let render_graph = Memo::new(move |_| {
		state
			.dashboard
			.with(|d| d.graph.as_ref().map(build_render_graph))
	});

	// A rebuilt graph invalidates whatever was selected in the old one.
	Effect::new(move |_| {
		render_graph.track();
		selection.set(None);
	});

	view! {
		<div class="dashboard">
			<UploadPanel state=state />

			{move || {
				render_graph.get().map(|graph| {
					let data = Signal::derive(move || graph.clone());
					view! {
						<section class="card graph-card">
							<h2>"Compose topology"</h2>
							<div class="graph-host">
								<TopologyCanvas data=data selection=selection />
							</div>
							{move || {
								selection
									.get()
									.map(|s| view! { <div class="selection-info">{s.describe()}</div> })
							}}
						</section>
					}
				})
			}}

			{move || {
				state
					.dashboard
					.with(|d| d.recommendations.clone())
					.map(|text| {
						let text = Signal::derive(move || text.clone());
						view! { <RecommendationPanel text=text /> }
					})
			}}
		</div>
	}
}
