//! Compose file upload panel.
//!
//! Owns the file input and the two backend calls of the dashboard: parse the
//! file into a graph, and generate recommendations for it. All visible state
//! flows through the [`DashboardState`](crate::state::DashboardState)
//! transitions; this component only wires DOM events to them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::state::AppState;

/// File picker plus upload/recommendation actions.
#[component]
pub fn UploadPanel(
	/// Shared application state.
	state: AppState,
) -> impl IntoView {
	let input_ref = NodeRef::<leptos::html::Input>::new();
	// Browser file handles are not Send; they stay local to this component.
	let uploaded: StoredValue<Option<File>, LocalStorage> = StoredValue::new_local(None);

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();

		let file = input_ref
			.get()
			.and_then(|input| input.files())
			.and_then(|files| files.get(0));
		let Some(file) = file else {
			// No network call without a file.
			state.dashboard.update(|d| d.missing_file());
			return;
		};

		state.dashboard.update(|d| {
			d.file_selected(file.name());
			d.request_started();
		});
		uploaded.set_value(Some(file.clone()));

		spawn_local(async move {
			match api::upload_compose(&file).await {
				Ok(graph) => state.dashboard.update(|d| d.upload_succeeded(graph)),
				Err(err) => state.dashboard.update(|d| d.request_failed(err.to_string())),
			}
		});
	};

	let on_recommend = move |_| {
		let Some(file) = uploaded.get_value() else {
			state.dashboard.update(|d| d.missing_file());
			return;
		};

		state.dashboard.update(|d| d.request_started());
		spawn_local(async move {
			match api::request_recommendations(&file).await {
				Ok(text) => state.dashboard.update(|d| d.recommendations_received(text)),
				Err(err) => state.dashboard.update(|d| d.request_failed(err.to_string())),
			}
		});
	};

	view! {
		<section class="card upload-panel">
			<form on:submit=on_submit>
				<label class="file-label">
					"Docker Compose file"
					<input type="file" accept=".yml,.yaml" node_ref=input_ref />
				</label>
				<button type="submit" disabled=move || state.dashboard.with(|d| d.loading)>
					"Upload"
				</button>
				<button
					type="button"
					on:click=on_recommend
					disabled=move || {
						state.dashboard.with(|d| d.loading || d.file_name.is_none())
					}
				>
					"Generate recommendations"
				</button>
			</form>
			{move || {
				state
					.dashboard
					.with(|d| d.file_name.clone())
					.map(|name| view! { <p class="subheader">"Uploaded: " {name}</p> })
			}}
			{move || {
				state
					.dashboard
					.with(|d| d.error.clone())
					.map(|message| view! { <p class="error-text">"Error: " {message}</p> })
			}}
			<Show when=move || state.dashboard.with(|d| d.loading)>
				<p class="loading-text">"Working..."</p>
			</Show>
		</section>
	}
}
