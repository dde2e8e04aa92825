//! Application state threaded explicitly through the page components.
//!
//! The dashboard's bindable data lives in a plain [`DashboardState`] value
//! mutated only through its transition methods, so the upload flow is
//! testable without a DOM; the reactive wrapper around it is confined to
//! [`AppState`].

use leptos::prelude::*;

use crate::api::ComposeGraph;

/// Message shown when an action needs a file that has not been picked yet.
const MISSING_FILE_MESSAGE: &str = "Select a Docker Compose file first.";

/// Everything the dashboard page binds to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
	/// Name of the uploaded file, shown under the upload controls.
	pub file_name: Option<String>,
	/// Last successfully parsed graph. A failed upload leaves it untouched.
	pub graph: Option<ComposeGraph>,
	/// Markdown recommendation text from the backend.
	pub recommendations: Option<String>,
	/// True while an upload or recommendation request is in flight.
	pub loading: bool,
	/// Inline error message; cleared when a new request starts.
	pub error: Option<String>,
}

impl DashboardState {
	/// A file was picked in the input.
	pub fn file_selected(&mut self, name: String) {
		self.file_name = Some(name);
		self.error = None;
	}

	/// An upload or recommendation request is being issued.
	pub fn request_started(&mut self) {
		self.loading = true;
		self.error = None;
	}

	/// The upload resolved; the new graph replaces the previous one.
	pub fn upload_succeeded(&mut self, graph: ComposeGraph) {
		self.loading = false;
		self.graph = Some(graph);
	}

	/// A request failed. Whatever graph was on screen stays on screen.
	pub fn request_failed(&mut self, message: String) {
		self.loading = false;
		self.error = Some(message);
	}

	/// The recommendation request resolved.
	pub fn recommendations_received(&mut self, text: String) {
		self.loading = false;
		self.recommendations = Some(text);
	}

	/// Submit was pressed with no file picked; no network call is made.
	pub fn missing_file(&mut self) {
		self.error = Some(MISSING_FILE_MESSAGE.to_string());
	}
}

/// Signals shared across pages. `Copy`, so it is passed by value into every
/// component that needs it instead of living in ambient context. Each field
/// is written by exactly one fetch family.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
	/// Dashboard upload/graph/recommendation slot.
	pub dashboard: RwSignal<DashboardState>,
}

impl AppState {
	/// Fresh state for app startup.
	pub fn new() -> Self {
		Self {
			dashboard: RwSignal::new(DashboardState::default()),
		}
	}
}

impl Default for AppState {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph_with_service(id: &str) -> ComposeGraph {
		serde_json::from_str(&format!(
			r#"{{"nodes": [{{"id": "{id}", "label": "{id}"}}], "edges": []}}"#
		))
		.unwrap()
	}

	#[test]
	fn request_start_sets_loading_and_clears_error() {
		let mut state = DashboardState::default();
		state.missing_file();
		assert!(state.error.is_some());

		state.request_started();
		assert!(state.loading);
		assert_eq!(state.error, None);
	}

	#[test]
	fn failed_upload_keeps_previous_graph() {
		let mut state = DashboardState::default();
		state.upload_succeeded(graph_with_service("web"));

		state.request_started();
		state.request_failed("server responded with status 500".into());

		assert!(!state.loading);
		assert_eq!(state.error.as_deref(), Some("server responded with status 500"));
		assert_eq!(state.graph, Some(graph_with_service("web")));
	}

	#[test]
	fn successful_upload_replaces_graph() {
		let mut state = DashboardState::default();
		state.upload_succeeded(graph_with_service("old"));
		state.request_started();
		state.upload_succeeded(graph_with_service("new"));

		assert!(!state.loading);
		assert_eq!(state.graph, Some(graph_with_service("new")));
	}

	#[test]
	fn missing_file_sets_inline_error_without_touching_data() {
		let mut state = DashboardState::default();
		state.upload_succeeded(graph_with_service("web"));
		state.recommendations_received("use replicas".into());

		state.missing_file();
		assert_eq!(state.error.as_deref(), Some(MISSING_FILE_MESSAGE));
		assert!(state.graph.is_some());
		assert!(state.recommendations.is_some());
	}

	#[test]
	fn file_selected_records_name_and_clears_stale_error() {
		let mut state = DashboardState::default();
		state.missing_file();
		state.file_selected("docker-compose.yml".into());

		assert_eq!(state.file_name.as_deref(), Some("docker-compose.yml"));
		assert_eq!(state.error, None);
	}
}
