//! Resolving canvas clicks into a describable selection.

use super::model::RenderGraph;

/// Raw outcome of a pointer press on the canvas, before resolution. A click
/// hits at most one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
	/// A node was hit, identified by render-node id.
	Node(String),
	/// An edge was hit, identified by its endpoints.
	Edge {
		/// Source render-node id.
		source: String,
		/// Target render-node id.
		target: String,
	},
}

/// The currently selected element, ready for display. Single slot: writing a
/// new selection replaces the previous one; `None` clears it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
	/// A service or resource node.
	Node {
		/// Render-node id.
		id: String,
		/// Render-node label.
		label: String,
	},
	/// An edge between two nodes.
	Edge {
		/// Source endpoint id.
		from: String,
		/// Target endpoint id.
		to: String,
	},
}

impl Selection {
	/// One-line summary shown in the info box under the canvas.
	pub fn describe(&self) -> String {
		match self {
			Selection::Node { id, label } => format!("Selected {label}: {id}"),
			Selection::Edge { from, to } => format!("Edge: {from} -> {to}"),
		}
	}
}

/// Resolves a click target against the current graph. An unknown node id (a
/// stale click racing a rebuild) resolves to nothing rather than a dangling
/// record.
pub fn resolve(target: Option<ClickTarget>, graph: &RenderGraph) -> Option<Selection> {
	match target? {
		ClickTarget::Node(id) => graph
			.nodes
			.iter()
			.find(|n| n.id == id)
			.map(|n| Selection::Node {
				id: n.id.clone(),
				label: n.label.clone(),
			}),
		ClickTarget::Edge { source, target } => Some(Selection::Edge {
			from: source,
			to: target,
		}),
	}
}

#[cfg(test)]
mod tests {
	use crate::api::ComposeGraph;
	use crate::graph::build_render_graph;

	use super::*;

	fn sample_graph() -> RenderGraph {
		let compose: ComposeGraph = serde_json::from_str(
			r#"{
				"nodes": [{"id": "web", "label": "web", "volumes": ["data"], "ports": [80], "networks": []}],
				"edges": []
			}"#,
		)
		.unwrap();
		build_render_graph(&compose)
	}

	#[test]
	fn node_click_resolves_to_matching_record() {
		let graph = sample_graph();
		let selection = resolve(Some(ClickTarget::Node("port-80".into())), &graph);
		assert_eq!(
			selection,
			Some(Selection::Node {
				id: "port-80".into(),
				label: "Port: 80".into(),
			})
		);
	}

	#[test]
	fn empty_click_clears_selection() {
		let graph = sample_graph();
		assert_eq!(resolve(None, &graph), None);
	}

	#[test]
	fn unknown_node_id_resolves_to_nothing() {
		let graph = sample_graph();
		assert_eq!(resolve(Some(ClickTarget::Node("ghost".into())), &graph), None);
	}

	#[test]
	fn edge_click_resolves_to_endpoints() {
		let graph = sample_graph();
		let selection = resolve(
			Some(ClickTarget::Edge {
				source: "web".into(),
				target: "volume-data".into(),
			}),
			&graph,
		);
		let selection = selection.expect("edge selection");
		assert_eq!(selection.describe(), "Edge: web -> volume-data");
	}
}
