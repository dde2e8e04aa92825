//! Renderable graph model consumed by the topology canvas.
//!
//! This is the widget-facing representation, distinct from the raw
//! service/relation data the backend returns: services become primary nodes
//! and every distinct volume/port/network value becomes one shared synthetic
//! node.

use std::fmt;

use crate::api::RelationKind;

/// Shared resource kinds that get a synthetic node of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
	/// Named volume.
	Volume,
	/// Exposed port.
	Port,
	/// Network.
	Network,
}

impl ResourceKind {
	/// Namespace prefix used in synthetic ids.
	pub fn prefix(self) -> &'static str {
		match self {
			ResourceKind::Volume => "volume",
			ResourceKind::Port => "port",
			ResourceKind::Network => "network",
		}
	}

	/// Deterministic id for the synthetic node representing `value`.
	///
	/// Two services referencing the same value map to the same id, which is
	/// what collapses them onto one shared node; the kind prefix keeps ids of
	/// different kinds apart.
	pub fn synthetic_id(self, value: &str) -> String {
		format!("{}-{}", self.prefix(), value)
	}

	/// Display label for the synthetic node.
	pub fn label(self, value: &str) -> String {
		match self {
			ResourceKind::Volume => format!("Volume: {value}"),
			ResourceKind::Port => format!("Port: {value}"),
			ResourceKind::Network => format!("Network: {value}"),
		}
	}
}

impl fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.prefix())
	}
}

/// Category of a render node; decides shape and fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// Primary node backing a Compose service.
	Service,
	/// Synthetic node backing a shared resource.
	Resource(ResourceKind),
}

/// Category of a render edge; decides color, dash, and arrow treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
	/// Directed relation between two services, colored by relation kind.
	Relation(RelationKind),
	/// Service-to-resource attachment, colored by resource kind.
	Attachment(ResourceKind),
}

/// A node as the canvas draws it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderNode {
	/// Unique across the whole graph; primary ids are service ids, synthetic
	/// ids carry their kind prefix.
	pub id: String,
	/// Text drawn next to the node.
	pub label: String,
	/// Shape/fill category.
	pub kind: NodeKind,
}

/// An edge as the canvas draws it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderEdge {
	/// Stable id for relation edges (`"edge-<source>-<target>"`); attachment
	/// edges have none.
	pub id: Option<String>,
	/// Source render-node id.
	pub source: String,
	/// Target render-node id.
	pub target: String,
	/// Color/dash/arrow category.
	pub kind: EdgeKind,
}

/// Complete render graph handed to the canvas widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderGraph {
	/// Primary and synthetic nodes, ids unique.
	pub nodes: Vec<RenderNode>,
	/// Relation and attachment edges; endpoints always exist in `nodes`.
	pub edges: Vec<RenderEdge>,
}
