//! Simulation state and interaction tracking for the topology canvas.
//!
//! Wraps the `force_graph` physics simulation with the render-graph metadata
//! (kinds, ids, labels), pan/zoom transforms, and hover/click hit testing.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{ClickTarget, EdgeKind, NodeKind, RenderGraph};

use super::scale::{ScaleConfig, ScaledValues};

/// Per-node metadata carried through the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	/// Render-node id, reported back on click.
	pub id: String,
	/// Label drawn next to the node.
	pub label: String,
	/// Shape/fill category.
	pub kind: NodeKind,
	/// Size multiplier; services draw larger than resources.
	pub size: f64,
}

/// Per-edge metadata carried through the simulation.
#[derive(Clone, Copy, Debug)]
pub struct EdgeInfo {
	/// Color/dash/arrow category.
	pub kind: EdgeKind,
}

/// Pan and zoom transform applied to the whole view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	/// Horizontal pan in screen pixels.
	pub x: f64,
	/// Vertical pan in screen pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0 by the wheel handler).
	pub k: f64,
}

/// Tracks an in-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Whether a drag is active.
	pub active: bool,
	/// The node being dragged.
	pub node_idx: Option<DefaultNodeIdx>,
	/// Pointer x at drag start, screen pixels.
	pub start_x: f64,
	/// Pointer y at drag start, screen pixels.
	pub start_y: f64,
	/// Node x at drag start, world units.
	pub node_start_x: f32,
	/// Node y at drag start, world units.
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether a pan is active.
	pub active: bool,
	/// Pointer x at pan start.
	pub start_x: f64,
	/// Pointer y at pan start.
	pub start_y: f64,
	/// Transform x at pan start.
	pub transform_start_x: f64,
	/// Transform y at pan start.
	pub transform_start_y: f64,
}

/// Hover highlight with a smoothly fading per-node intensity. The hovered
/// node and its direct neighbors fade towards full intensity; everything else
/// fades back out.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	/// Currently hovered node, if any.
	pub hovered: Option<DefaultNodeIdx>,
	target: HashSet<DefaultNodeIdx>,
	intensity: HashMap<DefaultNodeIdx, f64>,
}

impl HighlightState {
	/// Update the hovered node and recompute the highlight set.
	pub fn set_hover(
		&mut self,
		node: Option<DefaultNodeIdx>,
		edges: &[(DefaultNodeIdx, DefaultNodeIdx)],
	) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.target.clear();

		if let Some(idx) = node {
			self.target.insert(idx);
			for &(src, tgt) in edges {
				if src == idx {
					self.target.insert(tgt);
				} else if tgt == idx {
					self.target.insert(src);
				}
			}
		}
	}

	/// Advance fades by `dt` seconds using exponential smoothing.
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0;
		const FADE_OUT_SPEED: f64 = 4.0;

		let fade_in = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target {
			let intensity = self.intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in;
		}

		self.intensity.retain(|idx, intensity| {
			if self.target.contains(idx) {
				true
			} else {
				*intensity *= fade_out;
				*intensity > 0.005
			}
		});
	}

	/// Smoothed intensity for a node, 0.0 when not highlighted.
	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Intensity for an edge: geometric mean of its endpoints.
	pub fn edge_intensity(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		(self.node_intensity(a) * self.node_intensity(b)).sqrt()
	}

	/// Highest intensity of any node; used to dim the rest of the graph.
	pub fn max_intensity(&self) -> f64 {
		self.intensity.values().copied().fold(0.0, f64::max)
	}
}

/// Distance from point `(px, py)` to the segment `(x1, y1)`..`(x2, y2)`.
fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len_sq = dx * dx + dy * dy;
	if len_sq < f64::EPSILON {
		return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
	}
	let t = (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0);
	let (cx, cy) = (x1 + t * dx, y1 + t * dy);
	((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

/// Core canvas state: physics simulation plus interaction tracking. Created
/// when the widget mounts, mutated each animation frame.
pub struct TopologyState {
	/// Physics simulation carrying node/edge metadata.
	pub graph: ForceGraph<NodeInfo, EdgeInfo>,
	/// Pan/zoom transform.
	pub transform: ViewTransform,
	/// Active node drag.
	pub drag: DragState,
	/// Active canvas pan.
	pub pan: PanState,
	/// Hover highlight fades.
	pub highlight: HighlightState,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Seconds since mount; drives the particle twinkle.
	pub time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl TopologyState {
	/// Seeds the simulation from a render graph. Nodes start on a ring around
	/// the canvas center; services are sized up relative to resources, and
	/// well-connected nodes grow a little further.
	pub fn new(data: &RenderGraph, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		let mut degree: HashMap<&str, usize> = HashMap::new();
		for edge in &data.edges {
			*degree.entry(edge.source.as_str()).or_insert(0) += 1;
			*degree.entry(edge.target.as_str()).or_insert(0) += 1;
		}
		let max_degree = degree.values().copied().max().unwrap_or(1).max(1);

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let node_degree = degree.get(node.id.as_str()).copied().unwrap_or(0);
			let degree_factor = (node_degree as f64 / max_degree as f64).sqrt();
			let size = match node.kind {
				NodeKind::Service => 1.4 + 0.6 * degree_factor,
				NodeKind::Resource(_) => 0.8 + 0.4 * degree_factor,
			};

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					kind: node.kind,
					size,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for edge in &data.edges {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
			{
				graph.add_edge(src, tgt, EdgeData {
					user_data: EdgeInfo { kind: edge.kind },
				});
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			time: 0.0,
		}
	}

	/// Converts screen coordinates to world coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// The node under the screen position, if any.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit = scale.hit_radius * node.data.user_data.size;
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	/// Resolves a pointer press to a click target: nodes win over edges, the
	/// nearest edge within the hit slop wins over empty canvas.
	pub fn click_target(&self, sx: f64, sy: f64, config: &ScaleConfig) -> Option<ClickTarget> {
		if let Some(idx) = self.node_at_position(sx, sy, config) {
			let mut id = None;
			self.graph.visit_nodes(|node| {
				if node.index() == idx {
					id = Some(node.data.user_data.id.clone());
				}
			});
			return id.map(ClickTarget::Node);
		}

		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);

		let mut positions: HashMap<DefaultNodeIdx, (f64, f64, String)> = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(
				node.index(),
				(node.x() as f64, node.y() as f64, node.data.user_data.id.clone()),
			);
		});

		let mut best: Option<(f64, ClickTarget)> = None;
		for &(src, tgt) in &self.edges {
			let (Some((x1, y1, src_id)), Some((x2, y2, tgt_id))) =
				(positions.get(&src), positions.get(&tgt))
			else {
				continue;
			};
			let dist = segment_distance(gx, gy, *x1, *y1, *x2, *y2);
			if dist < scale.edge_hit_distance
				&& best.as_ref().is_none_or(|(d, _)| dist < *d)
			{
				best = Some((dist, ClickTarget::Edge {
					source: src_id.clone(),
					target: tgt_id.clone(),
				}));
			}
		}
		best.map(|(_, target)| target)
	}

	/// Update the hover highlight.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	/// Advance physics and highlight fades by `dt` seconds.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.time += dt as f64;
		self.highlight.tick(dt as f64);
	}
}

#[cfg(test)]
mod tests {
	use crate::api::ComposeGraph;
	use crate::graph::build_render_graph;

	use super::*;

	fn sample_state() -> TopologyState {
		let compose: ComposeGraph = serde_json::from_str(
			r#"{
				"nodes": [
					{"id": "web", "label": "web", "volumes": ["data"], "ports": [80], "networks": []},
					{"id": "db", "label": "db", "volumes": ["data"], "ports": [], "networks": []}
				],
				"edges": [{"source": "web", "target": "db", "type": "dependency"}]
			}"#,
		)
		.unwrap();
		TopologyState::new(&build_render_graph(&compose), 800.0, 600.0)
	}

	#[test]
	fn segment_distance_handles_interior_endpoints_and_degenerate_segments() {
		assert_eq!(segment_distance(5.0, 3.0, 0.0, 0.0, 10.0, 0.0), 3.0);
		// Beyond the endpoint the closest point is the endpoint itself.
		assert_eq!(segment_distance(14.0, 3.0, 0.0, 0.0, 10.0, 0.0), 5.0);
		assert_eq!(segment_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 5.0);
	}

	#[test]
	fn simulation_wires_every_render_edge() {
		let state = sample_state();
		let mut node_count = 0;
		state.graph.visit_nodes(|_| node_count += 1);
		assert_eq!(node_count, 4);

		let mut edge_count = 0;
		state.graph.visit_edges(|_, _, _| edge_count += 1);
		assert_eq!(edge_count, 4);
	}

	#[test]
	fn services_are_sized_larger_than_resources() {
		let state = sample_state();
		let mut service_size: f64 = 0.0;
		let mut resource_size = f64::MAX;
		state.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			match info.kind {
				NodeKind::Service => service_size = service_size.max(info.size),
				NodeKind::Resource(_) => resource_size = resource_size.min(info.size),
			}
		});
		assert!(service_size > resource_size);
	}

	#[test]
	fn highlight_fades_in_for_hovered_and_neighbors_only() {
		let mut state = sample_state();
		let mut web_idx = None;
		let mut port_idx = None;
		state.graph.visit_nodes(|node| {
			match node.data.user_data.id.as_str() {
				"web" => web_idx = Some(node.index()),
				"port-80" => port_idx = Some(node.index()),
				_ => {}
			}
		});
		let (web, port) = (web_idx.unwrap(), port_idx.unwrap());

		state.set_hover(Some(web));
		state.highlight.tick(0.5);
		assert!(state.highlight.node_intensity(web) > 0.5);
		assert!(state.highlight.node_intensity(port) > 0.5, "neighbor highlighted");

		state.set_hover(None);
		for _ in 0..60 {
			state.highlight.tick(0.1);
		}
		assert!(state.highlight.max_intensity() < 0.01);
	}
}
