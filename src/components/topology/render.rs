//! Canvas drawing for the topology graph.
//!
//! Pass order keeps z-ordering correct: background and particles first, then
//! edges, then nodes with labels, then the vignette. Attachment edges draw
//! dashed in their resource color; relation edges draw solid with an
//! arrowhead.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::graph::{EdgeKind, NodeKind, ResourceKind};

use super::particles::ParticleField;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{NodeInfo, TopologyState};
use super::theme::{Color, Theme};

/// Cubic ease for highlight transitions.
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete scene.
pub fn render(
	state: &TopologyState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	particles: Option<&ParticleField>,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);
	if let Some(field) = particles {
		field.draw(ctx, &theme.particles, state.time);
	}

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &TopologyState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			0.0,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.8,
		)
		.unwrap();

	gradient
		.add_color_stop(0.0, &theme.background.color_secondary.to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &theme.background.color.to_css())
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &TopologyState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			state.width.min(state.height) * 0.3,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.7,
		)
		.unwrap();

	gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)").unwrap();
	gradient
		.add_color_stop(1.0, &format!("rgba(0, 0, 0, {})", theme.background.vignette))
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &TopologyState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());

	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		// Edges touching the highlight set stay prominent; the rest recede.
		let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));
		let alpha = if edge_t > 0.01 {
			0.7 + 0.3 * edge_t
		} else {
			0.7 - 0.5 * max_t
		};

		let kind = edge.user_data.kind;
		let color = theme.edge_color(kind).with_alpha(alpha);
		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(scale.edge_line_width * (1.0 + 0.4 * edge_t));

		match kind {
			EdgeKind::Attachment(_) => {
				let _ = ctx.set_line_dash(&js_sys::Array::of2(
					&JsValue::from_f64(scale.dash_pattern.0),
					&JsValue::from_f64(scale.dash_pattern.1),
				));
			}
			EdgeKind::Relation(_) => {
				let _ = ctx.set_line_dash(&js_sys::Array::new());
			}
		}

		let start_r = scale.node_radius * n1.data.user_data.size;
		let end_r = scale.node_radius * n2.data.user_data.size + scale.arrow_size;
		ctx.begin_path();
		ctx.move_to(x1 + ux * start_r, y1 + uy * start_r);
		ctx.line_to(x2 - ux * end_r, y2 - uy * end_r);
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		draw_arrowhead(ctx, scale, &color, x2, y2, ux, uy, scale.node_radius * n2.data.user_data.size);
	});
}

/// Filled triangle pointing along `(ux, uy)` at the target node's rim.
#[allow(clippy::too_many_arguments)]
fn draw_arrowhead(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	color: &Color,
	x2: f64,
	y2: f64,
	ux: f64,
	uy: f64,
	target_radius: f64,
) {
	let (tip_x, tip_y) = (x2 - ux * target_radius, y2 - uy * target_radius);
	let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
	let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

	ctx.set_fill_style_str(&color.to_css());
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(
	state: &TopologyState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let has_highlight = max_t > 0.01;

	// Dimmed nodes first, highlighted nodes on top.
	state.graph.visit_nodes(|node| {
		if state.highlight.node_intensity(node.index()) > 0.001 {
			return;
		}
		let alpha = if has_highlight { 1.0 - 0.7 * max_t } else { 1.0 };
		draw_node(ctx, node, scale, theme, alpha, 1.0);
	});

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = state.highlight.node_intensity(idx);
		if node_t <= 0.001 {
			return;
		}
		let eased = smooth_step(node_t);
		let alpha = (1.0 - 0.7 * max_t) + 0.7 * max_t * eased;
		let radius_mult = 1.0 + 0.3 * eased;
		draw_node(ctx, node, scale, theme, alpha, radius_mult);

		if state.highlight.hovered == Some(idx) {
			let (x, y) = (node.x() as f64, node.y() as f64);
			let radius = scale.node_radius * radius_mult * node.data.user_data.size;
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.8 * eased));
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
	alpha: f64,
	radius_mult: f64,
) {
	let info = &node.data.user_data;
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = scale.node_radius * radius_mult * info.size;
	let fill = theme.node_fill(info.kind);

	ctx.set_global_alpha(alpha);

	match info.kind {
		// Services get the gradient-sphere look.
		NodeKind::Service => {
			let gradient = ctx
				.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
				.unwrap();
			gradient.add_color_stop(0.0, &fill.lighten(0.4).to_css()).unwrap();
			gradient.add_color_stop(0.7, &fill.to_css()).unwrap();
			gradient.add_color_stop(1.0, &fill.darken(0.2).to_css()).unwrap();

			ctx.begin_path();
			let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
		NodeKind::Resource(resource) => {
			ctx.set_fill_style_str(&fill.to_css());
			trace_resource_shape(ctx, resource, x, y, radius);
			ctx.fill();
			ctx.set_stroke_style_str(&fill.darken(0.35).to_css());
			ctx.set_line_width(scale.edge_line_width);
			trace_resource_shape(ctx, resource, x, y, radius);
			ctx.stroke();
		}
	}

	ctx.set_global_alpha(1.0);

	if alpha > 0.5 {
		ctx.set_global_alpha(alpha * 0.85);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		ctx.set_font(&scale.label_font);
		let _ = ctx.fill_text(&info.label, x + radius + 4.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	}
}

/// Builds the path for a resource node: cylinder for volumes, diamond for
/// ports, ellipse for networks.
fn trace_resource_shape(
	ctx: &CanvasRenderingContext2d,
	resource: ResourceKind,
	x: f64,
	y: f64,
	r: f64,
) {
	ctx.begin_path();
	match resource {
		ResourceKind::Volume => {
			// Cylinder: body walls, bottom cap bulging down, full top cap.
			let (rx, ry) = (r, r * 0.35);
			let half = r * 0.7;
			ctx.move_to(x - rx, y - half);
			ctx.line_to(x - rx, y + half);
			let _ = ctx.ellipse_with_anticlockwise(x, y + half, rx, ry, 0.0, PI, 0.0, true);
			ctx.line_to(x + rx, y - half);
			let _ = ctx.ellipse(x, y - half, rx, ry, 0.0, 0.0, 2.0 * PI);
		}
		ResourceKind::Port => {
			ctx.move_to(x, y - r);
			ctx.line_to(x + r, y);
			ctx.line_to(x, y + r);
			ctx.line_to(x - r, y);
			ctx.close_path();
		}
		ResourceKind::Network => {
			let _ = ctx.ellipse(x, y, r * 1.25, r * 0.85, 0.0, 0.0, 2.0 * PI);
		}
	}
}
