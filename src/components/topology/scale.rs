//! Zoom-dependent sizing for canvas elements.
//!
//! Node and hit radii live in world-space but are clamped to a minimum screen
//! size so the graph stays clickable when zoomed out; line widths, labels, and
//! hit slop are screen-space and divide by the zoom factor.

/// Base sizes for all drawable elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node radius in world units.
	pub node_radius: f64,
	/// Node hit-test radius in world units.
	pub hit_radius: f64,
	/// Minimum on-screen node radius in pixels.
	pub min_screen_radius: f64,
	/// Edge hit slop in screen pixels.
	pub edge_hit_distance: f64,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Zoom floor for label scaling so labels stop growing when zoomed far out.
	pub label_min_k: f64,
	/// Edge line width in screen pixels.
	pub edge_line_width: f64,
	/// Dash pattern (dash, gap) for attachment edges, in world units.
	pub dash_pattern: (f64, f64),
	/// Arrowhead size in world units.
	pub arrow_size: f64,
	/// Maximum on-screen arrowhead size in pixels.
	pub max_screen_arrow: f64,
	/// Hover ring stroke width in screen pixels.
	pub ring_width: f64,
	/// Hover ring offset from the node edge in screen pixels.
	pub ring_offset: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node_radius: 6.0,
			hit_radius: 13.0,
			min_screen_radius: 5.0,
			edge_hit_distance: 6.0,
			label_size: 10.0,
			label_min_k: 0.5,
			edge_line_width: 1.5,
			dash_pattern: (6.0, 4.0),
			arrow_size: 6.0,
			max_screen_arrow: 18.0,
			ring_width: 1.5,
			ring_offset: 2.0,
		}
	}
}

/// Sizes resolved for one zoom level; computed once per frame and once per
/// hit test. All values are world-space, ready to use after the canvas
/// transform.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Current zoom factor.
	pub k: f64,
	/// Node radius.
	pub node_radius: f64,
	/// Node hit-test radius.
	pub hit_radius: f64,
	/// Edge hit slop.
	pub edge_hit_distance: f64,
	/// Label font string, e.g. "10px sans-serif".
	pub label_font: String,
	/// Edge line width.
	pub edge_line_width: f64,
	/// Dash pattern for attachment edges.
	pub dash_pattern: (f64, f64),
	/// Arrowhead size.
	pub arrow_size: f64,
	/// Hover ring stroke width.
	pub ring_width: f64,
	/// Hover ring offset.
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Resolve the config at zoom factor `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let min_world = config.min_screen_radius / k;
		let label_font_size = config.label_size / k.max(config.label_min_k);

		Self {
			k,
			node_radius: config.node_radius.max(min_world),
			hit_radius: config.hit_radius.max(min_world),
			edge_hit_distance: config.edge_hit_distance / k,
			label_font: format!("{label_font_size}px sans-serif"),
			edge_line_width: config.edge_line_width / k,
			dash_pattern: config.dash_pattern,
			arrow_size: config.arrow_size.min(config.max_screen_arrow / k),
			ring_width: config.ring_width / k,
			ring_offset: config.ring_offset / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_radius_clamps_to_screen_minimum_when_zoomed_out() {
		let config = ScaleConfig::default();

		// Zoomed out 10x: 6 world units would be 0.6px on screen; the clamp
		// holds it at 5px (= 50 world units).
		let scale = ScaledValues::new(&config, 0.1);
		assert_eq!(scale.node_radius, 50.0);

		// At 1:1 the base radius already exceeds the minimum.
		let scale = ScaledValues::new(&config, 1.0);
		assert_eq!(scale.node_radius, 6.0);
	}

	#[test]
	fn screen_space_values_counter_the_zoom() {
		let config = ScaleConfig::default();
		let scale = ScaledValues::new(&config, 2.0);
		assert_eq!(scale.edge_line_width, config.edge_line_width / 2.0);
		assert_eq!(scale.edge_hit_distance, config.edge_hit_distance / 2.0);
	}

	#[test]
	fn arrow_size_caps_at_max_screen_size() {
		let config = ScaleConfig::default();
		// Zoomed in 6x: 6 world units would be 36px; capped to 18px (= 3 world units).
		let scale = ScaledValues::new(&config, 6.0);
		assert_eq!(scale.arrow_size, 3.0);
	}
}
