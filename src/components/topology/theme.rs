//! Visual styling for the topology canvas.
//!
//! Node fills and edge colors are exhaustive matches over the closed kind
//! enums, so adding a category is a compile-time change, not a string branch.

use crate::api::RelationKind;
use crate::graph::{EdgeKind, NodeKind, ResourceKind};

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten by a factor (0.0 = unchanged, 1.0 = white).
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken by a factor (0.0 = unchanged, 1.0 = black).
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS string, hex for opaque colors and `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color.
	pub color: Color,
	/// Secondary color for the radial gradient.
	pub color_secondary: Color,
	/// Vignette intensity (0.0 = none).
	pub vignette: f64,
}

/// Ambient particle configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Whether particles draw at all.
	pub enabled: bool,
	/// Particle count.
	pub count: usize,
	/// Particle color.
	pub color: Color,
	/// Base particle radius in pixels.
	pub radius: f64,
	/// Drift speed in pixels per frame at 60fps.
	pub speed: f64,
	/// Base opacity.
	pub opacity: f64,
}

/// Complete canvas theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Background fill and vignette.
	pub background: BackgroundStyle,
	/// Ambient particles behind the graph.
	pub particles: ParticleStyle,
}

impl Theme {
	/// Dark dashboard theme with a subtle particle drift.
	pub fn dashboard() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				vignette: 0.15,
			},
			particles: ParticleStyle {
				enabled: true,
				count: 36,
				color: Color::rgb(140, 160, 180),
				radius: 1.4,
				speed: 0.25,
				opacity: 0.35,
			},
		}
	}

	/// Fill color for a node of the given kind.
	pub fn node_fill(&self, kind: NodeKind) -> Color {
		match kind {
			NodeKind::Service => Color::rgb(0x62, 0xb6, 0xcb),
			NodeKind::Resource(ResourceKind::Volume) => Color::rgb(0xbe, 0xe9, 0xe8),
			NodeKind::Resource(ResourceKind::Port) => Color::rgb(0x1b, 0x49, 0x65),
			NodeKind::Resource(ResourceKind::Network) => Color::rgb(0xca, 0xe9, 0xff),
		}
	}

	/// Stroke color for an edge of the given kind.
	pub fn edge_color(&self, kind: EdgeKind) -> Color {
		match kind {
			EdgeKind::Relation(RelationKind::Dependency) => Color::rgb(198, 76, 76),
			EdgeKind::Relation(RelationKind::Network) => Color::rgb(86, 140, 190),
			EdgeKind::Relation(RelationKind::Volume) => Color::rgb(96, 160, 110),
			EdgeKind::Relation(RelationKind::Port) => Color::rgb(150, 110, 180),
			EdgeKind::Relation(RelationKind::Other) => Color::rgb(130, 136, 148),
			EdgeKind::Attachment(ResourceKind::Volume) => Color::rgb(96, 160, 110),
			EdgeKind::Attachment(ResourceKind::Port) => Color::rgb(150, 110, 180),
			EdgeKind::Attachment(ResourceKind::Network) => Color::rgb(86, 140, 190),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dashboard()
	}
}
