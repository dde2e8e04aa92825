//! Ambient particle drift behind the graph.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::theme::ParticleStyle;

/// Deterministic hash-noise in [0, 1); keeps the field stable across mounts.
fn noise(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

/// A single drifting dot.
#[derive(Clone, Debug)]
struct Particle {
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
	radius: f64,
	phase: f64,
}

/// Background particle field; updated each frame, wraps at the edges.
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Seeds `style.count` particles across the canvas.
	pub fn new(style: &ParticleStyle, width: f64, height: f64) -> Self {
		let particles = (0..style.count)
			.map(|i| {
				let seed = i as f64;
				let angle = noise(seed * 3.7) * TAU;
				let speed = style.speed * (0.5 + noise(seed * 4.1) * 0.5);
				Particle {
					x: noise(seed * 1.1) * width,
					y: noise(seed * 2.3) * height,
					vx: angle.cos() * speed,
					vy: angle.sin() * speed,
					radius: style.radius * (0.6 + noise(seed * 5.3) * 0.8),
					phase: noise(seed * 7.9) * TAU,
				}
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Advance positions by `dt` seconds, wrapping around the canvas edges.
	pub fn update(&mut self, dt: f64) {
		let margin = 10.0;
		for p in &mut self.particles {
			p.x += p.vx * dt * 60.0;
			p.y += p.vy * dt * 60.0;

			if p.x < -margin {
				p.x = self.width + margin;
			} else if p.x > self.width + margin {
				p.x = -margin;
			}
			if p.y < -margin {
				p.y = self.height + margin;
			} else if p.y > self.height + margin {
				p.y = -margin;
			}
		}
	}

	/// Draw all particles with a slow per-particle twinkle.
	pub fn draw(&self, ctx: &CanvasRenderingContext2d, style: &ParticleStyle, time: f64) {
		for p in &self.particles {
			let twinkle = ((time * 1.5 + p.phase).sin() * 0.5 + 0.5) * 0.4 + 0.6;
			let color = style.color.with_alpha(style.opacity * twinkle);
			ctx.set_fill_style_str(&color.to_css());
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, p.radius, 0.0, TAU);
			ctx.fill();
		}
	}
}
