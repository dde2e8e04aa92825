//! Leptos component wrapping the topology canvas.
//!
//! Creates the canvas element, wires mouse/wheel handlers for dragging,
//! panning, zooming, and click selection, and runs the physics/render loop
//! via `requestAnimationFrame`. The component captures its graph once at
//! mount; the dashboard remounts it whenever a new graph arrives.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::graph::{self, RenderGraph, Selection};

use super::particles::ParticleField;
use super::render;
use super::scale::ScaleConfig;
use super::state::TopologyState;
use super::theme::Theme;

/// Pointer travel below this many pixels counts as a click, not a drag.
const CLICK_SLOP: f64 = 4.0;

/// Bundles simulation state with visual configuration.
struct CanvasContext {
	state: TopologyState,
	scale: ScaleConfig,
	theme: Theme,
	particles: Option<ParticleField>,
	/// Screen position of the last mousedown, for click-vs-drag detection.
	press: Option<(f64, f64)>,
	moved: f64,
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Interactive force-directed view of a render graph.
///
/// Sizes itself to its parent container unless explicit `width`/`height` are
/// given. Clicking a node or edge writes `selection`; clicking empty canvas
/// clears it.
#[component]
pub fn TopologyCanvas(
	/// Graph to lay out and draw; read once at mount.
	#[prop(into)]
	data: Signal<RenderGraph>,
	/// Selection slot written on click.
	selection: RwSignal<Option<Selection>>,
	/// Explicit canvas width in pixels.
	#[prop(default = None)]
	width: Option<f64>,
	/// Explicit canvas height in pixels.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<CanvasContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let theme = Theme::default();
		let particles = theme
			.particles
			.enabled
			.then(|| ParticleField::new(&theme.particles, w, h));

		*context_init.borrow_mut() = Some(CanvasContext {
			state: TopologyState::new(&data.get(), w, h),
			scale: ScaleConfig::default(),
			theme,
			particles,
			press: None,
			moved: 0.0,
		});

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;
				c.state.tick(dt as f32);
				if let Some(ref mut field) = c.particles {
					field.update(dt);
				}
				render::render(&c.state, &ctx, &c.scale, &c.theme, c.particles.as_ref());
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.press = Some((x, y));
			c.moved = 0.0;

			if let Some(idx) = c.state.node_at_position(x, y, &c.scale) {
				c.state.drag.active = true;
				c.state.drag.node_idx = Some(idx);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				c.state.graph.visit_nodes(|node| {
					if node.index() == idx {
						c.state.drag.node_start_x = node.x();
						c.state.drag.node_start_y = node.y();
					}
				});
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.transform_start_x = c.state.transform.x;
				c.state.pan.transform_start_y = c.state.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if let Some((px, py)) = c.press {
				c.moved = c.moved.max(((x - px).powi(2) + (y - py).powi(2)).sqrt());
			}

			if !c.state.drag.active {
				let hovered = c.state.node_at_position(x, y, &c.scale);
				c.state.set_hover(hovered);
			}

			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					let (dx, dy) = (
						(x - c.state.drag.start_x) / c.state.transform.k,
						(y - c.state.drag.start_y) / c.state.transform.k,
					);
					let (nx, ny) = (
						c.state.drag.node_start_x + dx as f32,
						c.state.drag.node_start_y + dy as f32,
					);
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut c) = *context_mu.borrow_mut() {
			// A press that barely moved is a selection click.
			if c.press.take().is_some() && c.moved < CLICK_SLOP {
				let target = c.state.click_target(x, y, &c.scale);
				selection.set(graph::resolve(target, &data.get_untracked()));
			}

			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.press = None;
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			c.state.set_hover(None);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="topology-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
