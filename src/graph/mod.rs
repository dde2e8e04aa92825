//! Graph-model core: expansion of the parsed Compose description into the
//! renderable node/edge set, plus click-selection resolution.
//!
//! Everything here is pure and UI-free; the canvas widget consumes the
//! output, it never feeds back into it.

mod builder;
mod model;
mod select;

pub use builder::build_render_graph;
pub use model::{EdgeKind, NodeKind, RenderEdge, RenderGraph, RenderNode, ResourceKind};
pub use select::{ClickTarget, Selection, resolve};
