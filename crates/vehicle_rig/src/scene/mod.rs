//! Scene management system
//!
//! A tree of renderable nodes with local transforms. The vehicle core only
//! needs a handful of operations from it:
//!
//! ```text
//! create node ─► attach to parent ─► set position/rotation
//!                                  └► query world position / look at point
//! ```
//!
//! Nodes live in a slot map arena; [`NodeId`] handles stay valid until the
//! node is removed, and stale handles are reported rather than reused.

mod node;
mod scene_graph;

pub use node::{NodeKind, SceneNode};
pub use scene_graph::{NodeId, SceneError, SceneGraph};
