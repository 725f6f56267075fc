//! Scene node data

use super::NodeId;
use crate::foundation::math::Transform;

/// What a node represents, which decides its facing convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Transform-only anchor (camera root, pivot)
    Group,
    /// Renderable mesh; faces +Z
    Mesh,
    /// Camera; looks down -Z
    Camera,
}

/// A node in the scene graph
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Debug name
    pub name: String,
    /// Node kind
    pub kind: NodeKind,
    /// Transform relative to the parent (or world when unparented)
    pub local: Transform,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl SceneNode {
    pub(super) fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            local: Transform::identity(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Parent node, if attached
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
