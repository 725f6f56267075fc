//! Scene graph arena
//!
//! Parent/child attachment and world-space queries over nodes stored in a
//! [`SlotMap`]. Local transforms compose parent-first, so a child's world
//! transform is `root ∘ … ∘ parent ∘ child`.

use super::{NodeKind, SceneNode};
use crate::foundation::math::{utils, Quat, Transform, Vec3};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a node in a [`SceneGraph`]
    pub struct NodeId;
}

/// Scene graph errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// Handle does not refer to a live node
    #[error("Unknown scene node: {0:?}")]
    UnknownNode(NodeId),

    /// Attaching would make a node its own ancestor
    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// Requested parent
        parent: NodeId,
        /// Requested child
        child: NodeId,
    },
}

/// Tree of scene nodes
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, SceneNode>,
}

impl SceneGraph {
    /// Create a new empty scene graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unparented node at the origin
    pub fn create_node(&mut self, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let node = SceneNode::new(name, kind);
        log::trace!("Creating scene node '{}' ({:?})", node.name, kind);
        self.nodes.insert(node)
    }

    /// Whether `id` refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Borrow a node
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::UnknownNode(id))
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` under `parent`, detaching it from any previous parent
    ///
    /// The child's local transform is kept as-is and is from now on
    /// interpreted relative to `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        if !self.contains(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        if !self.contains(child) {
            return Err(SceneError::UnknownNode(child));
        }

        // Walk up from the new parent; meeting the child means a cycle.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(SceneError::Cycle { parent, child });
            }
            cursor = self.nodes[id].parent;
        }

        self.detach(child)?;
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from its parent, leaving it at the top level
    pub fn detach(&mut self, child: NodeId) -> Result<(), SceneError> {
        let previous = self.node_mut(child)?.parent.take();
        if let Some(parent) = previous {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.retain(|&id| id != child);
            }
        }
        Ok(())
    }

    /// Remove a node and its whole subtree
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), SceneError> {
        self.detach(id)?;

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                log::trace!("Removed scene node '{}'", node.name);
                pending.extend(node.children);
            }
        }
        Ok(())
    }

    /// Local position
    pub fn position(&self, id: NodeId) -> Option<Vec3> {
        self.node(id).map(|node| node.local.position)
    }

    /// Local rotation
    pub fn rotation(&self, id: NodeId) -> Option<Quat> {
        self.node(id).map(|node| node.local.rotation)
    }

    /// Set local position
    pub fn set_position(&mut self, id: NodeId, position: Vec3) -> Result<(), SceneError> {
        self.node_mut(id)?.local.position = position;
        Ok(())
    }

    /// Set local rotation
    pub fn set_rotation(&mut self, id: NodeId, rotation: Quat) -> Result<(), SceneError> {
        self.node_mut(id)?.local.rotation = rotation;
        Ok(())
    }

    /// Rotate about the node's own X axis (composes on the right)
    pub fn rotate_x(&mut self, id: NodeId, angle: f32) -> Result<(), SceneError> {
        let node = self.node_mut(id)?;
        node.local.rotation *= Quat::from_axis_angle(&Vec3::x_axis(), angle);
        Ok(())
    }

    /// World transform, composed from the root down
    pub fn world_transform(&self, id: NodeId) -> Option<Transform> {
        let mut world = self.node(id)?.local;
        let mut cursor = self.nodes[id].parent;
        while let Some(parent) = cursor {
            let node = self.node(parent)?;
            world = node.local.combine(&world);
            cursor = node.parent;
        }
        Some(world)
    }

    /// World-space position
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_transform(id).map(|world| world.position)
    }

    /// Place a node at a world-space position, whatever its parent chain
    pub fn set_world_position(&mut self, id: NodeId, position: Vec3) -> Result<(), SceneError> {
        let parent = self.node(id).ok_or(SceneError::UnknownNode(id))?.parent;
        let local = match parent.and_then(|p| self.world_transform(p)) {
            Some(parent_world) => parent_world
                .inverse()
                .transform_point(position.into())
                .coords,
            None => position,
        };
        self.set_position(id, local)
    }

    /// Orient a node toward a world-space point with +Y as up
    ///
    /// Cameras point their -Z axis at the target, other nodes their +Z axis.
    /// A target at the node's own position leaves the rotation unchanged.
    pub fn look_at(&mut self, id: NodeId, target: Vec3) -> Result<(), SceneError> {
        let node = self.node(id).ok_or(SceneError::UnknownNode(id))?;
        let kind = node.kind;
        let parent = node.parent;
        let eye = self.world_position(id).ok_or(SceneError::UnknownNode(id))?;

        let toward = target - eye;
        let facing = match kind {
            NodeKind::Camera => -toward,
            NodeKind::Group | NodeKind::Mesh => toward,
        };
        let Some(world_rotation) = utils::look_rotation(&facing, &Vec3::y()) else {
            log::trace!("look_at target coincides with node position, keeping rotation");
            return Ok(());
        };

        let local_rotation = match parent.and_then(|p| self.world_transform(p)) {
            Some(parent_world) => parent_world.rotation.inverse() * world_rotation,
            None => world_rotation,
        };
        self.set_rotation(id, local_rotation)
    }
}
