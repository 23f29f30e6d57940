use crate::camera::PerspectiveCamera;
use crate::geometry::BoxGeometry;
use orbitcube_common::{Color, Transform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a node in a [`Scene`]. Allocated sequentially, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Flat-colored surface that ignores lighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshBasicMaterial {
    pub color: Color,
}

/// Renderable object: a shape, its appearance, and where it sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub geometry: BoxGeometry,
    pub material: MeshBasicMaterial,
    pub transform: Transform,
}

impl Mesh {
    /// Mesh placed at the origin with an identity transform.
    pub fn new(geometry: BoxGeometry, material: MeshBasicMaterial) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Mesh(Mesh),
    Camera(PerspectiveCamera),
}

impl Node {
    fn kind(&self) -> &'static str {
        match self {
            Node::Mesh(_) => "mesh",
            Node::Camera(_) => "camera",
        }
    }
}

/// Errors from node lookups.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
    #[error("node {id} is a {found}, expected a {expected}")]
    WrongKind {
        id: NodeId,
        expected: &'static str,
        found: &'static str,
    },
}

/// Scene graph root.
///
/// Uses BTreeMap so nodes iterate in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    nodes: BTreeMap<NodeId, Node>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        tracing::debug!("scene: added {} {id}", node.kind());
        self.nodes.insert(id, node);
        id
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> NodeId {
        self.insert(Node::Mesh(mesh))
    }

    pub fn add_camera(&mut self, camera: PerspectiveCamera) -> NodeId {
        self.insert(Node::Camera(camera))
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(&id).ok_or(SceneError::NodeNotFound(id))
    }

    pub fn mesh(&self, id: NodeId) -> Result<&Mesh, SceneError> {
        match self.node(id)? {
            Node::Mesh(mesh) => Ok(mesh),
            other => Err(SceneError::WrongKind {
                id,
                expected: "mesh",
                found: other.kind(),
            }),
        }
    }

    pub fn camera(&self, id: NodeId) -> Result<&PerspectiveCamera, SceneError> {
        match self.node(id)? {
            Node::Camera(camera) => Ok(camera),
            other => Err(SceneError::WrongKind {
                id,
                expected: "camera",
                found: other.kind(),
            }),
        }
    }

    pub fn camera_mut(&mut self, id: NodeId) -> Result<&mut PerspectiveCamera, SceneError> {
        match self.nodes.get_mut(&id) {
            Some(Node::Camera(camera)) => Ok(camera),
            Some(other) => Err(SceneError::WrongKind {
                id,
                expected: "camera",
                found: other.kind(),
            }),
            None => Err(SceneError::NodeNotFound(id)),
        }
    }

    /// All meshes, in insertion order.
    pub fn meshes(&self) -> impl Iterator<Item = (NodeId, &Mesh)> {
        self.nodes.iter().filter_map(|(id, node)| match node {
            Node::Mesh(mesh) => Some((*id, mesh)),
            Node::Camera(_) => None,
        })
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    pub fn camera_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| matches!(node, Node::Camera(_)))
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn cube() -> Mesh {
        Mesh::new(
            BoxGeometry::new(1.0, 1.0, 1.0),
            MeshBasicMaterial {
                color: Color::from_hex(0xff0000),
            },
        )
    }

    #[test]
    fn empty_scene() {
        let scene = Scene::new();
        assert_eq!(scene.node_count(), 0);
        assert_eq!(scene.mesh_count(), 0);
        assert_eq!(scene.camera_count(), 0);
    }

    #[test]
    fn ids_are_sequential() {
        let mut scene = Scene::new();
        let a = scene.add_mesh(cube());
        let b = scene.add_camera(PerspectiveCamera::new(75.0, 1.0, 1.0, 100.0));
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.camera_count(), 1);
    }

    #[test]
    fn lookup_wrong_kind() {
        let mut scene = Scene::new();
        let mesh = scene.add_mesh(cube());
        let err = scene.camera(mesh).unwrap_err();
        assert_eq!(
            err,
            SceneError::WrongKind {
                id: mesh,
                expected: "camera",
                found: "mesh",
            }
        );
        assert!(scene.camera_mut(mesh).is_err());
    }

    #[test]
    fn lookup_missing_node() {
        let scene = Scene::new();
        assert_eq!(
            scene.mesh(NodeId(7)).unwrap_err(),
            SceneError::NodeNotFound(NodeId(7))
        );
        assert!(format!("{}", SceneError::NodeNotFound(NodeId(7))).contains("#7"));
    }

    #[test]
    fn camera_mut_edits_in_place() {
        let mut scene = Scene::new();
        let id = scene.add_camera(PerspectiveCamera::new(75.0, 1.0, 1.0, 100.0));
        scene.camera_mut(id).unwrap().position = Vec3::new(0.0, 0.0, 5.0);
        assert_eq!(scene.camera(id).unwrap().position.z, 5.0);
    }

    #[test]
    fn new_mesh_sits_at_origin() {
        assert_eq!(cube().transform.position, Vec3::ZERO);
    }
}
