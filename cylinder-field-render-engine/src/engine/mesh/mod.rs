//! Mesh conversion from generated data to renderable bevy meshes.

/// Conversion of core `MeshData` into an indexed triangle-list mesh.
pub mod generated_mesh;

pub use generated_mesh::mesh_from_data;
