use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use cylinder_field_core::mesh_data::MeshData;

/// Convert generated triangle data into a renderable mesh.
///
/// The generation pass already baked world placement into a transform,
/// so positions upload unchanged.
pub fn mesh_from_data(data: &MeshData) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, data.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals.clone());
    mesh.insert_indices(Indices::U32(data.indices.clone()));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_vertex_and_index_counts() {
        let data = MeshData {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            indices: vec![0, 1, 2],
        };

        let mesh = mesh_from_data(&data);
        assert_eq!(mesh.count_vertices(), 3);
        assert_eq!(
            mesh.indices().map(|indices| indices.len()),
            Some(3)
        );
    }
}
