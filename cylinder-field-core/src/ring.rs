//! Boundary ring construction via boolean subtraction of coaxial solids.

use crate::color::Rgb;
use crate::csg;
use crate::error::GenerationError;
use crate::grid::GridPlan;
use crate::mesh_data::MeshData;
use crate::solid::Solid;
use constants::layout::{CELL_HALF_SPACING, CYLINDER_SEGMENTS, RING_HEIGHT, RING_WALL_OFFSET};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Dimensions and colour of the annular boundary ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub thickness: f32,
    pub color: Rgb,
}

impl RingSpec {
    /// Size the ring so its footprint covers the grid's diagonal extent.
    pub fn from_plan(plan: &GridPlan, color: Rgb) -> Self {
        let outer_radius =
            plan.side_length as f32 * CELL_HALF_SPACING * std::f32::consts::SQRT_2;
        Self {
            outer_radius,
            inner_radius: outer_radius - RING_WALL_OFFSET,
            thickness: RING_HEIGHT,
            color,
        }
    }
}

/// A carved ring mesh together with its baked world offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingMesh {
    pub spec: RingSpec,
    pub mesh: MeshData,
    /// World translation recentring the ring over the field's footprint.
    pub position: [f32; 3],
}

/// Carve the annular boundary wall: outer solid minus inner solid.
///
/// Both solids share their axis, height and tessellation phase, so every
/// clipping plane of the inner solid meets the outer solid's polygons
/// either cleanly or at existing vertices. The subtraction result is
/// triangulated and rejected as [`GenerationError::DegenerateGeometry`]
/// unless it forms a closed manifold, so a broken ring never reaches the
/// composer.
pub fn build_ring(plan: &GridPlan, color: Rgb) -> Result<RingMesh, GenerationError> {
    let spec = RingSpec::from_plan(plan, color);
    if spec.inner_radius <= 0.0 {
        return Err(GenerationError::DegenerateGeometry {
            reason: format!(
                "inner radius {} is not strictly positive",
                spec.inner_radius
            ),
        });
    }

    let outer = Solid::cylinder(
        spec.outer_radius as f64,
        spec.thickness as f64,
        CYLINDER_SEGMENTS,
        DVec3::ZERO,
    );
    let inner = Solid::cylinder(
        spec.inner_radius as f64,
        spec.thickness as f64,
        CYLINDER_SEGMENTS,
        DVec3::ZERO,
    );

    let carved = csg::subtract(&outer, &inner);
    let mesh = MeshData::from_solid(&carved);
    if !mesh.is_manifold() {
        return Err(GenerationError::DegenerateGeometry {
            reason: "subtraction did not close into a manifold annulus".into(),
        });
    }

    let offset = plan.centre_offset();
    Ok(RingMesh {
        spec,
        mesh,
        position: [offset, 0.0, offset],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_for(count: i32) -> RingMesh {
        let plan = GridPlan::plan(count).unwrap();
        build_ring(&plan, Rgb::new(255, 0, 0)).expect("ring should build")
    }

    #[test]
    fn spec_is_sized_from_the_grid_diagonal() {
        let ring = ring_for(20);
        assert!((ring.spec.outer_radius - 106.066).abs() < 1e-2);
        assert_eq!(
            ring.spec.inner_radius,
            ring.spec.outer_radius - RING_WALL_OFFSET
        );
        assert_eq!(ring.spec.thickness, RING_HEIGHT);
        assert!(ring.spec.inner_radius < ring.spec.outer_radius);
    }

    #[test]
    fn ring_is_recentred_over_the_field() {
        let ring = ring_for(20);
        assert_eq!(ring.position, [75.0, 0.0, 75.0]);
    }

    #[test]
    fn carved_mesh_spans_inner_to_outer_radius() {
        let ring = ring_for(20);

        let mut min_radius = f32::INFINITY;
        let mut max_radius: f32 = 0.0;
        for position in &ring.mesh.positions {
            let r = (position[0] * position[0] + position[2] * position[2]).sqrt();
            min_radius = min_radius.min(r);
            max_radius = max_radius.max(r);
            assert!(position[1].abs() <= RING_HEIGHT / 2.0 + 1e-4);
        }

        // The hole boundary sits on the inner solid's cross-section.
        assert!((min_radius - ring.spec.inner_radius).abs() < 1e-2);
        assert!((max_radius - ring.spec.outer_radius).abs() < 1e-2);
    }

    #[test]
    fn carved_mesh_is_a_closed_manifold_for_every_count() {
        // Small grids once failed here: a clipping plane reaching across
        // the tessellation seam left stranded cut vertices on the cap
        // edges. Redundant with build_ring's own validation, but pins
        // the property over the whole accepted range.
        for count in 1..=100 {
            let ring = ring_for(count);
            assert!(ring.mesh.is_manifold(), "count {count}");
        }
    }
}
