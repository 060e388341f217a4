use crate::color::{Rgb, random_color};
use crate::grid::GridPlan;
use constants::layout::{CELL_HALF_SPACING, HEIGHT_RANGE};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One generated field cylinder with its baked world placement.
///
/// Created once per generation pass and never mutated; the next pass
/// discards the whole sequence and builds a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    pub index: u32,
    pub column: u32,
    pub row: u32,
    /// Signed extrusion sample in `[-100, 100)`; the solid's length is its
    /// absolute value, and the vertical position centres the solid so the
    /// sign only decides which way it grows from the ground plane.
    pub height: f32,
    pub position: [f32; 3],
    pub color: Rgb,
}

impl CylinderSpec {
    /// Extrusion length of the rendered solid.
    pub fn extrusion_length(&self) -> f32 {
        self.height.abs()
    }
}

/// Generate one cylinder per grid cell, filling rows left to right.
///
/// Exactly `count` specs are produced in ascending index order. The row
/// counter advances incrementally each time the index crosses a multiple
/// of the side length, mirroring a row-by-row fill. Each cylinder draws
/// its own height, jitter and colour samples, so the sequence is fully
/// reproducible from the random source alone. A plan with no cells
/// yields no cylinders.
pub fn generate_field<R: Rng + ?Sized>(
    count: u32,
    plan: &GridPlan,
    rng: &mut R,
) -> Vec<CylinderSpec> {
    if plan.side_length == 0 {
        return Vec::new();
    }

    let mut specs = Vec::with_capacity(count as usize);
    let mut row = 0u32;

    for index in 0..count {
        if index % plan.side_length == 0 && index != 0 {
            row += 1;
        }
        let column = index % plan.side_length;

        let height: f32 = rng.random_range(-HEIGHT_RANGE..HEIGHT_RANGE);
        // Jitter keeps the field organic while staying inside the cell.
        let jitter: f32 = rng.random_range(0.0..CELL_HALF_SPACING);

        let position = [
            column as f32 * plan.cell_spacing + jitter,
            height / 2.0,
            row as f32 * plan.cell_spacing,
        ];

        specs.push(CylinderSpec {
            index,
            column,
            row,
            height,
            position,
            color: random_color(rng),
        });
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn plan_for(count: i32) -> GridPlan {
        GridPlan::plan(count).unwrap()
    }

    #[test]
    fn generates_exactly_count_specs_in_index_order() {
        let plan = plan_for(20);
        let mut rng = StdRng::seed_from_u64(1);
        let specs = generate_field(20, &plan, &mut rng);

        assert_eq!(specs.len(), 20);
        for (i, spec) in specs.iter().enumerate() {
            assert_eq!(spec.index, i as u32);
        }
    }

    #[test]
    fn rows_and_columns_follow_the_plan() {
        let plan = plan_for(20);
        let mut rng = StdRng::seed_from_u64(2);
        let specs = generate_field(20, &plan, &mut rng);

        for spec in &specs {
            assert!(spec.column < plan.side_length);
            assert_eq!(spec.row, spec.index / plan.side_length);
        }
        // 20 cylinders on a 5-wide grid fill rows 0..=3.
        assert_eq!(specs.last().unwrap().row, 3);
    }

    #[test]
    fn placement_stays_inside_the_cell() {
        let plan = plan_for(20);
        let mut rng = StdRng::seed_from_u64(3);

        for spec in generate_field(20, &plan, &mut rng) {
            let cell_x = spec.column as f32 * plan.cell_spacing;
            assert!(spec.position[0] >= cell_x);
            assert!(spec.position[0] < cell_x + CELL_HALF_SPACING);
            assert_eq!(spec.position[2], spec.row as f32 * plan.cell_spacing);
        }
    }

    #[test]
    fn solids_are_vertically_centred_on_their_midpoint() {
        let plan = plan_for(9);
        let mut rng = StdRng::seed_from_u64(4);

        for spec in generate_field(9, &plan, &mut rng) {
            assert!(spec.height >= -HEIGHT_RANGE && spec.height < HEIGHT_RANGE);
            assert_eq!(spec.position[1], spec.height / 2.0);
            assert_eq!(spec.extrusion_length(), spec.height.abs());
        }
    }

    #[test]
    fn zero_count_yields_an_empty_sequence() {
        let plan = plan_for(1);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate_field(0, &plan, &mut rng).is_empty());
    }

    #[test]
    fn a_plan_without_cells_yields_an_empty_sequence() {
        // GridPlan::plan never produces this, but the fields are public.
        let plan = GridPlan {
            side_length: 0,
            cell_spacing: 30.0,
        };
        let mut rng = StdRng::seed_from_u64(6);
        assert!(generate_field(20, &plan, &mut rng).is_empty());
    }

    #[test]
    fn identical_seeds_reproduce_identical_fields() {
        let plan = plan_for(20);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_field(20, &plan, &mut a),
            generate_field(20, &plan, &mut b)
        );
    }
}
