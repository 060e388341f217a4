use crate::error::GenerationError;
use constants::layout::{CELL_HALF_SPACING, CELL_SPACING};
use serde::{Deserialize, Serialize};

/// Square logical grid sized to hold a requested number of cylinders.
///
/// Immutable once planned; every regeneration pass computes a fresh plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPlan {
    /// Number of cells along each side, `ceil(sqrt(cylinder_count))`.
    pub side_length: u32,
    /// World-space spacing between neighbouring cells.
    pub cell_spacing: f32,
}

impl GridPlan {
    /// Plan the smallest square grid with at least `cylinder_count` cells.
    ///
    /// Counts below one are rejected: a grid side of `sqrt(0)` or of a
    /// negative number is meaningless, so the pass fails before any
    /// geometry is built.
    pub fn plan(cylinder_count: i32) -> Result<Self, GenerationError> {
        if cylinder_count < 1 {
            return Err(GenerationError::InvalidParameter {
                name: "cylinder_count",
                value: cylinder_count,
                expected: "a positive integer",
            });
        }

        let side_length = (cylinder_count as f64).sqrt().ceil() as u32;
        Ok(Self {
            side_length,
            cell_spacing: CELL_SPACING,
        })
    }

    /// Map a linear cylinder index to its (column, row) cell.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.side_length, index / self.side_length)
    }

    /// Distance from the grid origin to the centre of its footprint,
    /// along both horizontal axes.
    pub fn centre_offset(&self) -> f32 {
        self.side_length as f32 * CELL_HALF_SPACING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_side_length_is_ceil_sqrt() {
        assert_eq!(GridPlan::plan(1).unwrap().side_length, 1);
        assert_eq!(GridPlan::plan(4).unwrap().side_length, 2);
        assert_eq!(GridPlan::plan(5).unwrap().side_length, 3);
        assert_eq!(GridPlan::plan(16).unwrap().side_length, 4);
        assert_eq!(GridPlan::plan(17).unwrap().side_length, 5);
        assert_eq!(GridPlan::plan(20).unwrap().side_length, 5);
        assert_eq!(GridPlan::plan(100).unwrap().side_length, 10);
    }

    #[test]
    fn plan_always_holds_every_cylinder() {
        for n in 1..=100 {
            let side = GridPlan::plan(n).unwrap().side_length;
            assert!(
                side * side >= n as u32,
                "side {side} cannot hold {n} cylinders"
            );
        }
    }

    #[test]
    fn plan_rejects_zero_and_negative_counts() {
        assert!(matches!(
            GridPlan::plan(0),
            Err(GenerationError::InvalidParameter { name: "cylinder_count", .. })
        ));
        assert!(GridPlan::plan(-5).is_err());
    }

    #[test]
    fn cell_maps_indices_row_by_row() {
        let plan = GridPlan::plan(20).unwrap();
        assert_eq!(plan.cell(0), (0, 0));
        assert_eq!(plan.cell(4), (4, 0));
        assert_eq!(plan.cell(5), (0, 1));
        assert_eq!(plan.cell(19), (4, 3));

        for index in 0..20 {
            let (column, row) = plan.cell(index);
            assert!(column < plan.side_length);
            assert_eq!(row, index / plan.side_length);
        }
    }

    #[test]
    fn centre_offset_covers_half_the_footprint() {
        let plan = GridPlan::plan(20).unwrap();
        assert_eq!(plan.centre_offset(), 75.0);
    }
}
