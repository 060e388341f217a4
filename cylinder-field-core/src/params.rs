use crate::error::GenerationError;
use constants::render_settings::{
    DEFAULT_CYLINDER_COUNT, DEFAULT_RING_COLOR_VALUE, PARAM_MAX,
};
use serde::{Deserialize, Serialize};

/// User-facing inputs for one regeneration pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of field cylinders, valid in `[1, 100]`.
    pub cylinder_count: i32,
    /// Ring gradient parameter; out-of-range values are clamped by the
    /// colour assigner rather than rejected here.
    pub ring_color_value: i32,
    /// Whether the boundary ring variant of the scene is built at all.
    pub include_ring: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            cylinder_count: DEFAULT_CYLINDER_COUNT,
            ring_color_value: DEFAULT_RING_COLOR_VALUE,
            include_ring: true,
        }
    }
}

impl GenerationParams {
    /// Reject parameters outside the domain the generator is specified
    /// for, before any geometry is built.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.cylinder_count < 1 || self.cylinder_count > PARAM_MAX {
            return Err(GenerationError::InvalidParameter {
                name: "cylinder_count",
                value: self.cylinder_count,
                expected: "an integer in [1, 100]",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_untouched_ui() {
        let params = GenerationParams::default();
        assert_eq!(params.cylinder_count, 20);
        assert_eq!(params.ring_color_value, 20);
        assert!(params.include_ring);
    }

    #[test]
    fn validate_rejects_non_positive_and_oversized_counts() {
        for count in [-100, -1, 0, 101, 1000] {
            let params = GenerationParams {
                cylinder_count: count,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "count {count}");
        }
    }

    #[test]
    fn validate_accepts_the_full_nominal_range() {
        for count in 1..=100 {
            let params = GenerationParams {
                cylinder_count: count,
                ..Default::default()
            };
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn ring_color_value_is_never_rejected() {
        let params = GenerationParams {
            ring_color_value: 100_000,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
