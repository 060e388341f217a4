use constants::render_settings::{PARAM_MAX, PARAM_MIN};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB colour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channel values as 0–1 floats for material construction.
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
        ]
    }
}

/// One uniformly sampled 24-bit colour, used per field cylinder.
///
/// Distinctness between cylinders is not guaranteed.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let bits: u32 = rng.random_range(0..0x0100_0000);
    Rgb::new((bits >> 16) as u8, (bits >> 8) as u8, bits as u8)
}

/// Deterministic red↔green gradient for the boundary ring.
///
/// `value` of -100 is pure red, 100 pure green, with `red + green == 255`
/// at every step in between. Out-of-range input is clamped rather than
/// wrapped or truncated.
pub fn ring_color(value: i32) -> Rgb {
    let shifted = (value.clamp(PARAM_MIN, PARAM_MAX) + 100) as f32;
    let green = ((255.0 / 200.0) * shifted).floor() as u8;
    Rgb::new(255 - green, green, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn ring_color_endpoints_and_midpoint() {
        assert_eq!(ring_color(-100), Rgb::new(255, 0, 0));
        assert_eq!(ring_color(100), Rgb::new(0, 255, 0));
        assert_eq!(ring_color(0), Rgb::new(128, 127, 0));
    }

    #[test]
    fn ring_color_channels_always_sum_to_full_intensity() {
        for value in -100..=100 {
            let c = ring_color(value);
            assert_eq!(c.red as u16 + c.green as u16, 255, "value {value}");
            assert_eq!(c.blue, 0);
        }
    }

    #[test]
    fn ring_color_clamps_out_of_range_input() {
        assert_eq!(ring_color(150), ring_color(100));
        assert_eq!(ring_color(-250), ring_color(-100));
    }

    #[test]
    fn random_color_is_deterministic_under_a_seeded_source() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }
}
