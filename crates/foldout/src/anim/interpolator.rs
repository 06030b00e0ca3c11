use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use strum::{Display, EnumString};

/// Timing curve mapping linear progress in `[0, 1]` onto eased progress.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Interpolator {
    Linear,
    #[default]
    AccelerateDecelerate,
    /// Decelerates into the midpoint, then accelerates out of it.
    Hesitate,
}

impl Interpolator {
    pub fn interpolate(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Self::Hesitate => {
                let x = 2.0 * t - 1.0;
                0.5 * (x * x * x + 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_curves_hit_endpoints() {
        for curve in [
            Interpolator::Linear,
            Interpolator::AccelerateDecelerate,
            Interpolator::Hesitate,
        ] {
            assert!(curve.interpolate(0.0).abs() < EPSILON, "{curve} at 0");
            let end = curve.interpolate(1.0);
            assert!((end - 1.0).abs() < EPSILON, "{curve} at 1");
        }
    }

    #[test]
    fn test_hesitate_flattens_around_midpoint() {
        let curve = Interpolator::Hesitate;
        assert!((curve.interpolate(0.5) - 0.5).abs() < EPSILON);

        let near_middle = curve.interpolate(0.6) - curve.interpolate(0.5);
        let near_end = curve.interpolate(1.0) - curve.interpolate(0.9);
        assert!(near_middle < 0.01);
        assert!(near_end > 0.2);
    }

    #[test]
    fn test_out_of_range_fraction_is_clamped() {
        assert_eq!(Interpolator::Linear.interpolate(1.7), 1.0);
        assert_eq!(Interpolator::Linear.interpolate(-0.3), 0.0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "hesitate".parse::<Interpolator>().unwrap(),
            Interpolator::Hesitate
        );
        assert_eq!(
            "Accelerate_Decelerate".parse::<Interpolator>().unwrap(),
            Interpolator::AccelerateDecelerate
        );
    }
}
