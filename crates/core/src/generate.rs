use log::debug;

use crate::{Params, Trajectory};

/// Slack added to the window end so the nominal final sample survives
/// floating-point accumulation in `t0 + i * dt`.
const END_TOLERANCE: f64 = 1e-12;

/// Scale used to round stored values to 8 fractional digits.
const ROUNDING_SCALE: f64 = 1e8;

/// Samples a constant-acceleration trajectory.
///
/// For each `t = t0 + i * dt` with `t <= t1 + 1e-12` the sample is:
///
/// ```text
///   x(t) = x0 + v0 * t + 0.5 * a * t^2
///   v(t) = v0 + a * t
///   a(t) = a
/// ```
///
/// Every stored value is rounded to 8 fractional digits.
/// Generation stops silently once `max_points` samples exist, even if `t1`
/// has not been reached.
///
/// A non-positive or non-finite `dt` yields an empty trajectory; surfacing
/// that to a user is the caller's job. An inverted window (`t1 < t0`) is not
/// checked here and also yields an empty trajectory.
#[must_use]
pub fn generate(params: &Params) -> Trajectory {
    let Params {
        x0,
        v0,
        a,
        t0,
        t1,
        dt,
        max_points,
    } = *params;

    let mut trajectory = Trajectory::empty(x0, v0, dt);
    if !dt.is_finite() || dt <= 0.0 {
        debug!("skipping generation: step {dt} is not positive");
        return trajectory;
    }

    let mut step = 0_u32;
    loop {
        let t = t0 + f64::from(step) * dt;
        if t > t1 + END_TOLERANCE {
            break;
        }
        if trajectory.len() >= max_points {
            debug!("truncated at {max_points} samples before reaching t1 = {t1}");
            break;
        }

        trajectory.times.push(round(t));
        trajectory.positions.push(round(x0 + v0 * t + 0.5 * a * t * t));
        trajectory.velocities.push(round(v0 + a * t));
        trajectory.accelerations.push(round(a));

        step += 1;
    }

    debug!("generated {} samples over [{t0}, {t1}] at dt = {dt}", trajectory.len());
    trajectory
}

/// Rounds to 8 fractional digits to suppress floating-point noise.
fn round(value: f64) -> f64 {
    (value * ROUNDING_SCALE).round() / ROUNDING_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn params(x0: f64, v0: f64, a: f64, t0: f64, t1: f64, dt: f64) -> Params {
        Params {
            x0,
            v0,
            a,
            t0,
            t1,
            dt,
            ..Params::default()
        }
    }

    #[test]
    fn constant_acceleration_over_ten_seconds() {
        let trajectory = generate(&params(0.0, 5.0, 2.0, 0.0, 10.0, 0.1));

        assert_eq!(trajectory.len(), 101);
        assert_eq!(trajectory.times()[0], 0.0);
        assert_eq!(trajectory.positions()[0], 0.0);
        assert_eq!(trajectory.velocities()[0], 5.0);

        assert_relative_eq!(trajectory.times()[100], 10.0);
        assert_relative_eq!(trajectory.positions()[100], 150.0);
        assert_relative_eq!(trajectory.velocities()[100], 25.0);
        assert!(trajectory.accelerations().iter().all(|&a| a == 2.0));
    }

    #[test]
    fn sequences_share_length_and_spacing() {
        let trajectory = generate(&params(1.5, -2.0, 0.3, 2.0, 7.0, 0.25));

        let n = trajectory.len();
        assert_eq!(n, 21);
        assert_eq!(trajectory.positions().len(), n);
        assert_eq!(trajectory.velocities().len(), n);
        assert_eq!(trajectory.accelerations().len(), n);

        assert_relative_eq!(trajectory.times()[0], 2.0);
        for pair in trajectory.times().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.25, epsilon = 1e-8);
        }
    }

    #[test]
    fn zero_step_yields_empty_trajectory() {
        let trajectory = generate(&params(0.0, 5.0, 2.0, 0.0, 10.0, 0.0));

        assert!(trajectory.is_empty());
        assert!(trajectory.positions().is_empty());
        assert!(trajectory.velocities().is_empty());
        assert!(trajectory.accelerations().is_empty());
    }

    #[test]
    fn negative_or_nan_step_yields_empty_trajectory() {
        assert!(generate(&params(0.0, 0.0, 0.0, 0.0, 1.0, -0.1)).is_empty());
        assert!(generate(&params(0.0, 0.0, 0.0, 0.0, 1.0, f64::NAN)).is_empty());
        assert!(generate(&params(0.0, 0.0, 0.0, 0.0, 1.0, f64::INFINITY)).is_empty());
    }

    #[test]
    fn stops_at_max_points() {
        let trajectory = generate(&Params {
            t1: 1000.0,
            dt: 0.001,
            max_points: 1000,
            ..Params::default()
        });

        assert_eq!(trajectory.len(), 1000);
        assert_relative_eq!(trajectory.times()[999], 0.999);
    }

    #[test]
    fn includes_end_point_despite_accumulation() {
        // 0.3 / 0.1 is not exact in binary.
        let trajectory = generate(&params(0.0, 0.0, 0.0, 0.0, 0.3, 0.1));

        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory.times(), &[0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn degenerate_window_has_single_sample() {
        let trajectory = generate(&params(3.0, 1.0, 0.0, 0.0, 0.0, 0.1));

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.positions(), &[3.0]);
    }

    #[test]
    fn inverted_window_yields_empty_trajectory() {
        let trajectory = generate(&params(0.0, 0.0, 0.0, 5.0, 1.0, 0.1));

        assert!(trajectory.is_empty());
    }

    #[test]
    fn values_are_rounded_to_eight_digits() {
        let trajectory = generate(&params(0.0, 0.0, 0.0, 0.0, 0.3, 0.1));

        // Without rounding 3 * 0.1 would be 0.30000000000000004.
        assert_eq!(trajectory.times()[3], 0.3);
        assert_eq!(round(1.234_567_891_2), 1.234_567_89);
    }

    #[test]
    fn generation_is_repeatable() {
        let p = params(2.0, -1.0, 9.81, 0.0, 3.0, 0.05);

        assert_eq!(generate(&p), generate(&p));
    }
}
