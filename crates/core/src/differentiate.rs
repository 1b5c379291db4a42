//! Finite-difference derivative estimates on uniformly spaced samples.
//!
//! Interior points use central differences. Boundary points fall back to
//! one-sided first differences, or for the second difference, to the nearest
//! in-bounds triple of samples.

use thiserror::Error;

/// Errors that can occur when estimating a derivative.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("need at least {required} samples to differentiate, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },
}

/// Estimates velocity from positions sampled every `dt`.
///
/// ```text
///   v[0]   = (x[1] - x[0]) / dt
///   v[i]   = (x[i+1] - x[i-1]) / (2 dt)
///   v[N-1] = (x[N-1] - x[N-2]) / dt
/// ```
///
/// # Errors
///
/// Returns [`Error::InsufficientSamples`] if fewer than two positions are given.
pub fn velocity_from_position(positions: &[f64], dt: f64) -> Result<Vec<f64>, Error> {
    first_difference(positions, dt)
}

/// Estimates acceleration from velocities sampled every `dt`.
///
/// Uses the same scheme as [`velocity_from_position`].
///
/// # Errors
///
/// Returns [`Error::InsufficientSamples`] if fewer than two velocities are given.
pub fn acceleration_from_velocity(velocities: &[f64], dt: f64) -> Result<Vec<f64>, Error> {
    first_difference(velocities, dt)
}

/// Estimates acceleration from positions sampled every `dt`.
///
/// Interior points use the second difference
/// `(x[i+1] - 2 x[i] + x[i-1]) / dt^2`.
/// The two endpoints reuse the nearest triple rather than a one-sided
/// second difference, so `a[0] == a[1]` and `a[N-1] == a[N-2]`.
///
/// # Errors
///
/// Returns [`Error::InsufficientSamples`] if fewer than three positions are given.
pub fn acceleration_from_position(positions: &[f64], dt: f64) -> Result<Vec<f64>, Error> {
    let n = require(positions, 3)?;
    let dt2 = dt * dt;
    let second = |i: usize| (positions[i + 1] - 2.0 * positions[i] + positions[i - 1]) / dt2;

    let accelerations = (0..n).map(|i| second(i.clamp(1, n - 2))).collect();

    Ok(accelerations)
}

fn first_difference(values: &[f64], dt: f64) -> Result<Vec<f64>, Error> {
    let n = require(values, 2)?;

    let derivative = (0..n)
        .map(|i| {
            if i == 0 {
                (values[1] - values[0]) / dt
            } else if i == n - 1 {
                (values[n - 1] - values[n - 2]) / dt
            } else {
                (values[i + 1] - values[i - 1]) / (2.0 * dt)
            }
        })
        .collect();

    Ok(derivative)
}

fn require(values: &[f64], required: usize) -> Result<usize, Error> {
    if values.len() < required {
        return Err(Error::InsufficientSamples {
            required,
            actual: values.len(),
        });
    }
    Ok(values.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn velocity_uses_central_interior_and_one_sided_ends() {
        let positions = [0.0, 1.0, 4.0, 9.0];

        let velocities = velocity_from_position(&positions, 1.0).unwrap();

        assert_eq!(velocities, vec![1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn velocity_scales_with_step() {
        let positions = [0.0, 1.0, 2.0];

        let velocities = velocity_from_position(&positions, 0.5).unwrap();

        assert_eq!(velocities, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn velocity_from_two_samples() {
        let velocities = velocity_from_position(&[3.0, 5.0], 2.0).unwrap();

        assert_eq!(velocities, vec![1.0, 1.0]);
    }

    #[test]
    fn acceleration_from_position_reuses_nearest_triple_at_ends() {
        let positions = [0.0, 1.0, 4.0, 10.0, 20.0];

        let accelerations = acceleration_from_position(&positions, 1.0).unwrap();

        // Second differences at 1, 2, 3 are 2, 3, 4.
        assert_eq!(accelerations, vec![2.0, 2.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn acceleration_from_position_of_parabola_is_exact() {
        let dt = 0.1;
        let positions: Vec<f64> = (0..20)
            .map(|i| {
                let t = f64::from(i) * dt;
                1.0 + 2.0 * t + 0.5 * 3.0 * t * t
            })
            .collect();

        let accelerations = acceleration_from_position(&positions, dt).unwrap();

        for a in accelerations {
            assert_relative_eq!(a, 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn acceleration_from_three_positions_is_uniform() {
        let accelerations = acceleration_from_position(&[0.0, 1.0, 4.0], 1.0).unwrap();

        assert_eq!(accelerations, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn acceleration_from_velocity_matches_first_difference() {
        let velocities = [1.0, 3.0, 7.0];

        let accelerations = acceleration_from_velocity(&velocities, 1.0).unwrap();

        assert_eq!(accelerations, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn rejects_too_few_samples() {
        assert_eq!(
            velocity_from_position(&[1.0], 0.1),
            Err(Error::InsufficientSamples {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(
            acceleration_from_velocity(&[], 0.1),
            Err(Error::InsufficientSamples {
                required: 2,
                actual: 0
            })
        );
        assert_eq!(
            acceleration_from_position(&[1.0, 2.0], 0.1),
            Err(Error::InsufficientSamples {
                required: 3,
                actual: 2
            })
        );
    }
}
