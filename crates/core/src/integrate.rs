//! Cumulative integrals of uniformly spaced samples.
//!
//! Position is recovered with the trapezoidal rule and velocity with forward
//! Euler, so velocity is only first-order accurate.

/// Integrates velocities into positions with the trapezoidal rule.
///
/// ```text
///   x[0] = x0
///   x[k] = x[k-1] + 0.5 * (v[k-1] + v[k]) * dt
/// ```
///
/// Returns an empty vector for empty input.
#[must_use]
pub fn position_from_velocity(velocities: &[f64], x0: f64, dt: f64) -> Vec<f64> {
    accumulate(velocities, x0, |pair| 0.5 * (pair[0] + pair[1]) * dt)
}

/// Integrates accelerations into velocities with forward Euler.
///
/// ```text
///   v[0] = v0
///   v[k] = v[k-1] + a[k-1] * dt
/// ```
///
/// Returns an empty vector for empty input.
#[must_use]
pub fn velocity_from_acceleration(accelerations: &[f64], v0: f64, dt: f64) -> Vec<f64> {
    accumulate(accelerations, v0, |pair| pair[0] * dt)
}

/// Runs a cumulative sum starting at `initial`, adding `increment` of each
/// consecutive pair of samples.
fn accumulate(samples: &[f64], initial: f64, increment: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut integral = Vec::with_capacity(samples.len());
    integral.push(initial);

    let mut current = initial;
    for pair in samples.windows(2) {
        current += increment(pair);
        integral.push(current);
    }

    integral
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn trapezoidal_position_is_exact_for_linear_velocity() {
        let dt = 0.1;
        let velocities: Vec<f64> = (0..=10).map(|i| 5.0 + 2.0 * f64::from(i) * dt).collect();

        let positions = position_from_velocity(&velocities, 1.0, dt);

        assert_eq!(positions.len(), 11);
        assert_eq!(positions[0], 1.0);
        // 1 + 5 * 1 + 0.5 * 2 * 1^2
        assert_relative_eq!(positions[10], 7.0, epsilon = 1e-12);
    }

    #[test]
    fn euler_velocity_uses_preceding_sample_only() {
        let accelerations = [1.0, 2.0, 3.0];

        let velocities = velocity_from_acceleration(&accelerations, 10.0, 0.5);

        // The last acceleration never contributes.
        assert_eq!(velocities, vec![10.0, 10.5, 11.5]);
    }

    #[test]
    fn euler_lags_trapezoid_on_ramps() {
        let ramp = [0.0, 1.0, 2.0];

        let euler = velocity_from_acceleration(&ramp, 0.0, 1.0);
        let trapezoid = position_from_velocity(&ramp, 0.0, 1.0);

        assert_eq!(euler, vec![0.0, 0.0, 1.0]);
        assert_eq!(trapezoid, vec![0.0, 0.5, 2.0]);
    }

    #[test]
    fn single_sample_keeps_initial_value() {
        assert_eq!(position_from_velocity(&[9.0], 4.0, 0.1), vec![4.0]);
        assert_eq!(velocity_from_acceleration(&[9.0], -4.0, 0.1), vec![-4.0]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(position_from_velocity(&[], 1.0, 0.1).is_empty());
        assert!(velocity_from_acceleration(&[], 1.0, 0.1).is_empty());
    }
}
