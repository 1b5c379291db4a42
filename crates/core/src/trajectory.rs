use thiserror::Error;

use crate::Series;

/// Errors that can occur when assembling a [`Trajectory`] from raw samples.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(
        "sample sequences differ in length: times={times}, positions={positions}, \
         velocities={velocities}, accelerations={accelerations}"
    )]
    LengthMismatch {
        times: usize,
        positions: usize,
        velocities: usize,
        accelerations: usize,
    },
}

/// A sampled one-dimensional trajectory.
///
/// Holds four index-aligned sequences (time, position, velocity, acceleration)
/// together with the initial conditions and the fixed step used to produce
/// them. Index `i` refers to the same instant in every sequence.
///
/// The sequences are private so the equal-length invariant can only be
/// established by [`generate`](crate::generate), [`Trajectory::empty`], or
/// [`Trajectory::from_samples`], and only changed through
/// [`apply_edit`](crate::apply_edit).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub(crate) times: Vec<f64>,
    pub(crate) positions: Vec<f64>,
    pub(crate) velocities: Vec<f64>,
    pub(crate) accelerations: Vec<f64>,
    pub(crate) x0: f64,
    pub(crate) v0: f64,
    pub(crate) dt: f64,
}

/// One row of a [`Trajectory`], as shown in a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub x: f64,
    pub v: f64,
    pub a: f64,
}

impl Trajectory {
    /// Creates a trajectory with no samples.
    #[must_use]
    pub fn empty(x0: f64, v0: f64, dt: f64) -> Self {
        Self {
            times: Vec::new(),
            positions: Vec::new(),
            velocities: Vec::new(),
            accelerations: Vec::new(),
            x0,
            v0,
            dt,
        }
    }

    /// Creates a trajectory from already-computed sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the four sequences differ in length.
    pub fn from_samples(
        times: Vec<f64>,
        positions: Vec<f64>,
        velocities: Vec<f64>,
        accelerations: Vec<f64>,
        x0: f64,
        v0: f64,
        dt: f64,
    ) -> Result<Self, Error> {
        let len = times.len();
        if positions.len() != len || velocities.len() != len || accelerations.len() != len {
            return Err(Error::LengthMismatch {
                times: len,
                positions: positions.len(),
                velocities: velocities.len(),
                accelerations: accelerations.len(),
            });
        }

        Ok(Self {
            times,
            positions,
            velocities,
            accelerations,
            x0,
            v0,
            dt,
        })
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if no samples were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[must_use]
    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    #[must_use]
    pub fn accelerations(&self) -> &[f64] {
        &self.accelerations
    }

    /// Returns the sequence holding the given quantity.
    #[must_use]
    pub fn values(&self, series: Series) -> &[f64] {
        match series {
            Series::Position => &self.positions,
            Series::Velocity => &self.velocities,
            Series::Acceleration => &self.accelerations,
        }
    }

    /// Initial position, used as the integration constant for position.
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Initial velocity, used as the integration constant for velocity.
    #[must_use]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// The fixed step between consecutive samples.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Replaces the initial conditions without touching any sample.
    ///
    /// Edits never change `x0` or `v0` on their own; callers that keep an
    /// initial-condition form in sync use this after editing index 0.
    pub fn set_initial_conditions(&mut self, x0: f64, v0: f64) {
        self.x0 = x0;
        self.v0 = v0;
    }

    /// Iterates over the samples as `(t, x, v, a)` rows.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        (0..self.len()).map(|i| Sample {
            t: self.times[i],
            x: self.positions[i],
            v: self.velocities[i],
            a: self.accelerations[i],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_samples() {
        let trajectory = Trajectory::empty(1.0, 2.0, 0.5);

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.len(), 0);
        assert_eq!(trajectory.samples().count(), 0);
        assert_eq!(trajectory.x0(), 1.0);
        assert_eq!(trajectory.v0(), 2.0);
        assert_eq!(trajectory.dt(), 0.5);
    }

    #[test]
    fn from_samples_rejects_mismatched_lengths() {
        let result = Trajectory::from_samples(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![1.0],
            vec![0.0, 0.0],
            0.0,
            1.0,
            1.0,
        );

        assert_eq!(
            result,
            Err(Error::LengthMismatch {
                times: 2,
                positions: 2,
                velocities: 1,
                accelerations: 2,
            })
        );
    }

    #[test]
    fn samples_are_index_aligned() {
        let trajectory = Trajectory::from_samples(
            vec![0.0, 1.0],
            vec![10.0, 11.0],
            vec![20.0, 21.0],
            vec![30.0, 31.0],
            10.0,
            20.0,
            1.0,
        )
        .unwrap();

        let rows: Vec<_> = trajectory.samples().collect();
        assert_eq!(
            rows[1],
            Sample {
                t: 1.0,
                x: 11.0,
                v: 21.0,
                a: 31.0,
            }
        );
        assert_eq!(trajectory.values(Series::Velocity), &[20.0, 21.0]);
    }

    #[test]
    fn set_initial_conditions_leaves_samples_alone() {
        let mut trajectory = Trajectory::from_samples(
            vec![0.0],
            vec![1.0],
            vec![2.0],
            vec![3.0],
            1.0,
            2.0,
            0.1,
        )
        .unwrap();

        trajectory.set_initial_conditions(5.0, 6.0);

        assert_eq!(trajectory.x0(), 5.0);
        assert_eq!(trajectory.v0(), 6.0);
        assert_eq!(trajectory.positions(), &[1.0]);
        assert_eq!(trajectory.velocities(), &[2.0]);
    }
}
