use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Trajectory, differentiate, integrate};

/// One of the three quantities a user can edit directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Position,
    Velocity,
    Acceleration,
}

impl Series {
    /// All editable series, in chart order.
    pub const ALL: [Series; 3] = [Series::Position, Series::Velocity, Series::Acceleration];
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Series::Position => "position",
            Series::Velocity => "velocity",
            Series::Acceleration => "acceleration",
        })
    }
}

/// A single-point change to one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edit {
    pub series: Series,
    pub index: usize,
    pub value: f64,
}

/// Errors that can occur while propagating an edit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of range for a trajectory of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot rederive dependent series")]
    Derivation(#[from] differentiate::Error),
}

/// Applies an edit and rederives the other two series from the edited one.
///
/// | Edited       | Rederived                                              |
/// |--------------|--------------------------------------------------------|
/// | position     | velocity (first difference), acceleration (second)     |
/// | velocity     | position (trapezoidal), acceleration (first difference)|
/// | acceleration | velocity (Euler), then position (trapezoidal, from the new velocity) |
///
/// Times, `dt`, `x0`, and `v0` are never changed.
/// The edited value is stored as given; non-finite values propagate into the
/// rederived series.
///
/// The update is all-or-nothing: if any derivation fails, `trajectory` is
/// left untouched.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `edit.index` is not a valid sample
/// index, or [`Error::Derivation`] if the trajectory is too short for the
/// finite differences the edit requires.
pub fn apply_edit(trajectory: &mut Trajectory, edit: Edit) -> Result<(), Error> {
    let Edit {
        series,
        index,
        value,
    } = edit;

    let len = trajectory.len();
    if index >= len {
        return Err(Error::IndexOutOfRange { index, len });
    }

    let dt = trajectory.dt;
    match series {
        Series::Position => {
            let mut positions = trajectory.positions.clone();
            positions[index] = value;
            let velocities = differentiate::velocity_from_position(&positions, dt)?;
            let accelerations = differentiate::acceleration_from_position(&positions, dt)?;

            trajectory.positions = positions;
            trajectory.velocities = velocities;
            trajectory.accelerations = accelerations;
        }
        Series::Velocity => {
            let mut velocities = trajectory.velocities.clone();
            velocities[index] = value;
            let accelerations = differentiate::acceleration_from_velocity(&velocities, dt)?;
            let positions = integrate::position_from_velocity(&velocities, trajectory.x0, dt);

            trajectory.positions = positions;
            trajectory.velocities = velocities;
            trajectory.accelerations = accelerations;
        }
        Series::Acceleration => {
            trajectory.accelerations[index] = value;
            trajectory.velocities =
                integrate::velocity_from_acceleration(&trajectory.accelerations, trajectory.v0, dt);
            trajectory.positions =
                integrate::position_from_velocity(&trajectory.velocities, trajectory.x0, dt);
        }
    }

    debug!("applied {series} edit at index {index}: {value}");
    Ok(())
}
