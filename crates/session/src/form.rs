use kinematics_core::{DEFAULT_DT, Params};
use thiserror::Error;

/// Raw text of the parameter form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub x0: String,
    pub v0: String,
    pub a: String,
    pub t0: String,
    pub t1: String,
    pub dt: String,
    pub max_points: String,
}

/// A problem with user-supplied parameters.
///
/// The `Display` output is meant to be shown to the user as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("time step must be greater than zero (got {dt})")]
    InvalidStep { dt: f64 },

    #[error("end time {t1} must not be earlier than start time {t0}")]
    InvertedWindow { t0: f64, t1: f64 },

    #[error("maximum number of points must be at least one")]
    ZeroPointCap,
}

impl FormInput {
    /// Fills every field from existing parameters.
    #[must_use]
    pub fn from_params(params: &Params) -> Self {
        Self {
            x0: params.x0.to_string(),
            v0: params.v0.to_string(),
            a: params.a.to_string(),
            t0: params.t0.to_string(),
            t1: params.t1.to_string(),
            dt: params.dt.to_string(),
            max_points: params.max_points.to_string(),
        }
    }

    /// Converts the form text into parameters.
    ///
    /// Blank or unparsable fields fall back to defaults: `0` for positions,
    /// velocities, acceleration, and time bounds, `0.1` for the step, and
    /// `default_max_points` for the sample cap. No range checks happen here;
    /// see [`validate`].
    #[must_use]
    pub fn parse(&self, default_max_points: usize) -> Params {
        Params {
            x0: number_or(&self.x0, 0.0),
            v0: number_or(&self.v0, 0.0),
            a: number_or(&self.a, 0.0),
            t0: number_or(&self.t0, 0.0),
            t1: number_or(&self.t1, 0.0),
            dt: number_or(&self.dt, DEFAULT_DT),
            max_points: self.max_points.trim().parse().unwrap_or(default_max_points),
        }
    }
}

/// Checks parameters before a full recompute.
///
/// # Errors
///
/// Returns the first problem found, checking finiteness, then the step,
/// then the window, then the sample cap.
pub fn validate(params: &Params) -> Result<(), InputError> {
    let fields = [
        ("initial position", params.x0),
        ("initial velocity", params.v0),
        ("acceleration", params.a),
        ("start time", params.t0),
        ("end time", params.t1),
    ];
    if let Some((field, _)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
        return Err(InputError::NonFinite { field });
    }

    if !params.dt.is_finite() || params.dt <= 0.0 {
        return Err(InputError::InvalidStep { dt: params.dt });
    }

    if params.t1 < params.t0 {
        return Err(InputError::InvertedWindow {
            t0: params.t0,
            t1: params.t1,
        });
    }

    if params.max_points == 0 {
        return Err(InputError::ZeroPointCap);
    }

    Ok(())
}

fn number_or(text: &str, default: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => default,
    }
}
