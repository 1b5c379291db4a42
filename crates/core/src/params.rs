use serde::{Deserialize, Serialize};

/// Default cap on the number of generated samples.
pub const DEFAULT_MAX_POINTS: usize = 1000;

/// Default time step, in seconds.
pub const DEFAULT_DT: f64 = 0.1;

/// Initial conditions and sampling window for a constant-acceleration run.
///
/// Units are SI throughout: metres, seconds, metres per second, and metres
/// per second squared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Initial position.
    pub x0: f64,
    /// Initial velocity.
    pub v0: f64,
    /// Constant acceleration.
    pub a: f64,
    /// Start of the time window.
    pub t0: f64,
    /// End of the time window (inclusive).
    pub t1: f64,
    /// Fixed time step.
    pub dt: f64,
    /// Maximum number of samples to generate.
    pub max_points: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            x0: 0.0,
            v0: 0.0,
            a: 0.0,
            t0: 0.0,
            t1: 0.0,
            dt: DEFAULT_DT,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}
