//! Kinematics of a single body under constant acceleration.
//!
//! This crate generates sampled trajectories and keeps them self-consistent
//! when one point is edited:
//!
//! - [`generate`] — samples position, velocity, and acceleration from
//!   initial conditions over a time window
//! - [`differentiate`] — finite-difference estimates of velocity and
//!   acceleration
//! - [`integrate`] — trapezoidal and forward-Euler cumulative integrals
//! - [`Trajectory`] — the four index-aligned sequences and their step
//! - [`apply_edit`] — changes one point of one series and rederives the
//!   other two
//! - [`export`] — fixed-format CSV output

pub mod differentiate;
mod edit;
pub mod export;
mod generate;
pub mod integrate;
mod params;
pub mod trajectory;

pub use edit::{Edit, Error as EditError, Series, apply_edit};
pub use generate::generate;
pub use params::{DEFAULT_DT, DEFAULT_MAX_POINTS, Params};
pub use trajectory::{Sample, Trajectory};
