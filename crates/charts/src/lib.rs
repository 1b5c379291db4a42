//! Chart data and an interactive viewer for kinematics sessions.
//!
//! - [`series_points`] turns one series of a trajectory into `[t, value]`
//!   points, drawing a dragged point at its uncommitted position
//! - [`nearest_point`] hit-tests a pointer against those points to decide
//!   which one a drag grabs
//!
//! # Features
//!
//! - `plot` — Enables [`TrajectoryApp`], an egui window with a parameter
//!   form, one chart per series, and CSV export. This feature adds
//!   dependencies on `eframe`, `egui_plot`, and `log`.

mod series;

#[cfg(feature = "plot")]
mod plot;

pub use series::{axis_label, nearest_point, series_points};

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, TrajectoryApp};
