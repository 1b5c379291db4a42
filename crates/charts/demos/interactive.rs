//! Interactive constant-acceleration explorer.
//!
//! # Usage
//!
//! ```text
//! cargo run --example interactive --features plot
//! cargo run --example interactive --features plot -- session.toml
//! ```
//!
//! Opens a window with the parameter form on the left and position,
//! velocity, and acceleration charts on the right. Drag a point on any chart
//! to edit it; the other two charts are recomputed when the drag ends.
//!
//! Set `KINEMATICS_NO_DRAG` to start with dragging disabled.

use std::{error::Error, fs};

use kinematics_charts::{ShowConfig, TrajectoryApp};
use kinematics_core::Params;
use kinematics_session::{DragCapability, Session, SessionConfig};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::from_toml_str(&fs::read_to_string(path)?)?,
        None => SessionConfig::default(),
    };

    let capability = DragCapability::resolve(|| match std::env::var_os("KINEMATICS_NO_DRAG") {
        Some(_) => Err("KINEMATICS_NO_DRAG is set"),
        None => Ok(()),
    });

    let params = Params {
        x0: 0.0,
        v0: 5.0,
        a: 2.0,
        t0: 0.0,
        t1: 10.0,
        dt: 0.1,
        max_points: config.max_points,
    };
    let session = Session::with_params(config, capability, params)?;

    TrajectoryApp::new(session).show(ShowConfig::new().title("Kinematics").legend())?;

    Ok(())
}
