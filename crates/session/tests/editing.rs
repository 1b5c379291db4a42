use approx::assert_relative_eq;
use kinematics_core::{Series, differentiate, integrate};
use kinematics_session::{DragCapability, FormInput, Session, SessionConfig};

fn launch() -> Session {
    let config = SessionConfig::from_toml_str(
        r#"
        max_points = 200
        debounce_ms = 100
        "#,
    )
    .unwrap();
    let mut session = Session::new(config, DragCapability::Available);

    session
        .submit(&FormInput {
            x0: "1".into(),
            v0: "20".into(),
            a: "-9.8".into(),
            t1: "4".into(),
            dt: "0.05".into(),
            ..FormInput::default()
        })
        .unwrap();
    session
}

fn drag(session: &mut Session, series: Series, index: usize, value: f64) {
    session.begin_drag(series, index).unwrap();
    session.drag_to(value).unwrap();
    session.end_drag().unwrap();
}

#[test]
fn blank_point_cap_uses_configured_default() {
    let session = launch();

    assert_eq!(session.params().max_points, 200);
    assert_eq!(session.trajectory().len(), 81);
}

#[test]
fn point_cap_truncates_silently() {
    let mut session = launch();

    let trajectory = session
        .submit(&FormInput {
            t1: "1000".into(),
            dt: "0.001".into(),
            ..FormInput::default()
        })
        .unwrap();

    assert_eq!(trajectory.len(), 200);
}

#[test]
fn every_drag_leaves_a_consistent_trajectory() {
    let mut session = launch();

    drag(&mut session, Series::Position, 20, 30.0);
    let t = session.trajectory();
    assert_eq!(
        t.velocities(),
        differentiate::velocity_from_position(t.positions(), 0.05).unwrap()
    );

    drag(&mut session, Series::Velocity, 40, 0.0);
    let t = session.trajectory();
    assert_eq!(
        t.positions(),
        integrate::position_from_velocity(t.velocities(), 1.0, 0.05)
    );

    drag(&mut session, Series::Acceleration, 60, 0.0);
    let t = session.trajectory();
    let velocities = integrate::velocity_from_acceleration(t.accelerations(), 20.0, 0.05);
    assert_eq!(t.velocities(), velocities);
    assert_eq!(
        t.positions(),
        integrate::position_from_velocity(&velocities, 1.0, 0.05)
    );
}

#[test]
fn exported_rows_follow_committed_edits() {
    let mut session = launch();

    drag(&mut session, Series::Velocity, 1, 0.0);

    let csv = session.export_csv().unwrap();
    let second_row = csv.lines().nth(2).unwrap();
    // x[1] = 1 + 0.5 * (20 + 0) * 0.05
    assert_eq!(second_row, "0.050000,1.500000,0.000000,-9.800000");
    assert_relative_eq!(session.trajectory().positions()[1], 1.5);
}
