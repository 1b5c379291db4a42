use kinematics_core::{Series, Trajectory};
use kinematics_session::Dragging;

/// Y-axis label, with units, for a series' chart.
#[must_use]
pub fn axis_label(series: Series) -> &'static str {
    match series {
        Series::Position => "x (m)",
        Series::Velocity => "v (m/s)",
        Series::Acceleration => "a (m/s^2)",
    }
}

/// Returns the `[t, value]` points of one series.
///
/// If `preview` is a drag on this series, the dragged point is drawn at its
/// uncommitted value.
#[must_use]
pub fn series_points(
    trajectory: &Trajectory,
    series: Series,
    preview: Option<&Dragging>,
) -> Vec<[f64; 2]> {
    let mut points: Vec<[f64; 2]> = trajectory
        .times()
        .iter()
        .zip(trajectory.values(series))
        .map(|(&t, &value)| [t, value])
        .collect();

    if let Some(dragging) =
        preview.filter(|dragging| dragging.series == series && dragging.index < points.len())
    {
        points[dragging.index][1] = dragging.value;
    }

    points
}

/// Finds the point closest to `pointer`, if one lies within `radius`.
///
/// `radius` is given per axis in plot units, so the search region is an
/// ellipse that looks round on screen. Equally close points resolve to the
/// lower index.
#[must_use]
pub fn nearest_point(points: &[[f64; 2]], pointer: [f64; 2], radius: [f64; 2]) -> Option<usize> {
    if radius[0] <= 0.0 || radius[1] <= 0.0 {
        return None;
    }

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let dx = (point[0] - pointer[0]) / radius[0];
            let dy = (point[1] - pointer[1]) / radius[1];
            (index, dx * dx + dy * dy)
        })
        .filter(|(_, distance)| *distance <= 1.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}
