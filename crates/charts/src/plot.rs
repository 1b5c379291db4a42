//! Interactive egui viewer for a [`Session`].
//!
//! See [`TrajectoryApp`] and [`ShowConfig`] for usage.

use std::{fmt::Display, path::PathBuf, time::Instant};

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use kinematics_core::Series;
use kinematics_session::{CommitError, DragError, FormInput, Session};
use log::info;

use crate::{axis_label, nearest_point, series_points};

/// Fraction of the visible plot range, per axis, within which a press
/// grabs a point.
const GRAB_FRACTION: [f64; 2] = [0.02, 0.05];

/// Configuration for rendering a [`TrajectoryApp`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// TrajectoryApp::new(session).show(ShowConfig::new().title("Kinematics").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    export_path: PathBuf,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, and
    /// exports written to `trajectory.csv`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            export_path: PathBuf::from("trajectory.csv"),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend on each chart.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets where the export button writes CSV.
    #[must_use]
    pub fn export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An egui application showing a parameter form and one draggable chart per
/// series.
///
/// Dragging is wired up only for series the session's drag config allows;
/// other charts pan and zoom as usual.
pub struct TrajectoryApp {
    session: Session,
    form: FormInput,
    status: Option<String>,
    legend: bool,
    export_path: PathBuf,
}

impl TrajectoryApp {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let form = FormInput::from_params(session.params());
        Self {
            session,
            form,
            status: None,
            legend: false,
            export_path: PathBuf::from("trajectory.csv"),
        }
    }

    /// Opens a blocking egui window for the session.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(mut self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        self.legend = config.legend;
        self.export_path = config.export_path;

        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(self))))
    }

    fn report<E: Display>(&mut self, result: Result<(), E>) {
        self.status = result.err().map(|err| err.to_string());
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        let fields = [
            ("x0 (m)", &mut self.form.x0),
            ("v0 (m/s)", &mut self.form.v0),
            ("a (m/s^2)", &mut self.form.a),
            ("t0 (s)", &mut self.form.t0),
            ("t1 (s)", &mut self.form.t1),
            ("dt (s)", &mut self.form.dt),
            ("max points", &mut self.form.max_points),
        ];

        let mut changed = false;
        for (label, text) in fields {
            ui.horizontal(|ui| {
                ui.label(label);
                changed |= ui.text_edit_singleline(text).changed();
            });
        }
        if changed {
            self.session.input_changed(Instant::now());
        }

        ui.horizontal(|ui| {
            if ui.button("Compute").clicked() {
                let result = self.session.submit(&self.form).map(|_| ());
                self.report(result);
            }
            if ui.button("Export CSV").clicked() {
                let result = self.export();
                self.report(result);
            }
        });

        if self.session.input_pending() {
            ui.label("Updating...");
        }
        if !self.session.drag_config().is_enabled() {
            ui.label("Point dragging is unavailable.");
        }
        if let Some(status) = &self.status {
            ui.colored_label(egui::Color32::RED, status);
        }
    }

    fn export(&self) -> Result<(), Box<dyn std::error::Error>> {
        let csv = self.session.export_csv()?;
        std::fs::write(&self.export_path, csv)?;
        info!("exported trajectory to {}", self.export_path.display());
        Ok(())
    }

    fn chart_ui(&mut self, ui: &mut egui::Ui, series: Series, height: f32) {
        let points = series_points(
            self.session.trajectory(),
            series,
            self.session.drag_preview(),
        );
        let draggable = self.session.drag_config().allows(series);
        let label = axis_label(series);

        let mut plot = Plot::new(label)
            .height(height)
            .x_axis_label("t (s)")
            .y_axis_label(label)
            .allow_drag(!draggable);
        if self.legend {
            plot = plot.legend(Legend::default());
        }

        let line_points = points.clone();
        let response = plot.show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(line_points.clone())).name(label));
            if draggable {
                plot_ui.points(Points::new(PlotPoints::from(line_points)).radius(3.0));
            }
            let bounds = plot_ui.plot_bounds();
            let radius = [
                bounds.width() * GRAB_FRACTION[0],
                bounds.height() * GRAB_FRACTION[1],
            ];
            (plot_ui.pointer_coordinate(), radius)
        });

        if !draggable {
            return;
        }

        let (pointer, radius) = response.inner;
        let drag = &response.response;

        if drag.drag_started() {
            let grabbed = pointer.and_then(|p| nearest_point(&points, [p.x, p.y], radius));
            if let Some(index) = grabbed {
                let result = self.session.begin_drag(series, index);
                self.report(result);
            }
        } else if drag.dragged() && self.session.drag_preview().is_some() {
            if let Some(p) = pointer {
                let result = self.session.drag_to(p.y);
                self.report(result);
            }
        }

        if drag.drag_stopped() {
            match self.session.end_drag() {
                Ok(_) | Err(CommitError::Drag(DragError::NotDragging)) => {}
                Err(err) => self.status = Some(err.to_string()),
            }
        }
    }
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(result) = self.session.poll(Instant::now(), &self.form) {
            let result = result.map(|_| ());
            self.report(result);
        }
        if self.session.input_pending() {
            ctx.request_repaint_after(self.session.config().debounce());
        }

        egui::SidePanel::left("parameters").show(ctx, |ui| self.form_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let height = ui.available_height() / 3.0 - ui.spacing().item_spacing.y;
            for series in Series::ALL {
                self.chart_ui(ui, series, height);
            }
        });
    }
}
