use std::time::Instant;

use kinematics_core::{
    Edit, EditError, Params, Series, Trajectory, apply_edit, export, generate,
};
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    Debounce, DragCapability, DragConfig, DragError, DragState, Dragging, FormInput, InputError,
    SessionConfig, validate,
};

/// Errors from committing a drag.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CommitError {
    #[error(transparent)]
    Drag(#[from] DragError),

    #[error("edit rejected")]
    Edit(#[from] EditError),
}

/// One user's working document: the current parameters and the trajectory
/// computed from them.
///
/// A session is created when the page loads, replaces its trajectory on every
/// full recompute, edits it in place when a drag is committed, and is
/// consumed by [`Session::close`] when the user navigates away.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    params: Params,
    trajectory: Trajectory,
    drag_config: DragConfig,
    drag: DragState,
    debounce: Debounce,
}

impl Session {
    /// Starts a session from default parameters.
    #[must_use]
    pub fn new(config: SessionConfig, capability: DragCapability) -> Self {
        let params = Params {
            max_points: config.max_points,
            ..Params::default()
        };
        let drag_config = DragConfig::new(capability, &config.drag_series);
        let debounce = Debounce::new(config.debounce());
        let trajectory = generate(&params);
        info!(
            "session started with {} samples, dragging {}",
            trajectory.len(),
            if drag_config.is_enabled() { "enabled" } else { "disabled" }
        );

        Self {
            config,
            params,
            trajectory,
            drag_config,
            drag: DragState::Idle,
            debounce,
        }
    }

    /// Starts a session from the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `params` fail validation.
    pub fn with_params(
        config: SessionConfig,
        capability: DragCapability,
        params: Params,
    ) -> Result<Self, InputError> {
        let mut session = Self::new(config, capability);
        session.recompute(params)?;
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The parameters behind the current trajectory, including any initial
    /// conditions synced from edits at index 0.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    #[must_use]
    pub fn drag_config(&self) -> &DragConfig {
        &self.drag_config
    }

    /// The point being dragged, if any, for renderers to draw at its
    /// uncommitted position.
    #[must_use]
    pub fn drag_preview(&self) -> Option<&Dragging> {
        self.drag.preview()
    }

    /// Parses the form and fully recomputes the trajectory.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] and keeps the current trajectory if the
    /// parsed parameters fail validation.
    pub fn submit(&mut self, form: &FormInput) -> Result<&Trajectory, InputError> {
        self.debounce.clear();
        let params = form.parse(self.config.max_points);
        self.recompute(params)
    }

    /// Replaces the trajectory with one generated from `params`.
    ///
    /// Any drag in progress is abandoned.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] and keeps the current trajectory if `params`
    /// fail validation.
    pub fn recompute(&mut self, params: Params) -> Result<&Trajectory, InputError> {
        if let Err(err) = validate(&params) {
            warn!("rejected parameters: {err}");
            return Err(err);
        }

        self.drag.cancel();
        self.params = params;
        self.trajectory = generate(&params);
        info!(
            "recomputed {} samples over [{}, {}] s",
            self.trajectory.len(),
            params.t0,
            params.t1
        );

        Ok(&self.trajectory)
    }

    /// Notes that a form field changed at `now`.
    pub fn input_changed(&mut self, now: Instant) {
        self.debounce.trigger(now);
    }

    /// Returns `true` while edited input is waiting out the debounce delay.
    #[must_use]
    pub fn input_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Recomputes from `form` once input has been quiet long enough.
    ///
    /// Returns `None` when no recompute is due.
    pub fn poll(
        &mut self,
        now: Instant,
        form: &FormInput,
    ) -> Option<Result<&Trajectory, InputError>> {
        if !self.debounce.ready(now) {
            return None;
        }
        debug!("debounced input settled");
        Some(self.submit(form))
    }

    /// Starts dragging point `index` of `series`.
    ///
    /// # Errors
    ///
    /// Returns a [`DragError`] if dragging is unavailable, locked for
    /// `series`, already in progress, or `index` is out of range.
    pub fn begin_drag(&mut self, series: Series, index: usize) -> Result<(), DragError> {
        let values = self.trajectory.values(series);
        let value = values.get(index).copied().unwrap_or(f64::NAN);
        self.drag
            .begin(&self.drag_config, series, index, values.len(), value)
    }

    /// Moves the dragged point; nothing is propagated yet.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] if no drag is in progress.
    pub fn drag_to(&mut self, value: f64) -> Result<(), DragError> {
        self.drag.move_to(value)
    }

    /// Ends the drag and propagates the edit through the trajectory.
    ///
    /// The drag ends even if the edit is rejected, in which case the
    /// trajectory is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::Drag`] if no drag is in progress, or
    /// [`CommitError::Edit`] if the trajectory cannot absorb the edit.
    pub fn end_drag(&mut self) -> Result<&Trajectory, CommitError> {
        let edit = self.drag.finish()?;
        if let Err(err) = apply_edit(&mut self.trajectory, edit) {
            warn!("discarded {} edit at point {}: {err}", edit.series, edit.index);
            return Err(err.into());
        }
        self.sync_initial_conditions(edit);

        info!(
            "committed {} edit at point {} = {}",
            edit.series, edit.index, edit.value
        );
        Ok(&self.trajectory)
    }

    /// Abandons the drag in progress, if any.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Renders the current trajectory as CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV writer fails.
    pub fn export_csv(&self) -> Result<String, export::Error> {
        export::to_csv(&self.trajectory)
    }

    /// Ends the session, handing back the final parameters.
    #[must_use]
    pub fn close(self) -> Params {
        info!("session closed");
        self.params
    }

    /// Keeps `x0`/`v0` in step with a point edited at index 0.
    fn sync_initial_conditions(&mut self, edit: Edit) {
        if edit.index != 0 {
            return;
        }
        match edit.series {
            Series::Position => self.params.x0 = edit.value,
            Series::Velocity => self.params.v0 = edit.value,
            Series::Acceleration => return,
        }
        self.trajectory
            .set_initial_conditions(self.params.x0, self.params.v0);
    }
}
