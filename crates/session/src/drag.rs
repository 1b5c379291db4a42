use std::fmt::Display;

use kinematics_core::{Edit, Series};
use log::{debug, warn};
use thiserror::Error;

/// Whether point dragging can be offered at all.
///
/// Resolved once at startup and passed to whatever builds drag handling;
/// it never changes during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCapability {
    Available,
    Unavailable,
}

impl DragCapability {
    /// Runs a one-off probe for drag support.
    ///
    /// A failing probe is logged and degrades to [`DragCapability::Unavailable`];
    /// it is never an error.
    pub fn resolve<E: Display>(probe: impl FnOnce() -> Result<(), E>) -> Self {
        match probe() {
            Ok(()) => Self::Available,
            Err(err) => {
                warn!("point dragging disabled: {err}");
                Self::Unavailable
            }
        }
    }
}

/// Which series accept drag gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragConfig {
    capability: DragCapability,
    series: Vec<Series>,
}

impl DragConfig {
    #[must_use]
    pub fn new(capability: DragCapability, series: &[Series]) -> Self {
        Self {
            capability,
            series: series.to_vec(),
        }
    }

    #[must_use]
    pub fn capability(&self) -> DragCapability {
        self.capability
    }

    /// Returns `true` if any series can be dragged.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.capability == DragCapability::Available && !self.series.is_empty()
    }

    /// Returns `true` if points of `series` can be dragged.
    #[must_use]
    pub fn allows(&self, series: Series) -> bool {
        self.capability == DragCapability::Available && self.series.contains(&series)
    }
}

/// A drag in progress.
///
/// `value` is where the point is currently shown; nothing is propagated
/// until the drag finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dragging {
    pub series: Series,
    pub index: usize,
    pub value: f64,
}

/// Errors from drag gestures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DragError {
    #[error("point dragging is not available")]
    Unavailable,

    #[error("{series} points cannot be dragged")]
    SeriesLocked { series: Series },

    #[error("point {index} does not exist in a trajectory of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a drag is already in progress")]
    AlreadyDragging,

    #[error("no drag is in progress")]
    NotDragging,
}

/// Gesture state: idle, or dragging one point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Dragging),
}

impl DragState {
    /// Starts dragging point `index` of `series`, currently at `value`.
    ///
    /// # Errors
    ///
    /// Fails if dragging is unavailable or not allowed for `series`, if the
    /// index is out of range for a trajectory of `len` samples, or if another
    /// drag is still in progress.
    pub fn begin(
        &mut self,
        config: &DragConfig,
        series: Series,
        index: usize,
        len: usize,
        value: f64,
    ) -> Result<(), DragError> {
        if config.capability() == DragCapability::Unavailable {
            return Err(DragError::Unavailable);
        }
        if !config.allows(series) {
            return Err(DragError::SeriesLocked { series });
        }
        if index >= len {
            return Err(DragError::IndexOutOfRange { index, len });
        }
        if matches!(self, Self::Dragging(_)) {
            return Err(DragError::AlreadyDragging);
        }

        debug!("drag started on {series} point {index}");
        *self = Self::Dragging(Dragging {
            series,
            index,
            value,
        });
        Ok(())
    }

    /// Moves the dragged point to `value` without committing it.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] if no drag is in progress.
    pub fn move_to(&mut self, value: f64) -> Result<(), DragError> {
        match self {
            Self::Dragging(dragging) => {
                dragging.value = value;
                Ok(())
            }
            Self::Idle => Err(DragError::NotDragging),
        }
    }

    /// Ends the drag and returns the edit to commit.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] if no drag is in progress.
    pub fn finish(&mut self) -> Result<Edit, DragError> {
        match std::mem::take(self) {
            Self::Dragging(Dragging {
                series,
                index,
                value,
            }) => Ok(Edit {
                series,
                index,
                value,
            }),
            Self::Idle => Err(DragError::NotDragging),
        }
    }

    /// Abandons any drag in progress.
    pub fn cancel(&mut self) {
        if let Self::Dragging(dragging) = std::mem::take(self) {
            debug!("drag on {} point {} cancelled", dragging.series, dragging.index);
        }
    }

    /// The point being dragged, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Dragging> {
        match self {
            Self::Dragging(dragging) => Some(dragging),
            Self::Idle => None,
        }
    }
}
