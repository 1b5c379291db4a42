//! Interactive editing sessions over constant-acceleration trajectories.
//!
//! A [`Session`] owns the one trajectory a user is looking at and mediates
//! every change to it:
//!
//! - full recomputes from the parameter form ([`FormInput`], [`validate`]),
//!   optionally debounced while the user types ([`Debounce`])
//! - point drags, gated by a [`DragCapability`] resolved once at startup and
//!   tracked by [`DragState`] until they are committed as edits
//! - CSV export of whatever is currently shown
//!
//! Settings come from a [`SessionConfig`], usually read from TOML.

mod config;
mod debounce;
mod drag;
mod form;
mod session;

pub use config::{ConfigError, SessionConfig};
pub use debounce::Debounce;
pub use drag::{DragCapability, DragConfig, DragError, DragState, Dragging};
pub use form::{FormInput, InputError, validate};
pub use session::{CommitError, Session};
