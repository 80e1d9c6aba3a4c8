//! Core crate exports for building and running the `idpeek` terminal interface.
//!
//! The root module primarily re-exports types from the app and lookup
//! subsystems so that embedders can run a lookup session without digging
//! through the module hierarchy.

pub mod app;
pub mod app_dirs;
pub mod logging;
pub mod lookup;
pub mod theme;
pub mod ui;

pub use app::{App, AppConfig, LookupOutcome, LookupPhase, run};
pub use lookup::{AvatarDecoration, LookupClient, LookupError, LookupRecord};
pub use theme::Theme;
