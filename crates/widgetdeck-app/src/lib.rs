//! widgetdeck application shell
//!
//! Mounts a file-backed dashboard and replays recorded host sessions
//! against it.

mod script;

pub use script::{load_script, replay, HostAction, ReplayError, ReplaySummary};
