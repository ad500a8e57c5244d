//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file's directory, with a
//! 250ms debounce so an editor's write + rename counts as one save.

mod config_watcher;
mod events;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
pub use events::{absolutize, ChangeKind, WatchTarget};
