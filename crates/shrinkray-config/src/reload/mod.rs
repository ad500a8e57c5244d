//! Validated reload procedure.
//!
//! Re-parses the watched file, re-applies startup overrides, checks the
//! media root and hands the result to a [`ConfigHandler`](crate::ConfigHandler).

mod reloader;


pub use reloader::{check_media_path, Reloader};
