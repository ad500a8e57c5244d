pub mod errors;

pub use errors::{ConfigError, ShrinkrayError};

pub type Result<T> = std::result::Result<T, ShrinkrayError>;
