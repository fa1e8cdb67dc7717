pub mod config;
pub mod error;

pub use config::{ScorePolicy, SquelchConfig};
pub use error::{Result, SquelchError};
