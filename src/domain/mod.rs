pub mod color;
pub mod config;
pub mod drag;
pub mod error;
pub mod models;
pub mod services;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
