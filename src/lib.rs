pub mod advisor;
pub mod config;
pub mod error;
pub mod llm;
pub mod segment;
pub mod server;

pub use error::{Error, Result};
