pub mod config;
pub mod error;
pub mod pipeline;

pub use config::Config;
pub use error::{AssistError, Result, Service};
pub use pipeline::{Pipeline, Report};
