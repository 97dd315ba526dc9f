pub mod report;

pub use report::{render, OutputFormat};
