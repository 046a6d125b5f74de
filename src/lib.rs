pub mod batch;
pub mod config;
pub mod employee;
pub mod error;
pub mod notifier;
pub mod reader;
pub mod renderer;
