pub mod args;
pub mod config;
pub mod log;
pub mod manifest;
pub mod materialize;
pub mod prompt;
pub mod report;
pub mod template;
pub mod workflow;
