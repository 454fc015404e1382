//! Library side of the csvorm command-line tool.

pub mod commands;
pub mod logging;
pub mod summary;
