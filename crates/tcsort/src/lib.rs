//! tcsort library - exposes CLI modules for integration tests

pub mod commands;
pub mod errors;
pub mod json_types;
pub mod logging;
pub mod output;
