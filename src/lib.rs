pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod summary;

pub use error::{InputError, RenderError, Result, WordTallyError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_RENDER_ERROR: i32 = 2;
pub const EXIT_CONFIG_ERROR: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
