// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod monitor;
pub mod project;
pub mod prompt;
pub mod report;
pub mod watch;

pub use error::{Error, Result};
