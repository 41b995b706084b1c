//! Quran Video Setup Library
//!
//! Prepares a workspace for the Quran verse video generator: checks the
//! Python interpreter and ffmpeg, provisions a virtual environment and
//! installs the declared dependencies.

pub mod cli;
pub mod console;
pub mod error;
pub mod models;
pub mod preflight;
pub mod provision;
pub mod report;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
