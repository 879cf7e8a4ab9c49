pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod error;
pub mod fingerprint;
pub mod installer;
pub mod logging;
pub mod state;
