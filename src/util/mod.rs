//! Utility modules: definition file loading and log setup

pub mod config;
pub mod logger;
