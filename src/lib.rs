// Storyboard Core Library
// Copyright (c) 2026 Xing_The_Creator | SYNOID

pub mod config;
pub mod error;
pub mod export;
pub mod server;
pub mod state;
pub mod storyboard;

pub use config::SynthConfig;
pub use error::ConfigError;
