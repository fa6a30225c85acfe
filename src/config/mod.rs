//! Configuration module for mess-ledger
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MessPaths;
pub use settings::{NegativeAmountPolicy, Settings};
