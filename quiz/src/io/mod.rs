//! I/O helpers for the quiz binary.

pub mod config;
pub mod input;
pub mod problems;
