// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod assignments;
pub mod file;
pub mod page;
pub mod progress;
pub mod roster;
pub mod runner;

pub use error::{Error, Result};
