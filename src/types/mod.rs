//! Value types shared across the engine.

pub mod config;
pub mod link;
pub mod run;
