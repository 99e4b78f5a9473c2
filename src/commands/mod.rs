pub mod config;
pub mod interactive;
pub mod plan;
pub mod tips;
