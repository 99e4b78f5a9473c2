pub mod commands;
pub mod config;
pub mod cycle;
pub mod error;
pub mod platform;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
