//! MCP server exposing National Weather Service alerts and forecasts as tools

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use service::Weather;
