pub mod banner;
pub mod config;
pub mod error;
pub mod form;
pub mod state;
pub mod telemetry;
pub mod transfer;
