pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod models;

pub use client::RemoteClient;
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{AppError, Result};
