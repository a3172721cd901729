pub mod config;
pub mod export;
pub mod observability;
pub mod scheduler;

pub use config::Config;
