pub mod config;
pub mod mode;

pub use config::{AppConfig, ConfigOverrides};
pub use mode::RenderMode;
