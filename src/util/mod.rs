pub mod browser;
pub mod config;
pub mod ordinal;
pub mod time;
