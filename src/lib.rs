pub mod config;
pub mod core;
pub mod driver;
pub mod features;
