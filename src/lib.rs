pub mod allocation;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod platform;
pub mod unlock;
