pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod logging;
pub mod model;
pub mod mutators;
pub mod settings;
pub mod store;
pub mod transfer;
pub mod ui;
