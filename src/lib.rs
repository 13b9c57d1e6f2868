pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod ui;
