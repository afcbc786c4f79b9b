pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod proxy;
pub mod state;
