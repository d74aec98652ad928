pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod template;
pub mod validation;
