pub mod cli;
pub mod clients;
pub mod config;
pub mod errors;
pub mod logger;
pub mod models;
pub mod screens;
pub mod services;
