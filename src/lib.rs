pub mod config;
pub mod content;
pub mod db;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod utils;
