pub mod config;
pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;
