pub mod config;
pub mod db;
pub mod errors;
pub mod feedback;
pub mod models;
pub mod recommend;
pub mod routes;
pub mod sources;
pub mod state;
