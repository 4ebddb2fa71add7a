pub mod app;
pub mod builders;
pub mod errors;
pub mod models;
pub mod routes;
