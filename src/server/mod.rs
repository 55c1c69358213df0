pub mod app;
pub mod error;
pub mod pagination;
pub mod quiz;
pub mod routes;
