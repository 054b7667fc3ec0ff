pub mod bridge;
pub mod routes;
