pub mod dto;
pub mod model;
pub mod order;
pub mod queries;
pub mod routes;
