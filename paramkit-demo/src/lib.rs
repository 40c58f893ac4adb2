//! Example users API
//!
//! A small in-memory service showing how the paramkit crates fit together:
//! camelCase query keys on the wire, snake_case handlers, validated paging
//! and sorting, and an OpenAPI document published with client-facing names.

pub mod app;
pub mod openapi;
pub mod repo;
pub mod routes;

pub use app::create_app;
