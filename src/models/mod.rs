//! Data model shared across the crate

pub mod request;

pub use request::{ApiKeyLocation, Auth, Body, KeyValue, Method, ParsedRequest, RequestModel};
