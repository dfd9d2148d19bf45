//! HTTP API of the reference store.

pub mod http;
