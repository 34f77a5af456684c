//! Runtime models shared across the gallery server.

pub mod config;
