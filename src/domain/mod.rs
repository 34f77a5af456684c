//! Domain types shared by the image client and the gallery workflow.

pub mod image;
pub mod notice;
pub mod session;
pub mod types;
