//! Data Access

pub mod client;

pub use client::{load_site, GlooSource};
