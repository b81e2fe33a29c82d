// src/groq/mod.rs
pub mod client;
pub mod models;

pub use client::{CompletionClient, CompletionConfig};
