//! Infrastructure implementations for Venture.
//!
//! Concrete collaborators behind the venture-core abstractions: the
//! Anthropic Messages API client, environment credential resolution,
//! `config.toml` loading, and chart/diagram rendering.

pub mod config;
pub mod credentials;
pub mod llm;
pub mod render;
