//! Observability setup for Venture.

pub mod tracing_setup;
