//! Business logic for the Venture startup simulator.
//!
//! This crate holds the provider abstraction ([`llm`]), the role-bound
//! [`agent::Agent`], the alternating [`dialogue`] protocol, and the
//! milestone-driven [`sim`] driver. Infrastructure (HTTP client, config
//! loading, chart rendering) lives in venture-infra.

pub mod agent;
pub mod dialogue;
pub mod llm;
pub mod sim;

#[cfg(test)]
pub(crate) mod test_support;
