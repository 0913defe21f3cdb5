//! Shared domain types for Venture.
//!
//! This crate contains the core domain types used across the simulator:
//! agent roles, dialogue transcripts, milestones, metrics, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod agent;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod llm;
pub mod sim;
