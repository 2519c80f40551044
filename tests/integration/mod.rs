//! Workflow integration tests for bias-lens.
//!
//! These tests verify multi-step workflows including:
//! - Command execution against a shared corpus file
//! - Semantic detection backed by a remote embedding service

mod cli_workflow;
mod remote_embedding;
