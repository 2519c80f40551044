//! bias-lens
//!
//! Detects cognitive-bias patterns in free-form text, rewrites the text with
//! hedged wording, and manufactures labeled synthetic examples for
//! evaluating the detector.
//!
//! # Features
//!
//! - Six bias kinds backed by a keyword/phrase catalog
//! - Multi-method detection: lexical, linguistic and semantic signals fused
//!   into one confidence-scored verdict
//! - Swappable embedding backend (local feature hashing or a remote service)
//! - Phrase-table correction with per-kind recommendations
//! - Seeded synthetic corpus generation with JSON persistence
//!
//! # Quick Start
//!
//! ```bash
//! ./bias-lens detect "Everyone knows the market always goes up."
//! ```
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────┐
//!          ┌─────▶│   Lexical    │─────┐
//!          │      └──────────────┘     │
//! ┌──────┐ │      ┌──────────────┐     ▼      ┌────────────┐    ┌───────────┐
//! │ text │─┼─────▶│  Linguistic  │───▶fusion─▶│ Detection  │───▶│ Corrector │
//! └──────┘ │      └──────────────┘     ▲      │   Result   │    └───────────┘
//!          │      ┌──────────────┐     │      └────────────┘
//!          └─────▶│   Semantic   │─────┘
//!                 └──────┬───────┘
//!                        ▼
//!                    Embedder
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod correct;
pub mod detect;
pub mod embedding;
pub mod error;
pub mod metrics;
pub mod service;
pub mod storage;
pub mod synthetic;
pub mod traits;

#[cfg(test)]
mod test_utils;
