//! Casino Betting Simulation
//!
//! Validates a betting configuration and plays it out round by round:
//! a fixed stake is won or lost each round according to a win ratio, and the
//! run stops early once the balance is exhausted.
//!
//! # Modules
//! - `config` — Validated simulation configuration
//! - `validator` — Ordered request validation
//! - `rng` — Random source abstraction (entropy, seeded, fixed draws)
//! - `engine` — Round loop with bankruptcy detection
//! - `events` — Per-round outcome records
//! - `metrics` — Aggregated run statistics
//! - `service` — Validate-then-run facade producing response envelopes

pub mod config;
pub mod validator;
pub mod rng;
pub mod engine;
pub mod events;
pub mod metrics;
pub mod service;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
