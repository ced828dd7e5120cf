//! Block Blast (workspace facade crate).
//!
//! The game is split into crates under `crates/`; this package re-exports them
//! as `block_blast::{core,input,leaderboard,term,types}` and adds the session
//! layer the binary runs: configuration, logging, and the [`app::App`]
//! controller.

pub mod app;
pub mod config;
pub mod logging;

pub use block_blast_core as core;
pub use block_blast_input as input;
pub use block_blast_leaderboard as leaderboard;
pub use block_blast_term as term;
pub use block_blast_types as types;
