//! Testing infrastructure for complaintdesk tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `fixtures`: Sample complaints and a builder for ad-hoc records
//! - `memory`: In-memory collaborator store with the real store's rules
//! - `server`: The same store served over HTTP for end-to-end tests
//! - `world`: `TestWorld`, a declarative environment for running the CLI
//! - `assertions`: Custom assertions over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod memory;
pub mod server;
pub mod world;

pub use memory::{InMemoryStore, MemoryBackend};
pub use server::FakeStoreServer;
pub use world::TestWorld;
