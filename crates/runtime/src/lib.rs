//! Runtime services for the player HP API.
//!
//! This crate wires the pure rule engine in `hp-core` to persistent player
//! documents. Transports hold an [`HpService`] and call one method per
//! operation; the service looks the player up, runs the engine, and saves the
//! result when the HP state changed.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the read-modify-write orchestration
//! - [`api`] exposes the error and view types transports interact with
//! - [`repository`] provides the store trait and its in-memory and file backends
pub mod api;
pub mod repository;
pub mod service;

pub use api::{Applied, PlayerHpView, Result, ServiceError};
pub use repository::{
    FilePlayerRepository, InMemoryPlayerRepository, PlayerRepository, RepositoryError,
    SeedSummary, seed_players,
};
pub use service::HpService;
