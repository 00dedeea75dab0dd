//! relbench - Relational benchmark fixtures
//!
//! Fixtures for database microbenchmarks plus the release iteration
//! version model used by the surrounding tooling.
//!
//! # Modules
//!
//! - [`profile`] - Database profile selection (embedded vs. networked)
//! - [`config`] - Per-profile YAML configuration
//! - [`fixture`] - Scoped database context + row mapper
//! - [`model`] - Benchmark row types
//! - [`repository`] - CRUD over the benchmark schema with explicit
//!   lifecycle collaborators
//! - [`release`] - Version/iteration value types
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Startup and configuration errors

pub mod config;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod model;
pub mod profile;
pub mod release;
pub mod repository;

// Convenient re-exports at crate root
pub use config::{DataSourceConfig, FixtureConfig};
pub use error::FixtureError;
pub use fixture::{Fixture, RowMapper};
pub use model::Book;
pub use profile::Profile;
pub use release::{Iteration, IterationVersion, ReleaseError, SimpleIterationVersion, Version};
pub use repository::{
    BookRepository, EntityCallbacks, EventPublisher, NoOpEntityCallbacks, NoOpEventPublisher,
    RepositoryEvent, TracingEventPublisher,
};
