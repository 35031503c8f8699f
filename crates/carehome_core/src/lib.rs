//! Core domain logic for the care-facility staff views.
//! This crate owns status derivation and acknowledgement updates; views only
//! render what it returns.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use config::{load_config, ConfigError, CoreConfig};
pub use fixtures::{load_fixtures, FixtureError, FixtureRepositories};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::handover::{Handover, HandoverPriority, Shift};
pub use model::lifecycle::{
    apply_status, apply_status_strict, replace_by_id, AckStatus, LifecycleError,
    LifecycleRecord, LifecycleState, LifecycleStatus, RecordId, Timestamp,
};
pub use model::notification::{Notification, NotificationCategory};
pub use model::resident::{
    parse_calendar_date, resolve_status, try_resolve_status, DateField, DateParseError,
    Resident, ResidentId, ResidentLifecycleInput, ResidentStatus,
};
pub use presentation::badge::{lifecycle_badge, resident_badge, Badge, BadgeTone};
pub use repo::lifecycle_repo::{InMemoryLifecycleRepository, LifecycleRepository};
pub use repo::resident_repo::{InMemoryResidentRepository, ResidentRepository};
pub use repo::{RepoError, RepoResult};
pub use service::lifecycle_service::{
    HandoverService, LifecycleService, NotificationService, StatusFilter,
};
pub use service::resident_service::{ResidentService, ResidentView, StatusCounts};
pub use service::ServiceError;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
