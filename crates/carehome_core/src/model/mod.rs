//! Domain model for the staff-facing care views.
//!
//! # Responsibility
//! - Define the records consumed by roster, handover and notification pages.
//! - Host the pure derivation/update functions those pages rely on.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - Derived values (resident status) are never stored on records.

pub mod handover;
pub mod lifecycle;
pub mod notification;
pub mod resident;
