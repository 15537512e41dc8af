//! View-models the UI layer binds to.
//!
//! # Responsibility
//! - Compose validated domain records with a property-change notifier.
//! - Map mutations onto stable property-name notifications.
//!
//! # Invariants
//! - A rejected mutation raises no notification.
//! - Property names are stable binding keys, never display text.

pub mod person_view_model;
