//! goooals-core
//!
//! Pure domain types for goal suggestions: standard and external goals,
//! goal items with quantification ranges, ordinal attribute tables and the
//! display conventions shared by the UI and the email relay.
//! No I/O here. This is the shared vocabulary of the Goooals system.

pub mod attributes;
pub mod display;
pub mod error;
pub mod models;
pub mod text;
