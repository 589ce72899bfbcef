//! goooals-mail
//!
//! Email relay for goals: HTML rendering of standard and external goals
//! (via Tera) and SMTP dispatch (via lettre).

pub mod config;
pub mod error;
pub mod highlight;
pub mod render;
pub mod transport;
