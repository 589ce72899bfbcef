//! goooals-sources
//!
//! Where goals come from: the local standard catalog and the third-party
//! random activity API. Thin wrappers around file I/O and reqwest.

pub mod catalog;
pub mod error;
pub mod external;
