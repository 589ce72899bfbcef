//! goooals-engine
//!
//! The goal template engine and the UI state container built on it.
//!
//! - [`template`] resolves `{value}`/`{unit}` placeholders from a stepped range.
//! - [`randomize`] re-rolls the numbers embedded in resolved text.
//! - [`collection`] mutates the subgoal and criteria sequences.
//! - [`session`] owns the displayed goals and mirrors them into a
//!   [`cache::SessionCache`].
//!
//! The first three are free of any UI state and take their randomness as a
//! parameter.

pub mod cache;
pub mod collection;
pub mod email;
pub mod error;
pub mod mode;
pub mod randomize;
pub mod session;
pub mod template;
