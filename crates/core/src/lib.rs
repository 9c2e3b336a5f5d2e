//! Domain logic for the staffing project-management platform.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API layer, and any future CLI tooling.

pub mod attribute;
pub mod candidate;
pub mod elapsed;
pub mod error;
pub mod project;
pub mod search;
pub mod types;
