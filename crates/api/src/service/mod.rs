//! Write-side services.
//!
//! Each operation owns its transaction: it takes the pool, opens
//! `pool.begin()`, hands `&mut PgConnection` to the repositories, and
//! commits before any post-commit side effect (index refresh, email).
//! Read-only projections live in [`crate::views`].

pub mod candidate;
pub mod note;
pub mod project;
