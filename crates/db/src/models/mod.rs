//! Row models and DTOs, one module per aggregate.

pub mod admin;
pub mod attribute;
pub mod candidate;
pub mod client;
pub mod dashboard;
pub mod freelancer;
pub mod location;
pub mod note;
pub mod project;
pub mod resourcing;
pub mod scope;
pub mod search;
