//! Zero-sized repository structs, one per aggregate.
//!
//! Methods that participate in a service-level transaction take
//! `&mut PgConnection`; standalone reads take `&PgPool`.

pub mod admin_repo;
pub mod attribute_repo;
pub mod candidate_repo;
pub mod client_repo;
pub mod dashboard_repo;
pub mod feedback_repo;
pub mod freelancer_repo;
pub mod index_repo;
pub mod location_repo;
pub mod lookup_repo;
pub mod membership_repo;
pub mod note_repo;
pub mod project_repo;
pub mod resourcing_repo;
pub mod scope_repo;
