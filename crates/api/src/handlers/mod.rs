pub mod candidate;
pub mod freelancer;
pub mod misc;
pub mod note;
pub mod project;
