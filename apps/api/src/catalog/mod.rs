//! Mock job and course recommendations served from static in-memory catalogs.

pub mod courses;
pub mod handlers;
pub mod jobs;
