//! Pieces shared by every crate in the workspace: wire types that are not
//! owned by a resource, and tracing setup.

pub mod types;
pub mod utils;
