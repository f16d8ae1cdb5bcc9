//! CLI command implementations.

pub(crate) mod feedback;
pub(crate) mod predict;
pub(crate) mod profiles;
