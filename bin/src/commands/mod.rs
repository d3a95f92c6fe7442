//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod history;
pub(crate) mod single;
