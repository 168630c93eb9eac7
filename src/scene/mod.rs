//! Strict scene model and the boundary experience record.

pub(crate) mod experience;
pub(crate) mod model;
