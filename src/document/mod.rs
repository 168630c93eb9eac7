//! Document assembly: a typed markup tree built from the normalized scene, serialized to text as
//! a separate final step.

pub(crate) mod assemble;
pub(crate) mod node;
