//! End-to-end compilation: assemble, serialize, fingerprint, write.

pub(crate) mod fingerprint;
pub(crate) mod pipeline;
