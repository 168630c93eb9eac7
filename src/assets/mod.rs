//! Asset manifest: the embeddable references a compiled document preloads.

pub(crate) mod manifest;
