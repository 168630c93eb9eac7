//! Scene normalization: loosely-typed stored JSON in, strict scene model out.
//!
//! Every function in this module is total. Missing or mistyped values are replaced with
//! defaults (position/rotation `0`, scale `1`), missing ids are generated, and editor-session
//! fields that cannot be persisted are dropped.

pub(crate) mod coerce;
pub(crate) mod ids;
pub(crate) mod pass;
