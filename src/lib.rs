//! scenemark compiles authored marker-based AR scenes into self-contained A-Frame/MindAR
//! documents.
//!
//! The pipeline is pure and synchronous:
//!
//! - Normalize the stored, loosely-typed scene JSON into a strict [`SceneConfig`] / [`Target`] list
//! - Resolve every object's placement under a [`CompilerPolicy`]
//! - Build the [`AssetRef`] manifest
//! - Assemble a typed markup tree and serialize it ([`compile_experience`])
//!
//! Writing the result to `{id}.html` is the only I/O ([`write_document`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod assets;
pub(crate) mod compile;
pub(crate) mod document;
pub(crate) mod normalize;
/// Compiler policy and its environment overrides.
pub mod policy;
pub(crate) mod scene;
pub(crate) mod transform;

pub use crate::foundation::core::Vec3;
pub use crate::foundation::error::{ScenemarkError, ScenemarkResult, Warning};

pub use crate::assets::manifest::{AssetKind, AssetRef, asset_id, build_manifest};
pub use crate::compile::fingerprint::{DocumentFingerprint, fingerprint_document};
pub use crate::compile::pipeline::{
    CompiledDocument, compile_experience, document_path, write_document,
};
pub use crate::document::assemble::{
    AssembledDocument, DocumentOptions, assemble, assemble_multi, assemble_single,
};
pub use crate::document::node::{Document, Element, Node};
pub use crate::normalize::ids::{IdSource, RandomIdSource, SequentialIdSource};
pub use crate::normalize::pass::{
    Normalized, normalize_scene_config, normalize_target, normalize_targets,
};
pub use crate::policy::CompilerPolicy;
pub use crate::scene::experience::Experience;
pub use crate::scene::model::{
    ContentKind, MarkerDimensions, PrimitiveShape, SceneConfig, SceneObject, SceneObjectContent,
    Target,
};
pub use crate::transform::normalize_rotation;
pub use crate::transform::resolve::{
    ResolvedPlacement, ResolvedTransform, resolve_placement, resolve_transform,
};
