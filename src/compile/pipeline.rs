use crate::assets::manifest::AssetRef;
use crate::compile::fingerprint::{DocumentFingerprint, fingerprint_document};
use crate::document::assemble::{DocumentOptions, assemble};
use crate::foundation::error::{ScenemarkError, ScenemarkResult, Warning};
use crate::normalize::ids::IdSource;
use crate::policy::CompilerPolicy;
use crate::scene::experience::Experience;
use std::path::{Path, PathBuf};

/// A compiled experience document and what went into it.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledDocument {
    /// Serialized markup.
    pub html: String,
    /// Fingerprint of `html`.
    pub fingerprint: DocumentFingerprint,
    /// Number of tracking anchors.
    pub anchors: usize,
    /// Scene objects across all anchors.
    pub objects: usize,
    /// Embedded assets, in document order.
    pub manifest: Vec<AssetRef>,
    /// Non-fatal problems found while compiling.
    pub warnings: Vec<Warning>,
}

/// Compile an experience into markup.
///
/// Pure: nothing is read or written. Compiling the same experience twice yields identical
/// output as long as every scene object already has an id.
pub fn compile_experience(
    experience: &Experience,
    policy: &CompilerPolicy,
    options: &DocumentOptions,
    ids: &mut dyn IdSource,
) -> ScenemarkResult<CompiledDocument> {
    let assembled = assemble(experience, policy, options, ids)?;
    let html = assembled.to_html();
    let fingerprint = fingerprint_document(&html);
    tracing::info!(
        experience = %experience.id,
        anchors = assembled.anchors,
        objects = assembled.objects,
        assets = assembled.manifest.len(),
        warnings = assembled.warnings.len(),
        %fingerprint,
        "compiled experience"
    );
    Ok(CompiledDocument {
        html,
        fingerprint,
        anchors: assembled.anchors,
        objects: assembled.objects,
        manifest: assembled.manifest,
        warnings: assembled.warnings,
    })
}

/// Output location for an experience: `{out_dir}/{id}.html`.
pub fn document_path(out_dir: &Path, experience_id: &str) -> ScenemarkResult<PathBuf> {
    let id = experience_id.trim();
    if id.is_empty() {
        return Err(ScenemarkError::invalid_experience_id("id is empty"));
    }
    if id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(ScenemarkError::invalid_experience_id(format!(
            "'{experience_id}' cannot be used as a file name"
        )));
    }
    Ok(out_dir.join(format!("{id}.html")))
}

/// Write a compiled document, replacing any previous version for the same experience.
///
/// Callers compiling the same experience concurrently must serialize these writes themselves.
pub fn write_document(out_dir: &Path, experience_id: &str, html: &str) -> ScenemarkResult<PathBuf> {
    let path = document_path(out_dir, experience_id)?;
    std::fs::create_dir_all(out_dir)?;
    std::fs::write(&path, html)?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "wrote document");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/pipeline.rs"]
mod tests;
