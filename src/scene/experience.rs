use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Persisted experience record, as handed over by the storage layer.
///
/// Scene content stays loosely typed here; it is only trusted after normalization. Scalar
/// columns tolerate what a database row carries: numeric ids, and `null` for the title or the
/// multi-target flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Record id; also names the output file (`{id}.html`).
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    /// Title shown in the document head.
    #[serde(default, deserialize_with = "de_null_default")]
    pub title: String,
    /// Location of the compiled marker-tracking file.
    #[serde(default)]
    pub mind_file: Option<String>,
    /// Location of the marker image.
    #[serde(default)]
    pub marker_image: Option<String>,
    /// Single-target scene content as stored by the editor.
    #[serde(default)]
    pub content_config: Value,
    /// Multi-target content as stored by the editor (array, or a JSON-encoded array string).
    #[serde(default)]
    pub targets_config: Option<Value>,
    /// Selects multi-target compilation.
    #[serde(default, deserialize_with = "de_flag")]
    pub is_multiple_targets: bool,
}

impl Experience {
    /// Tracking-file reference when present and non-blank.
    pub fn tracking_file(&self) -> Option<&str> {
        non_blank(self.mind_file.as_deref())
    }

    /// Marker image reference when present and non-blank.
    pub fn marker(&self) -> Option<&str> {
        non_blank(self.marker_image.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// String or numeric primary key; `null` reads as empty.
fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}

fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Boolean column; `null` is `false` and `0`/`1` integer flags are accepted.
fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) if n.as_i64() == Some(0) => Ok(false),
        Value::Number(n) if n.as_i64() == Some(1) => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean flag, got {other}"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/experience.rs"]
mod tests;
