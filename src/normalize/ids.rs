use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh ids for objects and targets the editor saved without one.
pub trait IdSource {
    /// Return a new id starting with `prefix` (e.g. `obj`).
    fn next_id(&mut self, prefix: &str) -> String;
}

/// `{prefix}_{unix millis}_{9 random base-36 chars}`.
///
/// Uniqueness comes from the clock plus the random suffix; no coordination is needed between
/// processes.
#[derive(Debug, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&mut self, prefix: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
            .collect();
        format!("{prefix}_{millis}_{suffix}")
    }
}

/// Deterministic `{prefix}_{n}` ids, counting from 1.
///
/// For tests and for reproducible command-line runs.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    next: u64,
}

impl SequentialIdSource {
    /// Start counting at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{prefix}_{}", self.next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/ids.rs"]
mod tests;
