use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5ce4_e3a2_7d0b_91c3;

/// Stable 128-bit fingerprint of a compiled document's bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for DocumentFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint serialized markup. Equal documents always share a fingerprint.
pub fn fingerprint_document(html: &str) -> DocumentFingerprint {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&(html.len() as u64).to_le_bytes());
    h.update(html.as_bytes());
    let v = h.digest128();
    DocumentFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
