//! Checksum sidecar generation (SHA-1, MD5, SHA-256).
//!
//! Every uploaded file is accompanied by sidecar files holding its hex
//! digest: `.sha1` and `.md5` for the classic Maven layout, plus `.sha256`
//! which modern resolvers prefer.

use javelin_util::hash;

/// The digests for one payload, ready to publish as sidecars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksums {
    pub sha1: String,
    pub md5: String,
    pub sha256: String,
}

/// Compute all sidecar digests for a payload.
pub fn compute(data: &[u8]) -> Checksums {
    Checksums {
        sha1: hash::sha1_bytes(data),
        md5: hash::md5_bytes(data),
        sha256: hash::sha256_bytes(data),
    }
}

impl Checksums {
    /// Sidecar suffixes paired with their digest values, in upload order.
    pub fn sidecars(&self) -> [(&'static str, &str); 3] {
        [
            (".sha1", self.sha1.as_str()),
            (".md5", self.md5.as_str()),
            (".sha256", self.sha256.as_str()),
        ]
    }
}
