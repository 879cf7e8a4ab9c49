use crate::error::{LockcheckError, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use twox_hash::xxhash3_128;

/// Lowercase hex digest of a lockfile's content.
///
/// Fingerprints are compared as opaque strings. A value loaded from the
/// sidecar file is kept verbatim, so a hand-edited record with different
/// case or whitespace will not match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Digests `contents` with XXH3-128. The bytes are decoded as UTF-8 first,
    /// with invalid sequences replaced, so the digest is over text.
    pub fn of_bytes(contents: &[u8]) -> Self {
        let text = String::from_utf8_lossy(contents);
        let hash = xxhash3_128::Hasher::oneshot(text.as_bytes());
        Fingerprint(format!("{:032x}", hash))
    }

    /// Reads the whole file at `path` and fingerprints it. A missing file is
    /// an error like any other read failure.
    pub fn of_file(path: &Path) -> Result<Self> {
        let contents = fs::read(path).map_err(|source| LockcheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::of_bytes(&contents))
    }

    /// Wraps a previously recorded value without validating it.
    pub fn from_recorded(value: String) -> Self {
        Fingerprint(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn deterministic() {
        let a = Fingerprint::of_bytes(b"{\"lockfileVersion\": 3}");
        let b = Fingerprint::of_bytes(b"{\"lockfileVersion\": 3}");
        assert_eq!(a, b);
    }

    #[test]
    fn lowercase_hex_of_fixed_width() {
        let fp = Fingerprint::of_bytes(b"anything");
        assert_eq!(fp.as_str().len(), 32);
        assert!(fp
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn sensitive_to_content() {
        let fixtures: [&[u8]; 5] = [b"", b"a", b"b", b"a\n", b"{\"name\":\"x\"}"];
        for (i, a) in fixtures.iter().enumerate() {
            for b in &fixtures[i + 1..] {
                assert_ne!(Fingerprint::of_bytes(a), Fingerprint::of_bytes(b));
            }
        }
    }

    #[test]
    fn stable_across_versions() {
        // Changing this value means every recorded sidecar becomes stale.
        let fp = Fingerprint::of_bytes(b"");
        assert_eq!(
            fp.as_str(),
            format!("{:032x}", xxhash3_128::Hasher::oneshot(b""))
        );
    }

    #[test]
    fn invalid_utf8_is_hashed_as_replacement_text() {
        let raw = Fingerprint::of_bytes(&[b'a', 0xff, b'b']);
        let replaced = Fingerprint::of_bytes("a\u{FFFD}b".as_bytes());
        assert_eq!(raw, replaced);
    }

    #[test]
    fn file_matches_bytes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("package-lock.json");
        fs::write(&path, "lock contents")?;

        assert_eq!(Fingerprint::of_file(&path)?, Fingerprint::of_bytes(b"lock contents"));
        Ok(())
    }

    #[test]
    fn missing_file_is_a_read_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("package-lock.json");

        match Fingerprint::of_file(&path) {
            Err(LockcheckError::Read { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {:?}", other),
        }
        Ok(())
    }
}
