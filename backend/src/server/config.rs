//! HTTP server configuration and session key handling.

use std::net::SocketAddr;
use std::path::Path;

use actix_web::cookie::{Key, SameSite};
use sha2::{Digest, Sha256};
use tracing::warn;
use zeroize::Zeroize;

/// Minimum session key length accepted in release builds.
const SESSION_KEY_MIN_LEN: usize = 64;

/// Length of the key fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed: u64,
    pub(crate) generated_listings: usize,
}

impl ServerConfig {
    /// Construct a server configuration from validated parts.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            seed: 42,
            generated_listings: 9,
        }
    }

    /// Override the demo dataset seed and generated listing count.
    #[must_use]
    pub fn with_demo_dataset(mut self, seed: u64, generated_listings: usize) -> Self {
        self.seed = seed;
        self.generated_listings = generated_listings;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors raised while loading the session signing key.
#[derive(Debug, thiserror::Error)]
pub enum SessionKeyError {
    /// Reading the key file failed.
    #[error("failed to read session key at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The key file exists but holds too little material.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    TooShort {
        path: String,
        length: usize,
        min_len: usize,
    },
}

/// Load the session signing key from `path`.
///
/// Missing or short key material is tolerated only when `allow_ephemeral`
/// is set (debug builds and explicit opt-in); a generated key is then used
/// and a warning logged, since sessions will not survive restarts.
pub fn load_session_key(path: &Path, allow_ephemeral: bool) -> Result<Key, SessionKeyError> {
    // Not named `display`: tracing's field-value macros resolve that
    // identifier to their own helper fn inside `warn!`.
    let shown = path.display().to_string();
    match std::fs::read(path) {
        Ok(mut bytes) if bytes.len() >= SESSION_KEY_MIN_LEN => {
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Ok(mut bytes) => {
            let length = bytes.len();
            bytes.zeroize();
            if allow_ephemeral {
                warn!(path = %shown, length, "session key too short; using temporary key");
                Ok(Key::generate())
            } else {
                Err(SessionKeyError::TooShort {
                    path: shown,
                    length,
                    min_len: SESSION_KEY_MIN_LEN,
                })
            }
        }
        Err(source) => {
            if allow_ephemeral {
                warn!(path = %shown, error = %source, "session key unreadable; using temporary key");
                Ok(Key::generate())
            } else {
                Err(SessionKeyError::Read { path: shown, source })
            }
        }
    }
}

/// Truncated SHA-256 fingerprint of the key's signing material.
///
/// Logged at startup so operators can tell which key is active without
/// exposing the material itself.
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.signing());
    let digest = hasher.finalize();
    hex::encode(&digest[..FINGERPRINT_BYTES])
}

/// Parse a `SameSite` policy name, case-insensitively.
#[must_use]
pub fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "strict" => Some(SameSite::Strict),
        "lax" => Some(SameSite::Lax),
        "none" => Some(SameSite::None),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn fingerprint_is_deterministic_and_hex() {
        let key = Key::derive_from(&[b'a'; 64]);
        let fp = key_fingerprint(&key);
        assert_eq!(fp, key_fingerprint(&key));
        assert_eq!(fp.len(), FINGERPRINT_BYTES * 2);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn distinct_keys_fingerprint_differently() {
        assert_ne!(
            key_fingerprint(&Key::derive_from(&[b'a'; 64])),
            key_fingerprint(&Key::derive_from(&[b'b'; 64]))
        );
    }

    #[rstest]
    #[case("Lax", Some(SameSite::Lax))]
    #[case("strict", Some(SameSite::Strict))]
    #[case("NONE", Some(SameSite::None))]
    #[case("sideways", None)]
    fn same_site_parses_known_names(#[case] raw: &str, #[case] expected: Option<SameSite>) {
        assert_eq!(parse_same_site(raw), expected);
    }

    #[test]
    fn short_key_files_are_rejected_without_the_escape_hatch() {
        let path = std::env::temp_dir().join("openhome_short_key_test");
        std::fs::write(&path, b"short").expect("write key fixture");
        // `Key` is not `Debug`, so expect_err cannot be used here.
        let Err(err) = load_session_key(&path, false) else {
            panic!("short key must fail");
        };
        assert!(matches!(err, SessionKeyError::TooShort { length: 5, .. }));
        assert!(load_session_key(&path, true).is_ok());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_key_files_need_the_escape_hatch() {
        let path = std::env::temp_dir().join("openhome_missing_key_test");
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            load_session_key(&path, false),
            Err(SessionKeyError::Read { .. })
        ));
        assert!(load_session_key(&path, true).is_ok());
    }

    #[test]
    fn long_key_files_load() {
        let path = std::env::temp_dir().join("openhome_full_key_test");
        std::fs::write(&path, [b'k'; 64]).expect("write key fixture");
        let key = load_session_key(&path, false).expect("valid key loads");
        assert_eq!(key_fingerprint(&key), key_fingerprint(&key));
        std::fs::remove_file(&path).ok();
    }
}
