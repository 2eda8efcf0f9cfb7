use base64::{engine::general_purpose::STANDARD, Engine as _};
use dashmap::DashSet;
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;

/// Bytes of OS randomness behind each token (256 bits).
const TOKEN_BYTES: usize = 32;

/// Thread-safe set of anti-forgery tokens that have been handed out on the
/// add form and not yet spent.
///
/// Each token is accepted at most once: [`TokenRegistry::consume`] removes it
/// atomically, so two concurrent submissions carrying the same token cannot
/// both succeed. Tokens never expire; unused ones stay until restart.
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    inner: Arc<DashSet<String>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh base64 token from the OS random source and record it
    /// as valid.
    pub fn issue(&self) -> Result<String, rand::Error> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.try_fill_bytes(&mut bytes)?;

        let token = STANDARD.encode(bytes);
        self.inner.insert(token.clone());
        Ok(token)
    }

    /// Spend `token`. Returns `true` only if it was outstanding.
    pub fn consume(&self, token: &str) -> bool {
        self.inner.remove(token).is_some()
    }

    /// Number of tokens currently outstanding.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
