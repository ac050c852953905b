//! # Credential Rotation
//!
//! Distributes model calls across a fixed, ordered set of credentials in
//! strict cyclic order.
//!
//! ## Contract
//!
//! For a pool of K credentials, the sequence returned by successive
//! [`CredentialPool::next`] calls is the input collection repeated
//! cyclically, starting wherever the previous caller left off. This holds
//! for any number of concurrent callers: each call claims exactly one
//! logical turn, and no turn is skipped or handed out twice.
//!
//! ## Design
//!
//! The cursor is a single [`AtomicUsize`] kept in `0..K` and advanced with
//! a compare-and-swap loop (`fetch_update`). Keeping it in range avoids the
//! modulo bias a free-running counter would hit on wrap-around.
//!
//! ## Security Notes
//!
//! - Credentials are immutable once loaded and never removed at runtime
//! - `Debug` output is redacted; use [`Credential::fingerprint`] in logs

use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::error::{PoolError, Result};

/// An opaque model-access credential.
///
/// Cloning is cheap; the secret is shared, not copied.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: Arc<str>,
}

impl Credential {
    /// Wraps a secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::from(secret.into()),
        }
    }

    /// Returns the raw secret for use in an outbound request.
    pub fn expose(&self) -> &str {
        &self.secret
    }

    /// Short, non-reversible identifier safe to log.
    ///
    /// First 8 hex characters of the SHA-256 digest of the secret.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.secret.as_bytes());
        digest[..4].iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

/// Thread-safe cyclic selection over a non-empty set of credentials.
///
/// # Example
///
/// ```rust
/// use tribune_pool::{Credential, CredentialPool};
///
/// let pool = CredentialPool::starting_at(
///     vec![Credential::new("a"), Credential::new("b"), Credential::new("c")],
///     2,
/// )?;
/// let seen: Vec<_> = (0..4).map(|_| pool.next().expose().to_string()).collect();
/// assert_eq!(seen, ["c", "a", "b", "c"]);
/// # Ok::<(), tribune_pool::PoolError>(())
/// ```
pub struct CredentialPool {
    credentials: Vec<Credential>,
    cursor: AtomicUsize,
}

impl CredentialPool {
    /// Creates a pool whose first turn goes to the first credential.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NoCredentials`] if `credentials` is empty.
    pub fn new(credentials: Vec<Credential>) -> Result<Self> {
        Self::starting_at(credentials, 0)
    }

    /// Creates a pool whose first turn goes to `credentials[start % len]`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NoCredentials`] if `credentials` is empty.
    pub fn starting_at(credentials: Vec<Credential>, start: usize) -> Result<Self> {
        if credentials.is_empty() {
            return Err(PoolError::NoCredentials);
        }
        let start = start % credentials.len();
        debug!(credentials = credentials.len(), start, "credential pool ready");
        Ok(Self {
            credentials,
            cursor: AtomicUsize::new(start),
        })
    }

    /// Claims the next turn and returns its credential.
    pub fn next(&self) -> Credential {
        let len = self.credentials.len();
        let turn = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| Some((c + 1) % len))
            // The closure always returns Some, so both arms carry the previous value.
            .unwrap_or_else(|prev| prev);
        self.credentials[turn].clone()
    }

    /// Index of the credential the next call will return.
    pub fn position(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Number of credentials in the pool.
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// Always false; an empty pool cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Fingerprints of all credentials, in rotation order.
    pub fn fingerprints(&self) -> Vec<String> {
        self.credentials.iter().map(Credential::fingerprint).collect()
    }
}

impl fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPool")
            .field("len", &self.len())
            .field("position", &self.position())
            .finish()
    }
}
