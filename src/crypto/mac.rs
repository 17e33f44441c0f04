//! HMAC-prefixed data: `tag || data`.
//!
//! `hash_data` prepends an HMAC tag; `verify_data` checks and strips it.

use tracing::debug;

use crate::crypto::compare::constant_time_equals;
use crate::crypto::hash::HashAlgorithm;
use crate::errors::Result;

/// Prepend `HMAC(hash, data, key)` to `data`.
pub fn hash_data(hash: HashAlgorithm, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let tag = hash.hmac(key, data)?;
    let mut out = Vec::with_capacity(tag.len() + data.len());
    out.extend_from_slice(&tag);
    out.extend_from_slice(data);
    Ok(out)
}

/// Check the tag produced by [`hash_data`] and return the data behind it.
///
/// Returns `Ok(None)` when `data` is too short to carry a tag or when the
/// tag does not match. The comparison runs in constant time.
pub fn verify_data<'a>(
    hash: HashAlgorithm,
    data: &'a [u8],
    key: &[u8],
) -> Result<Option<&'a [u8]>> {
    let tag_len = hash.output_len();
    if data.len() < tag_len {
        debug!(len = data.len(), tag_len, "data shorter than MAC tag");
        return Ok(None);
    }

    let (stored, pure) = data.split_at(tag_len);
    let computed = hash.hmac(key, pure)?;
    if constant_time_equals(&computed, stored) {
        Ok(Some(pure))
    } else {
        Ok(None)
    }
}
