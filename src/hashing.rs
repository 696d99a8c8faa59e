//! Incremental content hashing.
//!
//! Objects feed a caller-supplied [`Digest`] field by field in declared
//! order. Every primitive is framed (length prefixes, presence tags, element
//! counts) so that distinct field sequences cannot produce the same input.

use sha2::Digest;

pub fn hash_str<H: Digest>(hasher: &mut H, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Hashes a double by canonical bits: every NaN hashes alike and `-0.0`
/// hashes as `0.0`, matching [`crate::equality::doubles`].
pub fn hash_f64<H: Digest>(hasher: &mut H, value: f64) {
    let canonical = if value.is_nan() {
        f64::NAN
    } else if value == 0.0 {
        0.0
    } else {
        value
    };
    hasher.update(canonical.to_bits().to_le_bytes());
}

pub fn hash_bool<H: Digest>(hasher: &mut H, value: bool) {
    hasher.update([u8::from(value)]);
}

pub fn hash_presence<H: Digest>(hasher: &mut H, present: bool) {
    hasher.update([if present { 1u8 } else { 0u8 }]);
}

pub fn hash_len<H: Digest>(hasher: &mut H, len: usize) {
    hasher.update((len as u64).to_le_bytes());
}

/// Lowercase hex encoding of a digest.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
