//! # Base58Check Encoding
//!
//! Checksummed base-58 over `version || payload`: the checksum is the first
//! four bytes of SHA-256 applied twice to the versioned payload, and the
//! alphabet excludes the visually ambiguous `0`, `O`, `I`, `l`. Leading zero
//! bytes are preserved as literal `'1'` characters.
//!
//! The checksum deliberately calls single-round SHA-256 twice itself rather
//! than reusing the tree-node hasher; the two transforms are specified
//! independently even though they compute the same bytes today.

use crate::algorithms::hasher::sha256;

/// The 58-symbol alphabet (no `0`, `O`, `I`, `l`).
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of checksum bytes appended before encoding.
const CHECKSUM_LEN: usize = 4;

/// Encode `version || payload || checksum` in base-58.
///
/// No size precondition is enforced: the encoding is total over arbitrary
/// payloads.
pub fn base58check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);

    let h2 = sha256(&sha256(&data));
    data.extend_from_slice(&h2[..CHECKSUM_LEN]);

    encode_base58(&data)
}

/// Base-58 encode a byte string interpreted as a big-endian unsigned
/// integer, with one `'1'` prepended per leading zero byte.
fn encode_base58(data: &[u8]) -> String {
    // Repeated divmod-by-58 over the big-endian byte string; quotient bytes
    // shrink as leading zeros are skipped.
    let mut digits = Vec::new();
    let mut quotient: Vec<u8> = data.to_vec();
    while quotient.iter().any(|b| *b != 0) {
        let mut remainder: u32 = 0;
        let mut next = Vec::with_capacity(quotient.len());
        for byte in &quotient {
            let acc = (remainder << 8) | u32::from(*byte);
            let digit = acc / 58;
            remainder = acc % 58;
            if !(next.is_empty() && digit == 0) {
                next.push(digit as u8);
            }
        }
        digits.push(ALPHABET[remainder as usize]);
        quotient = next;
    }

    let leading_zeros = data.iter().take_while(|b| **b == 0).count();
    let mut encoded = vec![b'1'; leading_zeros];
    encoded.extend(digits.iter().rev());

    // ALPHABET is pure ASCII, so this cannot fail.
    String::from_utf8(encoded).unwrap_or_default()
}
