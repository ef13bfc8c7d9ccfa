use num_bigint::BigUint;
use sha2::{Digest, Sha512};

use crate::curve::Point;
use crate::scalar::Fr;

/// ===== Hash-to-scalar =====
/// Domain-separated SHA-512 reduced into Z_n from 64 bytes, keeping the
/// reduction bias negligible. The construction is fixed: interoperating
/// implementations must reproduce it byte for byte.

fn hash_to_fr(domain: &[u8], data: &[u8]) -> Fr {
    let mut h = Sha512::new();
    h.update(domain);
    h.update(data);
    Fr::from_le_bytes(&h.finalize())
}

/// 32-byte little-endian coordinate encoding used inside hashes.
fn enc_coord(v: &BigUint) -> [u8; 32] {
    let mut out = [0u8; 32];
    let bytes = v.to_bytes_le();
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

/// Hsig(R.x, PK.x, m) -> Z_n, the Schnorr challenge.
pub fn challenge(random_point: &Point, pubkey_point: &Point, message: &[u8]) -> Fr {
    let mut buf = Vec::new();
    buf.extend_from_slice(&enc_coord(&random_point.x));
    buf.extend_from_slice(&enc_coord(&pubkey_point.x));
    buf.extend_from_slice(message);
    hash_to_fr(b"te::Hsig", &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::GENERATOR;

    #[test]
    fn challenge_is_deterministic() {
        let r = GENERATOR.mul(&Fr::from_u64(3));
        let pk = GENERATOR.mul(&Fr::from_u64(5));
        assert_eq!(challenge(&r, &pk, b"m"), challenge(&r, &pk, b"m"));
    }

    #[test]
    fn challenge_binds_every_input() {
        let r = GENERATOR.mul(&Fr::from_u64(3));
        let pk = GENERATOR.mul(&Fr::from_u64(5));
        let base = challenge(&r, &pk, b"m");
        assert_ne!(challenge(&r, &pk, b"m2"), base);
        assert_ne!(challenge(&pk, &r, b"m"), base);
    }
}
