use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::scalar::{Fr, SUBGROUP_ORDER};

/// Uniform scalar in [0, n): 32 bytes from the OS CSPRNG read as a
/// little-endian integer, resampled until below n. n is not a power of
/// two, so plain reduction would bias the distribution.
pub fn random_fr() -> Fr {
    let mut rng = OsRng;
    loop {
        let mut bytes = [0u8; 32];
        rng.try_fill_bytes(&mut bytes).unwrap();
        let v = BigUint::from_bytes_le(&bytes);
        if v < *SUBGROUP_ORDER {
            return Fr::from_biguint(v);
        }
    }
}
