use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::curve::{Point, SubgroupPoint};
use crate::randutil::random_fr;
use crate::scalar::Fr;

/// Wire pair for one encrypted value: the random mask r*G and the cipher
/// point r*pk + m*G, both as raw points. Receivers must validate them
/// back into [`SubgroupPoint`]s before decryption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub cipher: Point,
    pub random: Point,
}

/// Full encryption output. `message_point` is m*G; it never goes on the
/// wire but lets the encryptor cross-check recovery.
#[derive(Clone, Debug)]
pub struct Encryption {
    pub cipher: SubgroupPoint,
    pub random: SubgroupPoint,
    pub message_point: SubgroupPoint,
}

impl Encryption {
    pub fn ciphertext(&self) -> Ciphertext {
        Ciphertext {
            cipher: self.cipher.clone().into_point(),
            random: self.random.clone().into_point(),
        }
    }
}

/// Lifted ElGamal: the plaintext rides as m*G, which keeps the scheme
/// additively homomorphic but bounds recoverable plaintexts to the
/// brute-force domain of [`crate::decrypt::recover`].
pub fn encrypt(r: &Fr, message: &BigUint, public_key: &SubgroupPoint) -> Encryption {
    let g = SubgroupPoint::generator();
    let message_point = g.mul_uint(message);
    let random = g.mul(r);
    let cipher = public_key.mul(r).add(&message_point);
    Encryption {
        cipher,
        random,
        message_point,
    }
}

/// Encrypt a whole feature vector under one session randomness, as the
/// reference batch flow does. Sharing r across the batch trades some
/// semantic security for fewer on-chain points; callers wanting fresh
/// randomness per message call [`encrypt`] themselves.
pub fn encrypt_batch(values: &[BigUint], public_key: &SubgroupPoint) -> (Fr, Vec<Ciphertext>) {
    let r = random_fr();
    let ciphertexts = values
        .iter()
        .map(|m| encrypt(&r, m, public_key).ciphertext())
        .collect();
    (r, ciphertexts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::KeyShare;

    fn pk() -> SubgroupPoint {
        KeyShare::from_secret(Fr::from_u64(777)).public
    }

    #[test]
    fn cipher_is_mask_plus_message_point() {
        let r = Fr::from_u64(99);
        let enc = encrypt(&r, &BigUint::from(42u32), &pk());
        assert_eq!(
            enc.cipher,
            pk().mul(&r).add(&SubgroupPoint::generator().mul(&Fr::from_u64(42)))
        );
        assert_eq!(enc.random, SubgroupPoint::generator().mul(&r));
    }

    #[test]
    fn batch_shares_one_random_point() {
        let values = vec![
            BigUint::from(1u32),
            BigUint::from(2u32),
            BigUint::from(3u32),
        ];
        let (r, cts) = encrypt_batch(&values, &pk());
        assert_eq!(cts.len(), 3);
        let mask = SubgroupPoint::generator().mul(&r).into_point();
        for ct in &cts {
            assert_eq!(ct.random, mask);
        }
        assert_ne!(cts[0].cipher, cts[1].cipher);
    }

    #[test]
    fn ciphertext_serde_roundtrip() {
        let enc = encrypt(&Fr::from_u64(5), &BigUint::from(17u32), &pk());
        let json = serde_json::to_string(&enc.ciphertext()).unwrap();
        let back: Ciphertext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enc.ciphertext());
    }
}
