use serde::{Deserialize, Serialize};

use crate::curve::{Point, SubgroupPoint};
use crate::hash::challenge;
use crate::randutil::random_fr;
use crate::scalar::Fr;

/// Schnorr-style signature over the curve: sig = nonce + secret * c with
/// c = Hsig(R.x, PK.x, m).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub sig: Fr,
    pub random_point: Point,
    pub pubkey_point: Point,
}

/// Sign with a fresh nonce. Reusing a nonce across two messages hands the
/// secret key to anyone who sees both signatures.
pub fn sign(message: &[u8], secret: &Fr) -> Signature {
    sign_with_nonce(message, secret, &random_fr())
}

pub(crate) fn sign_with_nonce(message: &[u8], secret: &Fr, nonce: &Fr) -> Signature {
    let g = SubgroupPoint::generator();
    let pubkey_point = g.mul(secret).into_point();
    let random_point = g.mul(nonce).into_point();
    let c = challenge(&random_point, &pubkey_point, message);
    let sig = nonce.add(&secret.mul(&c));
    Signature {
        sig,
        random_point,
        pubkey_point,
    }
}

/// Check sig*G == R + c*PK.
pub fn verify(signature: &Signature, message: &[u8]) -> bool {
    let c = challenge(&signature.random_point, &signature.pubkey_point, message);
    let left = SubgroupPoint::generator().as_point().mul(&signature.sig);
    let right = signature
        .random_point
        .add(&signature.pubkey_point.mul(&c));
    left == right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_verifies() {
        let sk = Fr::from_decimal_str(
            "503727473305877844506873996931912511231165373045349997878819676436274883747",
        )
        .unwrap();
        let sig = sign(b"federated model update", &sk);
        assert!(verify(&sig, b"federated model update"));
    }

    #[test]
    fn altered_message_fails() {
        let sk = Fr::from_u64(12345);
        let sig = sign(b"original", &sk);
        assert!(!verify(&sig, b"tampered"));
    }

    #[test]
    fn tampered_sig_scalar_fails() {
        let sk = Fr::from_u64(12345);
        let mut sig = sign(b"message", &sk);
        sig.sig = sig.sig.add(&Fr::from_u64(1));
        assert!(!verify(&sig, b"message"));
    }

    #[test]
    fn fixed_nonce_is_deterministic() {
        let sk = Fr::from_u64(77);
        let nonce = Fr::from_decimal_str(
            "915741872055174709582496649907748245746230334174847925117285815064205083888",
        )
        .unwrap();
        let a = sign_with_nonce(b"m", &sk, &nonce);
        let b = sign_with_nonce(b"m", &sk, &nonce);
        assert_eq!(a, b);
        assert!(verify(&a, b"m"));
    }

    #[test]
    fn fresh_nonces_differ_between_calls() {
        let sk = Fr::from_u64(9);
        let a = sign(b"m", &sk);
        let b = sign(b"m", &sk);
        assert_ne!(a.random_point, b.random_point);
    }
}
