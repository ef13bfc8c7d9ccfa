use crate::curve::{Point, SubgroupPoint, GENERATOR};
use crate::error::{CryptoError, Result};
use crate::scalar::Fr;

/// One key-share holder's partial decryption: secret * random. Every
/// party publishes its contribution; nobody ever sees another party's
/// secret or the joint secret.
pub fn partial_decrypt(random: &SubgroupPoint, secret: &Fr) -> SubgroupPoint {
    random.mul(secret)
}

/// Aggregator step: cipher - Σ contributions = m*G. The group is abelian,
/// so contributions subtract in any order. Fails when fewer than
/// `required` parties have contributed.
pub fn combine(
    cipher: &SubgroupPoint,
    contributions: &[SubgroupPoint],
    required: usize,
) -> Result<Point> {
    if contributions.len() < required {
        return Err(CryptoError::IncompleteContributions {
            got: contributions.len(),
            required,
        });
    }
    Ok(contributions
        .iter()
        .fold(cipher.clone(), |acc, c| acc.sub(c))
        .into_point())
}

/// Brute-force discrete log over the bounded plaintext domain: walk
/// candidate*G for candidate = 0..=max_value by repeated addition of G
/// and return the first match. Linear search is the deliberate design
/// here; the scheme only supports small quantized feature statistics.
pub fn recover(message_point: &Point, max_value: u64) -> Result<u64> {
    let mut acc = Point::identity();
    for candidate in 0..=max_value {
        if acc == *message_point {
            return Ok(candidate);
        }
        acc = acc.add(&GENERATOR);
    }
    Err(CryptoError::ValueOutOfRange { max: max_value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    use crate::elgamal::encrypt;
    use crate::keygen::{combine_public_keys, KeyShare};

    #[test]
    fn three_party_decryption_recovers_plaintext() {
        let shares = vec![
            KeyShare::from_secret(Fr::from_u64(1001)),
            KeyShare::from_secret(Fr::from_u64(2002)),
            KeyShare::from_secret(Fr::from_u64(3003)),
        ];
        let pks: Vec<_> = shares.iter().map(|s| s.public.clone()).collect();
        let joint = combine_public_keys(&pks);

        let enc = encrypt(&Fr::from_u64(555), &BigUint::from(42u32), &joint);

        let contributions: Vec<_> = shares
            .iter()
            .map(|s| partial_decrypt(&enc.random, &s.secret))
            .collect();

        let message_point = combine(&enc.cipher, &contributions, 3).unwrap();
        assert_eq!(message_point, *enc.message_point.as_point());
        assert_eq!(recover(&message_point, 100).unwrap(), 42);
    }

    #[test]
    fn combination_order_does_not_matter() {
        let shares: Vec<_> = (1..=3u64)
            .map(|i| KeyShare::from_secret(Fr::from_u64(i * 7)))
            .collect();
        let joint = combine_public_keys(
            &shares.iter().map(|s| s.public.clone()).collect::<Vec<_>>(),
        );
        let enc = encrypt(&Fr::from_u64(9), &BigUint::from(5u32), &joint);

        let mut contributions: Vec<_> = shares
            .iter()
            .map(|s| partial_decrypt(&enc.random, &s.secret))
            .collect();
        let forward = combine(&enc.cipher, &contributions, 3).unwrap();
        contributions.reverse();
        assert_eq!(combine(&enc.cipher, &contributions, 3).unwrap(), forward);
    }

    #[test]
    fn rejects_missing_contributions() {
        let share = KeyShare::from_secret(Fr::from_u64(3));
        let enc = encrypt(&Fr::from_u64(2), &BigUint::from(1u32), &share.public);
        let contributions = vec![partial_decrypt(&enc.random, &share.secret)];
        assert_eq!(
            combine(&enc.cipher, &contributions, 2),
            Err(CryptoError::IncompleteContributions {
                got: 1,
                required: 2
            })
        );
    }

    #[test]
    fn recover_finds_boundary_values() {
        assert_eq!(recover(&Point::identity(), 0).unwrap(), 0);
        let p = GENERATOR.mul(&Fr::from_u64(100));
        assert_eq!(recover(&p, 100).unwrap(), 100);
    }

    #[test]
    fn recover_fails_outside_search_bound() {
        let p = GENERATOR.mul(&Fr::from_u64(101));
        assert_eq!(
            recover(&p, 100),
            Err(CryptoError::ValueOutOfRange { max: 100 })
        );
    }
}
