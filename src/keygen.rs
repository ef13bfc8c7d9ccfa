use serde::{Deserialize, Serialize};

use crate::curve::SubgroupPoint;
use crate::randutil::random_fr;
use crate::scalar::Fr;

/// One party's additive key share. The joint secret is the sum of all
/// shares and is never materialized anywhere; only the joint public key
/// (the sum of the public contributions) exists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyShare {
    pub secret: Fr,
    pub public: SubgroupPoint,
}

impl KeyShare {
    /// Derive the share for an externally persisted secret scalar.
    pub fn from_secret(secret: Fr) -> Self {
        let public = SubgroupPoint::generator().mul(&secret);
        KeyShare { secret, public }
    }
}

/// Fresh share from cryptographically secure randomness.
pub fn generate_share() -> KeyShare {
    KeyShare::from_secret(random_fr())
}

/// Joint public key: fold of the contributions starting at the identity.
/// The group is abelian, so any order or grouping yields the same key.
pub fn combine_public_keys(contributions: &[SubgroupPoint]) -> SubgroupPoint {
    contributions
        .iter()
        .fold(SubgroupPoint::identity(), |acc, c| acc.add(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_key_is_sum_of_contributions() {
        let a = KeyShare::from_secret(Fr::from_u64(11));
        let b = KeyShare::from_secret(Fr::from_u64(31));
        let joint = combine_public_keys(&[a.public.clone(), b.public.clone()]);
        let expected = SubgroupPoint::generator().mul(&Fr::from_u64(42));
        assert_eq!(joint, expected);
    }

    #[test]
    fn combination_is_order_independent() {
        let shares: Vec<_> = (0..4).map(|_| generate_share()).collect();
        let pks: Vec<_> = shares.iter().map(|s| s.public.clone()).collect();

        let forward = combine_public_keys(&pks);
        let mut reversed = pks.clone();
        reversed.reverse();
        assert_eq!(combine_public_keys(&reversed), forward);

        // associativity: combine a prefix first, then the rest
        let prefix = combine_public_keys(&pks[..2]);
        let suffix = combine_public_keys(&pks[2..]);
        assert_eq!(combine_public_keys(&[prefix, suffix]), forward);
    }

    #[test]
    fn empty_combination_is_identity() {
        assert_eq!(combine_public_keys(&[]), SubgroupPoint::identity());
    }
}
