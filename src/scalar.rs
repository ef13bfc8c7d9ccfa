use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CryptoError, Result};

lazy_static! {
    /// Prime order n of the subgroup generated by the base point.
    pub static ref SUBGROUP_ORDER: BigUint = BigUint::parse_bytes(
        b"2736030358979909402780800718157159386076813972158567259200215660948447373041",
        10,
    )
    .unwrap();

    /// Order of the full curve group, 8 * n (cofactor 8).
    pub static ref CURVE_ORDER: BigUint = &*SUBGROUP_ORDER << 3u32;
}

/// An element of the scalar field Z_n: secret keys, encryption randomness
/// and signature values. Always reduced into [0, n); operations return new
/// values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fr(BigUint);

impl Fr {
    pub fn zero() -> Self {
        Fr(BigUint::zero())
    }

    pub fn from_biguint(n: BigUint) -> Self {
        Fr(n % &*SUBGROUP_ORDER)
    }

    pub fn from_u64(n: u64) -> Self {
        Self::from_biguint(BigUint::from(n))
    }

    /// Parse a decimal big-integer string, the persistence format for
    /// secret scalars.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let n = BigUint::from_str_radix(s.trim(), 10).map_err(|_| CryptoError::InvalidInput)?;
        Ok(Self::from_biguint(n))
    }

    /// Interpret bytes as a little-endian unsigned integer and reduce.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self::from_biguint(BigUint::from_bytes_le(bytes))
    }

    pub fn add(&self, other: &Fr) -> Fr {
        Fr((&self.0 + &other.0) % &*SUBGROUP_ORDER)
    }

    pub fn add_uint(&self, other: &BigUint) -> Fr {
        self.add(&Fr::from_biguint(other.clone()))
    }

    pub fn sub(&self, other: &Fr) -> Fr {
        Fr((&self.0 + &*SUBGROUP_ORDER - &other.0) % &*SUBGROUP_ORDER)
    }

    pub fn sub_uint(&self, other: &BigUint) -> Fr {
        self.sub(&Fr::from_biguint(other.clone()))
    }

    pub fn mul(&self, other: &Fr) -> Fr {
        Fr((&self.0 * &other.0) % &*SUBGROUP_ORDER)
    }

    pub fn mul_uint(&self, other: &BigUint) -> Fr {
        self.mul(&Fr::from_biguint(other.clone()))
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }
}

impl Serialize for Fr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Fr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Fr::from_decimal_str(&s).map_err(D::Error::custom)
    }
}
