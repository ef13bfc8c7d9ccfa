use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, Result};
use crate::field;
use crate::scalar::{Fr, SUBGROUP_ORDER};

lazy_static! {
    /// Fixed base point G of prime order n, bit-exact with the reference
    /// deployment. All keys and message points are multiples of it.
    pub static ref GENERATOR: Point = Point {
        x: BigUint::parse_bytes(
            b"16540640123574156134436876038791482806971768689494387082833631921987005038935",
            10,
        )
        .unwrap(),
        y: BigUint::parse_bytes(
            b"20819045374670962167435360035096875258406992893633759881276124905556507972311",
            10,
        )
        .unwrap(),
    };
}

/// Affine point on the twisted-Edwards curve. This is the raw, unchecked
/// form produced by decoding; nothing guarantees subgroup membership. See
/// [`SubgroupPoint`] for the validated form the encryption APIs require.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PointWire", into = "PointWire")]
pub struct Point {
    pub x: BigUint,
    pub y: BigUint,
}

/// Decimal-string coordinate pair, the format the contract layer
/// serializes into call arguments.
#[derive(Serialize, Deserialize)]
struct PointWire {
    x: String,
    y: String,
}

impl From<Point> for PointWire {
    fn from(p: Point) -> Self {
        PointWire {
            x: p.x.to_str_radix(10),
            y: p.y.to_str_radix(10),
        }
    }
}

impl TryFrom<PointWire> for Point {
    type Error = CryptoError;

    fn try_from(w: PointWire) -> Result<Self> {
        Point::from_decimal_strs(&w.x, &w.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::identity()
    }
}

impl Point {
    /// The group identity (0, 1).
    pub fn identity() -> Self {
        Point {
            x: BigUint::zero(),
            y: BigUint::one(),
        }
    }

    /// Coordinates are reduced into the base field on construction.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point {
            x: x % &*field::MODULUS,
            y: y % &*field::MODULUS,
        }
    }

    pub fn from_decimal_strs(x: &str, y: &str) -> Result<Self> {
        let x = BigUint::from_str_radix(x.trim(), 10).map_err(|_| CryptoError::InvalidInput)?;
        let y = BigUint::from_str_radix(y.trim(), 10).map_err(|_| CryptoError::InvalidInput)?;
        Ok(Point::new(x, y))
    }

    /// Complete twisted-Edwards addition. The formula has no exceptional
    /// cases for identity or doubling.
    pub fn add(&self, other: &Point) -> Point {
        let x1y2 = field::mul(&self.x, &other.y);
        let y1x2 = field::mul(&self.y, &other.x);
        let x1x2 = field::mul(&self.x, &other.x);
        let y1y2 = field::mul(&self.y, &other.y);
        let dxy = field::mul(&field::COEFF_D, &field::mul(&x1x2, &y1y2));
        let one = BigUint::one();

        let x3 = field::mul(
            &field::add(&x1y2, &y1x2),
            &field::inv(&field::add(&one, &dxy)),
        );
        let y3 = field::mul(
            &field::sub(&y1y2, &field::mul(&field::COEFF_A, &x1x2)),
            &field::inv(&field::sub(&one, &dxy)),
        );
        Point { x: x3, y: y3 }
    }

    pub fn negate(&self) -> Point {
        Point {
            x: field::neg(&self.x),
            y: self.y.clone(),
        }
    }

    pub fn sub(&self, other: &Point) -> Point {
        self.add(&other.negate())
    }

    pub fn mul(&self, k: &Fr) -> Point {
        self.mul_uint(k.as_biguint())
    }

    /// Double-and-add over the bits of k. k need not be reduced.
    pub fn mul_uint(&self, k: &BigUint) -> Point {
        let mut acc = Point::identity();
        let mut base = self.clone();
        let mut k = k.clone();
        while !k.is_zero() {
            if k.bit(0) {
                acc = acc.add(&base);
            }
            base = base.add(&base);
            k >>= 1u32;
        }
        acc
    }

    pub fn is_on_curve(&self) -> bool {
        let xx = field::mul(&self.x, &self.x);
        let yy = field::mul(&self.y, &self.y);
        let lhs = field::add(&field::mul(&field::COEFF_A, &xx), &yy);
        let rhs = field::add(
            &BigUint::one(),
            &field::mul(&field::COEFF_D, &field::mul(&xx, &yy)),
        );
        lhs == rhs
    }

    /// Multiplication by the subgroup order must land on the identity.
    /// Callers MUST check this (via [`SubgroupPoint::validate`]) before
    /// trusting an external point as a key or ciphertext component.
    pub fn is_in_subgroup(&self) -> bool {
        self.mul_uint(&SUBGROUP_ORDER) == Point::identity()
    }

    /// Fixed-width encoding: little-endian y with the sign of x packed
    /// into the top bit. y < 2^254, so the bit is always free.
    pub fn compress(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let bytes = self.y.to_bytes_le();
        out[..bytes.len()].copy_from_slice(&bytes);
        if self.x > *field::HALF {
            out[31] |= 0x80;
        }
        out
    }

    /// Inverse of [`compress`](Point::compress). Solves
    /// x^2 = (1 - y^2) / (a - d*y^2) and picks the root matching the sign
    /// bit. Fails when no valid x exists for the encoded y.
    pub fn decompress(bytes: &[u8; 32]) -> Result<Point> {
        let mut buf = *bytes;
        let sign = buf[31] & 0x80 != 0;
        buf[31] &= 0x7f;

        let y = BigUint::from_bytes_le(&buf);
        if y >= *field::MODULUS {
            return Err(CryptoError::MalformedEncoding);
        }

        let yy = field::mul(&y, &y);
        let num = field::sub(&BigUint::one(), &yy);
        let den = field::sub(&field::COEFF_A, &field::mul(&field::COEFF_D, &yy));
        if den.is_zero() {
            return Err(CryptoError::MalformedEncoding);
        }
        let xx = field::mul(&num, &field::inv(&den));
        let root = field::sqrt(&xx).ok_or(CryptoError::MalformedEncoding)?;

        if root.is_zero() {
            // x = 0 has no negative representative
            if sign {
                return Err(CryptoError::MalformedEncoding);
            }
            return Ok(Point { x: root, y });
        }
        let x = if (root > *field::HALF) == sign {
            root
        } else {
            field::neg(&root)
        };
        Ok(Point { x, y })
    }
}

/// A point verified to lie on the curve and in the prime-order subgroup.
/// The only way to obtain one from external data is the fallible
/// [`validate`](SubgroupPoint::validate) step, so unchecked points cannot
/// reach the encryption and decryption APIs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Point", into = "Point")]
pub struct SubgroupPoint(Point);

impl SubgroupPoint {
    pub fn validate(point: Point) -> Result<Self> {
        if !point.is_on_curve() {
            return Err(CryptoError::NotOnCurve);
        }
        if !point.is_in_subgroup() {
            return Err(CryptoError::NotInSubgroup);
        }
        Ok(SubgroupPoint(point))
    }

    pub fn generator() -> Self {
        SubgroupPoint(GENERATOR.clone())
    }

    pub fn identity() -> Self {
        SubgroupPoint(Point::identity())
    }

    // The subgroup is closed under the group law, so results of the
    // operations below skip revalidation.

    pub fn add(&self, other: &SubgroupPoint) -> SubgroupPoint {
        SubgroupPoint(self.0.add(&other.0))
    }

    pub fn sub(&self, other: &SubgroupPoint) -> SubgroupPoint {
        SubgroupPoint(self.0.sub(&other.0))
    }

    pub fn mul(&self, k: &Fr) -> SubgroupPoint {
        SubgroupPoint(self.0.mul(k))
    }

    pub fn mul_uint(&self, k: &BigUint) -> SubgroupPoint {
        SubgroupPoint(self.0.mul_uint(k))
    }

    pub fn as_point(&self) -> &Point {
        &self.0
    }

    pub fn into_point(self) -> Point {
        self.0
    }
}

impl TryFrom<Point> for SubgroupPoint {
    type Error = CryptoError;

    fn try_from(point: Point) -> Result<Self> {
        SubgroupPoint::validate(point)
    }
}

impl From<SubgroupPoint> for Point {
    fn from(p: SubgroupPoint) -> Point {
        p.0
    }
}

impl std::ops::Deref for SubgroupPoint {
    type Target = Point;

    fn deref(&self) -> &Point {
        &self.0
    }
}
