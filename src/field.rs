use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{One, Zero};

lazy_static! {
    /// Base field modulus p. Curve coordinates live in Z_p.
    pub static ref MODULUS: BigUint = BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .unwrap();

    /// Twisted-Edwards coefficient a in a*x^2 + y^2 = 1 + d*x^2*y^2.
    pub static ref COEFF_A: BigUint = BigUint::from(168700u32);

    /// Twisted-Edwards coefficient d.
    pub static ref COEFF_D: BigUint = BigUint::from(168696u32);

    /// (p - 1) / 2. Elements above this are the "negative" half of the
    /// field, which is what the compressed sign bit records.
    pub static ref HALF: BigUint = (&*MODULUS - BigUint::one()) >> 1;
}

/// Operands of the functions below must already be reduced into [0, p).

pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % &*MODULUS
}

pub fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    (a + &*MODULUS - b) % &*MODULUS
}

pub fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % &*MODULUS
}

pub fn neg(a: &BigUint) -> BigUint {
    if a.is_zero() {
        BigUint::zero()
    } else {
        &*MODULUS - a
    }
}

/// Multiplicative inverse by Fermat: a^{p-2} mod p. Returns zero for zero.
pub fn inv(a: &BigUint) -> BigUint {
    a.modpow(&(&*MODULUS - BigUint::from(2u32)), &MODULUS)
}

fn legendre(a: &BigUint) -> BigUint {
    a.modpow(&HALF, &MODULUS)
}

/// Tonelli–Shanks square root mod p. p ≡ 1 (mod 4) with 2-adicity 28, so
/// none of the cheap exponentiation shortcuts apply. Returns None when `a`
/// is a non-residue.
pub fn sqrt(a: &BigUint) -> Option<BigUint> {
    if a.is_zero() {
        return Some(BigUint::zero());
    }
    let one = BigUint::one();
    if legendre(a) != one {
        return None;
    }

    // p - 1 = q * 2^s with q odd
    let mut q = &*MODULUS - &one;
    let mut s = 0u32;
    while (&q & &one).is_zero() {
        q >>= 1;
        s += 1;
    }

    // smallest quadratic non-residue as the seed
    let mut z = BigUint::from(2u32);
    while legendre(&z) == one {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, &MODULUS);
    let mut t = a.modpow(&q, &MODULUS);
    let mut r = a.modpow(&((&q + &one) >> 1), &MODULUS);

    while t != one {
        let mut i = 0u32;
        let mut t2 = t.clone();
        while t2 != one {
            t2 = (&t2 * &t2) % &*MODULUS;
            i += 1;
            if i == m {
                return None;
            }
        }
        let b = c.modpow(&(BigUint::one() << (m - i - 1)), &MODULUS);
        m = i;
        c = (&b * &b) % &*MODULUS;
        t = (&t * &c) % &*MODULUS;
        r = (&r * &b) % &*MODULUS;
    }
    Some(r)
}
