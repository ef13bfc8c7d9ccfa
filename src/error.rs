use thiserror::Error;

/// Failure conditions of the cryptographic core. All of these are
/// deterministic and caller-correctable; none leaves the process in a
/// corrupted state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("input is not a valid unsigned integer")]
    InvalidInput,

    #[error("compressed encoding does not correspond to a curve point")]
    MalformedEncoding,

    #[error("point does not satisfy the curve equation")]
    NotOnCurve,

    /// Security-critical rejection: a point on the curve but outside the
    /// prime-order subgroup enables small-subgroup confinement attacks.
    #[error("point is outside the prime-order subgroup")]
    NotInSubgroup,

    #[error("no plaintext in [0, {max}] matches the message point")]
    ValueOutOfRange { max: u64 },

    #[error("only {got} of {required} partial decryptions are available")]
    IncompleteContributions { got: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, CryptoError>;
