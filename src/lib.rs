pub mod curve;
pub mod decrypt;
pub mod elgamal;
pub mod error;
pub mod field;
pub mod hash;
pub mod keygen;
pub mod randutil;
pub mod scalar;
pub mod signature;
