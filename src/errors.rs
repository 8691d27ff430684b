use thiserror::Error;

/// Rejections produced while parsing key text into a key matrix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("key text is empty")]
    Empty,

    #[error("key length {0} is not a perfect square of side >= 2 (non-letters are stripped first)")]
    InvalidLength(usize),

    #[error("key determinant {0} (mod 26) shares a factor with 26, so the key cannot be inverted")]
    NonInvertible(i64),
}

/// Failures inside the modular matrix algebra routines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix must be square")]
    NotSquare,

    #[error("{0} has no multiplicative inverse modulo 26")]
    NoInverse(i64),
}

/// Failures surfaced by the cipher engine during decryption.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("ciphertext length {len} is not a multiple of the key size {block}")]
    MalformedCiphertext { len: usize, block: usize },

    #[error("key inversion failed during decryption")]
    Decryption(#[from] MatrixError),
}
