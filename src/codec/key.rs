use serde::Serialize;
use tracing::debug;

use crate::algorithm::alphabet::{letter_to_residue, sanitize};
use crate::algorithm::mod26::{MODULUS, gcd, modulo};
use crate::codec::matrix::{Matrix, determinant, invert_matrix, invert_matrix_2x2};
use crate::errors::{KeyError, MatrixError};

/// A validated n x n Hill cipher key over Z/26Z, n >= 2.
///
/// Construction via [`KeyMatrix::parse`] guarantees the grid is square and
/// its determinant mod 26 is coprime with 26, so the same key is usable for
/// both encryption and decryption. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyMatrix {
    rows: Matrix,
    #[serde(skip)]
    det_mod26: i64,
}

impl KeyMatrix {
    /// Parses raw key text into a validated key matrix.
    ///
    /// Non-letters are stripped and the remainder uppercased before the
    /// length check, so a key like `"g y b n q k u r p"` is accepted while
    /// `"GYBNQKURPQ"` is not.
    pub fn parse(text: &str) -> Result<Self, KeyError> {
        if text.trim().is_empty() {
            return Err(KeyError::Empty);
        }

        let cleaned = sanitize(text);
        let n = cleaned.len().isqrt();
        if n < 2 || n * n != cleaned.len() {
            return Err(KeyError::InvalidLength(cleaned.len()));
        }

        let residues: Vec<i64> = cleaned.chars().map(letter_to_residue).collect();
        let rows: Matrix = residues.chunks(n).map(<[i64]>::to_vec).collect();

        // Square by construction, so the determinant cannot reject the shape.
        let det = determinant(&rows).map_err(|_| KeyError::InvalidLength(cleaned.len()))?;
        let det_mod26 = modulo(det, MODULUS);
        if gcd(det_mod26, MODULUS) != 1 {
            return Err(KeyError::NonInvertible(det_mod26));
        }

        debug!("parsed {n}x{n} key, det mod 26 = {det_mod26}");
        Ok(Self { rows, det_mod26 })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &Matrix {
        &self.rows
    }

    pub fn determinant_mod26(&self) -> i64 {
        self.det_mod26
    }

    /// Modular inverse of the key, dispatching to the closed-form 2x2 path
    /// when it applies and the general adjugate algorithm otherwise.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if self.size() == 2 {
            invert_matrix_2x2(&self.rows)
        } else {
            invert_matrix(&self.rows)
        }
    }

    /// Display-only rendering as a nested bracketed integer list, e.g.
    /// `[[6,24,1],[13,16,10],[20,17,15]]`.
    pub fn render(&self) -> String {
        serde_json::to_string(&self.rows).unwrap_or_default()
    }
}
