use crate::algorithm::mod26::{MODULUS, mod_inverse, modulo};
use crate::errors::MatrixError;

pub type Matrix = Vec<Vec<i64>>;

fn is_square(mat: &[Vec<i64>]) -> bool {
    !mat.is_empty() && mat.iter().all(|r| r.len() == mat.len())
}

fn sign(i: usize) -> i64 {
    if i % 2 == 0 { 1 } else { -1 }
}

/// True integer determinant via Laplace expansion along the first row.
/// No modular reduction happens here; callers reduce mod 26 afterwards.
pub fn determinant(mat: &[Vec<i64>]) -> Result<i64, MatrixError> {
    if !is_square(mat) {
        return Err(MatrixError::NotSquare);
    }
    match mat.len() {
        1 => Ok(mat[0][0]),
        2 => Ok(mat[0][0] * mat[1][1] - mat[0][1] * mat[1][0]),
        n => {
            let mut det = 0;
            for i in 0..n {
                det += sign(i) * mat[0][i] * determinant(&minor(mat, 0, i))?;
            }
            Ok(det)
        }
    }
}

/// The (n-1)x(n-1) matrix left after deleting `row` and `col`.
pub fn minor(mat: &[Vec<i64>], row: usize, col: usize) -> Matrix {
    mat.iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Modular inverse of a square matrix over Z/26Z via the adjugate.
///
/// Each entry (i, j) contributes its signed cofactor determinant, reduced
/// mod 26 and scaled by the determinant's modular inverse, at the transposed
/// position (j, i).
pub fn invert_matrix(mat: &[Vec<i64>]) -> Result<Matrix, MatrixError> {
    let n = mat.len();
    let det = modulo(determinant(mat)?, MODULUS);
    let det_inv = mod_inverse(det, MODULUS).ok_or(MatrixError::NoInverse(det))?;

    let mut inv = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let cof = modulo(determinant(&minor(mat, i, j))?, MODULUS);
            inv[j][i] = modulo(sign(i + j) * cof * det_inv, MODULUS);
        }
    }
    Ok(inv)
}

/// Closed-form 2x2 inverse: adjugate [[d, -b], [-c, a]] scaled by the
/// determinant's modular inverse. Kept alongside [`invert_matrix`], which must
/// produce identical results for n = 2.
pub fn invert_matrix_2x2(mat: &[Vec<i64>]) -> Result<Matrix, MatrixError> {
    if mat.len() != 2 || !is_square(mat) {
        return Err(MatrixError::NotSquare);
    }
    let det = modulo(mat[0][0] * mat[1][1] - mat[0][1] * mat[1][0], MODULUS);
    let det_inv = mod_inverse(det, MODULUS).ok_or(MatrixError::NoInverse(det))?;

    Ok(vec![
        vec![
            modulo(mat[1][1] * det_inv, MODULUS),
            modulo(-mat[0][1] * det_inv, MODULUS),
        ],
        vec![
            modulo(-mat[1][0] * det_inv, MODULUS),
            modulo(mat[0][0] * det_inv, MODULUS),
        ],
    ])
}

/// Matrix-vector product over the plain integers; callers reduce mod 26.
pub fn mul_matrix_vec(mat: &[Vec<i64>], vec: &[i64]) -> Vec<i64> {
    mat.iter()
        .map(|row| row.iter().zip(vec).map(|(&a, &b)| a * b).sum())
        .collect()
}
