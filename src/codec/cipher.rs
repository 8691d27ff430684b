use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::algorithm::alphabet::{PAD_LETTER, letter_to_residue, residue_to_letter, sanitize};
use crate::codec::key::KeyMatrix;
use crate::codec::matrix::{Matrix, mul_matrix_vec};
use crate::errors::CipherError;

/// Multiplies every block of `residues` by `mat`, reduces each component
/// mod 26, and concatenates the resulting letters in block order. Blocks are
/// independent, so they run in parallel.
fn apply_blocks(mat: &Matrix, residues: &[i64], n: usize) -> String {
    residues
        .par_chunks(n)
        .map(|block| {
            mul_matrix_vec(mat, block)
                .into_iter()
                .map(residue_to_letter)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .concat()
}

/// Hill cipher encryption: sanitize, pad with 'X' to a whole number of
/// blocks, then multiply each block by the key matrix mod 26.
#[instrument(skip_all, fields(n = key.size()))]
pub fn encrypt(plaintext: &str, key: &KeyMatrix) -> String {
    let n = key.size();
    let mut residues: Vec<i64> = sanitize(plaintext).chars().map(letter_to_residue).collect();

    let pad = (n - residues.len() % n) % n;
    residues.extend(std::iter::repeat_n(letter_to_residue(PAD_LETTER), pad));

    debug!("encrypting {} blocks ({pad} padding letters)", residues.len() / n);
    apply_blocks(key.rows(), &residues, n)
}

/// Hill cipher decryption: invert the key mod 26 (closed-form 2x2 path when
/// it applies) and multiply each ciphertext block by the inverse.
///
/// The sanitized ciphertext length must be a multiple of the key size; any
/// failure to invert the key is reported, never swallowed into an empty
/// string. Padding added during encryption reappears as trailing 'X' letters.
#[instrument(skip_all, fields(n = key.size()))]
pub fn decrypt(ciphertext: &str, key: &KeyMatrix) -> Result<String, CipherError> {
    let n = key.size();
    let residues: Vec<i64> = sanitize(ciphertext).chars().map(letter_to_residue).collect();

    if !residues.len().is_multiple_of(n) {
        return Err(CipherError::MalformedCiphertext {
            len: residues.len(),
            block: n,
        });
    }

    let inverse = key.inverse()?;
    debug!("decrypting {} blocks", residues.len() / n);
    Ok(apply_blocks(&inverse, &residues, n))
}
