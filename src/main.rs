//! # Hill Cipher over Z/26Z
//!
//! Block cipher on uppercase letters: each block of n letters is multiplied
//! by an n x n key matrix modulo 26. Keys are given as letter strings of
//! perfect-square length whose matrix is invertible mod 26.
//!
//! ## Usage
//!
//! ### Encrypting inline text
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- encrypt --key GYBNQKURP --text "ACT"
//! ```
//!
//! ### Decrypting a file
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- decrypt --key GYBNQKURP --input cipher.txt --output plain.txt
//! ```
//!
//! ### Inspecting a key
//!
//! ```bash
//! cargo run --release -- inspect --key GYBNQKURP
//! ```

mod algorithm;
mod cli;
mod codec;
mod errors;
mod io;

use crate::{
    cli::commands::{Cli, Commands},
    io::{decrypting::handle_decrypt, encrypting::handle_encrypt, inspecting::handle_inspect},
};
use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[cfg(test)]
mod tests {
    use crate::{
        algorithm::{
            alphabet::{letter_to_residue, residue_to_letter, sanitize},
            mod26::{gcd, mod_inverse, modulo},
        },
        codec::{
            cipher::{decrypt, encrypt},
            key::KeyMatrix,
            matrix::{determinant, invert_matrix, invert_matrix_2x2, minor},
        },
        errors::{CipherError, KeyError, MatrixError},
    };

    /// Textbook 3x3 key: [[6,24,1],[13,16,10],[20,17,15]].
    fn textbook_key() -> KeyMatrix {
        KeyMatrix::parse("GYBNQKURP").unwrap()
    }

    #[test]
    fn test_known_vector_act_poh() {
        let key = textbook_key();
        assert_eq!(encrypt("ACT", &key), "POH");
        assert_eq!(decrypt("POH", &key).unwrap(), "ACT");
    }

    #[test]
    fn test_roundtrip_key_sizes_2_to_4() {
        let cases = [
            ("HILL", "SHORTMESSAGE"),
            ("GYBNQKURP", "ATTACKATDAWN"),
            ("DBBBAFBBAAHBAAAJ", "MEETMEATTHEUSUALPLACEATTENXY"),
        ];
        for (key_text, plaintext) in cases {
            let key = KeyMatrix::parse(key_text).unwrap();
            assert_eq!(plaintext.len() % key.size(), 0, "test input misaligned");
            let ciphertext = encrypt(plaintext, &key);
            assert_eq!(
                decrypt(&ciphertext, &key).unwrap(),
                plaintext,
                "roundtrip failed for key {key_text}"
            );
        }
    }

    #[test]
    fn test_padding_to_block_multiple() {
        let key = KeyMatrix::parse("HILL").unwrap();
        let padded = encrypt("HELLO", &key);
        assert_eq!(padded.len(), 6);
        assert_eq!(padded, encrypt("HELLOX", &key));
        // Padding reappears after decryption; a documented block-cipher property.
        assert_eq!(decrypt(&padded, &key).unwrap(), "HELLOX");
    }

    #[test]
    fn test_no_padding_when_aligned() {
        let key = KeyMatrix::parse("HILL").unwrap();
        assert_eq!(encrypt("ABCD", &key).len(), 4);
    }

    #[test]
    fn test_non_letters_are_stripped() {
        let key = textbook_key();
        assert_eq!(encrypt("he11o, wor!ld?", &key), encrypt("HELLOWORLD", &key));
        assert_eq!(sanitize("he11o, wor!ld?"), "HELLOWORLD");
    }

    #[test]
    fn test_determinant_2x2_shortcut_matches_general() {
        let mats = [
            vec![vec![7, 8], vec![11, 11]],
            vec![vec![3, 3], vec![2, 5]],
            vec![vec![0, 1], vec![25, 24]],
        ];
        for mat in mats {
            let expected = mat[0][0] * mat[1][1] - mat[0][1] * mat[1][0];
            assert_eq!(determinant(&mat).unwrap(), expected);
        }
    }

    #[test]
    fn test_determinant_3x3() {
        let mat = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        assert_eq!(determinant(&mat).unwrap(), 441);
    }

    #[test]
    fn test_determinant_rejects_non_square() {
        let mat = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(determinant(&mat), Err(MatrixError::NotSquare));
    }

    #[test]
    fn test_minor_deletes_row_and_column() {
        let mat = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        assert_eq!(minor(&mat, 0, 1), vec![vec![13, 10], vec![20, 15]]);
        assert_eq!(minor(&mat, 2, 2), vec![vec![6, 24], vec![13, 16]]);
    }

    #[test]
    fn test_2x2_inverse_matches_general_inverse() {
        // Invertible mod 26: determinants coprime with 26.
        let mats = [
            vec![vec![7, 8], vec![11, 11]],
            vec![vec![3, 3], vec![2, 5]],
            vec![vec![5, 8], vec![17, 3]],
            vec![vec![1, 0], vec![0, 1]],
        ];
        for mat in mats {
            assert_eq!(
                invert_matrix_2x2(&mat).unwrap(),
                invert_matrix(&mat).unwrap(),
                "inverse paths diverged for {mat:?}"
            );
        }
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let key = textbook_key();
        let inv = key.inverse().unwrap();
        let n = key.size();
        for i in 0..n {
            for j in 0..n {
                let cell: i64 = (0..n).map(|k| inv[i][k] * key.rows()[k][j]).sum();
                assert_eq!(modulo(cell, 26), i64::from(i == j));
            }
        }
    }

    #[test]
    fn test_singular_matrix_inversion() {
        let singular = vec![vec![1, 1], vec![2, 2]];
        assert_eq!(invert_matrix(&singular), Err(MatrixError::NoInverse(0)));
        assert_eq!(invert_matrix_2x2(&singular), Err(MatrixError::NoInverse(0)));
    }

    #[test]
    fn test_key_validation_rejects() {
        assert_eq!(KeyMatrix::parse(""), Err(KeyError::Empty));
        assert_eq!(KeyMatrix::parse("   "), Err(KeyError::Empty));
        assert_eq!(KeyMatrix::parse("AB"), Err(KeyError::InvalidLength(2)));
        assert_eq!(KeyMatrix::parse("GYBNQKURPQ"), Err(KeyError::InvalidLength(10)));
        // A single letter would give a 1x1 grid; keys start at 2x2.
        assert_eq!(KeyMatrix::parse("A"), Err(KeyError::InvalidLength(1)));
        assert_eq!(KeyMatrix::parse("AAAA"), Err(KeyError::NonInvertible(0)));
    }

    #[test]
    fn test_key_text_is_cleaned_before_layout() {
        let spaced = KeyMatrix::parse("g y b-n q1k u r p!").unwrap();
        assert_eq!(spaced, textbook_key());
    }

    #[test]
    fn test_key_render_nested_brackets() {
        assert_eq!(textbook_key().render(), "[[6,24,1],[13,16,10],[20,17,15]]");
    }

    #[test]
    fn test_malformed_ciphertext_length() {
        let key = textbook_key();
        assert_eq!(
            decrypt("POHX", &key),
            Err(CipherError::MalformedCiphertext { len: 4, block: 3 })
        );
    }

    #[test]
    fn test_modulo_canonicalization() {
        assert_eq!(modulo(-3, 26), 23);
        assert_eq!(modulo(441, 26), 25);
        assert_eq!(residue_to_letter(-3), 'X');
        assert_eq!(residue_to_letter(23), 'X');
        assert_eq!(residue_to_letter(27), 'B');
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 0), 12);
        assert_eq!(gcd(15, 26), 1);
        assert_eq!(gcd(13, 26), 13);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(15, 26), Some(7));
        assert_eq!(mod_inverse(-11, 26), Some(7));
        assert_eq!(mod_inverse(13, 26), None);
        assert_eq!(mod_inverse(0, 26), None);
    }

    #[test]
    fn test_letter_codec() {
        assert_eq!(letter_to_residue('A'), 0);
        assert_eq!(letter_to_residue('Z'), 25);
        assert_eq!(residue_to_letter(letter_to_residue('Q')), 'Q');
    }

    #[test]
    fn test_empty_text_encrypts_to_empty() {
        let key = textbook_key();
        assert_eq!(encrypt("", &key), "");
        assert_eq!(decrypt("", &key).unwrap(), "");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    let start_time = Instant::now();

    let result = match cli.command {
        Commands::Encrypt { .. } => handle_encrypt(cli.command).await,
        Commands::Decrypt { .. } => handle_decrypt(cli.command).await,
        Commands::Inspect { .. } => handle_inspect(cli.command).await,
    };

    if let Err(e) = &result {
        error!("Operation failed: {:?}", e);
    }

    info!("Total execution time: {:.2?}", start_time.elapsed());

    result
}
