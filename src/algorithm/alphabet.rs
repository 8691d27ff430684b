use crate::algorithm::mod26::{MODULUS, modulo};

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter used to pad plaintext up to a whole number of blocks.
pub const PAD_LETTER: char = 'X';

/// Zero-based position of an uppercase letter in A-Z. Callers are expected to
/// have run the input through [`sanitize`] first; anything else maps to an
/// out-of-range value.
pub fn letter_to_residue(c: char) -> i64 {
    c as i64 - 'A' as i64
}

/// Maps any integer to a letter, reducing modulo 26 first so negative and
/// oversized inputs wrap canonically.
pub fn residue_to_letter(r: i64) -> char {
    ALPHABET[modulo(r, MODULUS) as usize] as char
}

/// Uppercases the input and drops every character outside A-Z.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
