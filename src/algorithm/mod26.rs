/// Size of the Latin alphabet; every residue lives in Z/26Z.
pub const MODULUS: i64 = 26;

pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Canonical modulo: the result is in [0, m) even for negative `a`.
pub fn modulo(a: i64, m: i64) -> i64 {
    ((a % m) + m) % m
}

/// Smallest x in [1, m) with a*x = 1 (mod m), or `None` if a and m are not
/// coprime. Linear search is fine since m is always 26.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = modulo(a, m);
    (1..m).find(|x| (a * x) % m == 1)
}
