// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint, RandBigInt, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};
use tracing::trace;

use crate::error::RsaError;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Miller-Rabin rounds used when generating primes. The residual
/// false-positive probability is bounded by 4^-rounds.
pub const DEFAULT_PRIMALITY_ROUNDS: u32 = 5;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm over signed integers.
/// Returns (gcd, x, y) such that a*x + b*y = gcd(a, b).
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (g, x1, y1) = extended_gcd(b, &(a % b));
    let x = y1.clone();
    let y = x1 - (a / b) * y1;

    (g, x, y)
}

/// Compute the multiplicative inverse of `a` modulo `m`, normalized
/// into [0, m). Returns None when gcd(a, m) != 1 and no inverse exists.
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    let a_signed = a.to_bigint()?;
    let m_signed = m.to_bigint()?;

    let (g, x, _) = extended_gcd(&a_signed, &m_signed);
    if !g.is_one() {
        return None;
    }

    (((x % &m_signed) + &m_signed) % &m_signed).to_biguint()
}

/// Miller-Rabin primality test with `rounds` random witnesses.
/// Returns true if n is probably prime; witnesses are drawn from the
/// caller's CSPRNG.
pub fn is_probable_prime<R: Rng + CryptoRng>(n: &RsaBigInt, rounds: u32, rng: &mut R) -> bool {
    if n < &RsaBigInt::from(2u8) {
        return false;
    }
    if n == &RsaBigInt::from(2u8) || n == &RsaBigInt::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let mut d = n - 1u8;
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let two = RsaBigInt::from(2u8);
    let n_minus_one = n - 1u8;
    let n_minus_two = n - 2u8;

    for _ in 0..rounds {
        // Random witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_two);

        let mut x = mod_pow(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut found = false;
        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                found = true;
                break;
            }
        }

        if !found {
            // Composite
            return false;
        }
    }

    // Probably prime
    true
}

/// Generate a random probable prime of exactly `bit_length` bits.
///
/// Each attempt draws a fresh random candidate and forces its top bit
/// (exact bit length) and bottom bit (oddness) before testing. Fails
/// closed if the attempt limit is exhausted, which does not happen
/// under a healthy random source: the expected number of draws grows
/// linearly in `bit_length` while the limit is 64x that.
pub fn random_prime<R: Rng + CryptoRng>(
    bit_length: u32,
    rng: &mut R,
) -> Result<RsaBigInt, RsaError> {
    if bit_length < 2 {
        return Err(RsaError::InvalidBitLength { bits: bit_length });
    }

    let mask = (RsaBigInt::one() << (bit_length - 1)) | RsaBigInt::one();
    let max_attempts = 64 * u64::from(bit_length);

    for attempt in 0..max_attempts {
        let candidate = rng.gen_biguint(u64::from(bit_length)) | &mask;

        if is_probable_prime(&candidate, DEFAULT_PRIMALITY_ROUNDS, rng) {
            trace!(bit_length, attempt, "found probable prime");
            return Ok(candidate);
        }
    }

    Err(RsaError::PrimeGeneration)
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}
