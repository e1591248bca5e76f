// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use num_traits::One;
use rand::{CryptoRng, Rng};
use tracing::debug;

use crate::bigint::{self, RsaBigInt};
use crate::error::RsaError;

/// Default starting point for the public exponent search.
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key. Holds only the modulus and the private exponent;
/// it must stay within the owning process.
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub bit_length: u32,
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message using this public key.
    /// Returns the ciphertext as a single integer below the modulus.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<RsaBigInt, RsaError> {
        crate::encrypt::encrypt_bytes(plaintext, self)
    }
}

impl RsaPrivateKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext integer using this private key.
    /// Returns the plaintext as bytes.
    pub fn decrypt(&self, ciphertext: &RsaBigInt) -> Result<Vec<u8>, RsaError> {
        crate::decrypt::decrypt_bytes(ciphertext, self)
    }
}

impl RsaKeyPair {
    /// Get the requested bit length of the key
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }
}

/// Generate an RSA key pair with the specified modulus bit length.
///
/// `bit_length` must be even (the two primes split it in half) and at
/// least 16. The two primes are drawn independently from the caller's
/// CSPRNG; an equal pair would make the modulus a perfect square and
/// trivially factorable, so `q` is redrawn until it differs from `p`.
pub fn generate_keypair<R: Rng + CryptoRng>(
    bit_length: u32,
    rng: &mut R,
) -> Result<RsaKeyPair, RsaError> {
    if bit_length < 16 || bit_length % 2 != 0 {
        return Err(RsaError::InvalidBitLength { bits: bit_length });
    }

    let half_bits = bit_length / 2;

    let p = bigint::random_prime(half_bits, rng)?;
    let mut q = bigint::random_prime(half_bits, rng)?;
    while q == p {
        q = bigint::random_prime(half_bits, rng)?;
    }

    debug!(bit_length, p_bits = p.bits(), q_bits = q.bits(), "generated prime pair");

    keypair_from_primes(&p, &q, bit_length)
}

/// Assemble a key pair from two distinct primes.
///
/// The public exponent starts at 65537 and steps by 2 (staying odd)
/// until it is coprime with φ(n), so a failed inverse is recovered by
/// moving to the next candidate exponent rather than surfaced.
fn keypair_from_primes(
    p: &RsaBigInt,
    q: &RsaBigInt,
    bit_length: u32,
) -> Result<RsaKeyPair, RsaError> {
    // n = p * q, φ(n) = (p-1)(q-1)
    let n = p * q;
    let phi_n = (p - 1u8) * (q - 1u8);

    let mut e = RsaBigInt::from(DEFAULT_PUBLIC_EXPONENT);
    while !bigint::gcd(&e, &phi_n).is_one() {
        e += 2u8;
    }

    // d = e^(-1) mod φ(n); the gcd loop above guarantees an inverse
    let d = bigint::mod_inverse(&e, &phi_n).ok_or(RsaError::KeyGeneration)?;

    debug!(e = %e, "selected public exponent");

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { n: n.clone(), e },
        private_key: RsaPrivateKey { n, d },
        bit_length,
    })
}
