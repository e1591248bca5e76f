//! Textbook RSA key generation and encrypt/decrypt primitives.
//!
//! This crate implements the mathematical core of RSA from scratch on
//! top of `num-bigint`: Miller-Rabin primality testing, random prime
//! generation, the extended Euclidean algorithm for modular inverses,
//! and raw modular exponentiation over a byte-string codec.
//!
//! It is deliberately *textbook* RSA: no padding, no randomization, no
//! integrity check. Encryption is deterministic and malleable, and the
//! scheme is open to the standard structural attacks on unpadded RSA.
//! That makes it suitable for demonstration and study only; do not use
//! it to protect real data.

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;

pub use bigint::{is_probable_prime, mod_inverse, mod_pow, random_prime};
pub use decrypt::{decrypt, decrypt_bytes, decrypt_to_string};
pub use encrypt::{encrypt, encrypt_bytes, encrypt_string};
pub use error::RsaError;
pub use keygen::{generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
