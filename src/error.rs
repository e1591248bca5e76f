// Error types for key generation and the encrypt/decrypt pipeline

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors surfaced by key generation, the message codec and the
/// encrypt/decrypt operations.
#[derive(Debug, Error)]
pub enum RsaError {
    /// Requested key or prime size is unusable (too small, or odd at
    /// key generation time where the two primes must split it evenly).
    #[error("invalid bit length {bits}")]
    InvalidBitLength { bits: u32 },

    /// The message codec rejects zero-length input: the integer 0 does
    /// not decode back to an empty byte string.
    #[error("message is empty")]
    EmptyMessage,

    /// The encoded message integer is not below the modulus, so the
    /// modular reduction would lose information.
    #[error("message encodes to {encoded_bits} bits but the modulus has {modulus_bits}")]
    MessageTooLong { encoded_bits: u64, modulus_bits: u64 },

    /// The ciphertext integer is not below the modulus; it cannot have
    /// been produced by encryption under this key.
    #[error("ciphertext is not below the modulus")]
    CiphertextOutOfRange,

    /// No probable prime was found within the attempt limit.
    #[error("prime generation exhausted its attempt limit")]
    PrimeGeneration,

    /// The private exponent could not be computed.
    #[error("failed to compute the private exponent")]
    KeyGeneration,

    /// Decrypted bytes are not valid UTF-8. With an unpadded scheme
    /// this is indistinguishable from a wrong key or a corrupted
    /// ciphertext.
    #[error("decrypted bytes are not valid UTF-8")]
    Codec(#[from] FromUtf8Error),
}
