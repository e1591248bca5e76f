// RSA Encryption
// Raw modular exponentiation under the public exponent, no padding

use crate::bigint::{mod_pow, RsaBigInt};
use crate::codec;
use crate::error::RsaError;
use crate::keygen::RsaPublicKey;

/// Encrypt a message integer: c = m^e mod n.
///
/// The message must be strictly below the modulus; anything larger
/// would survive the modular reduction as a different residue and no
/// longer correspond to a unique plaintext.
pub fn encrypt(message: &RsaBigInt, public_key: &RsaPublicKey) -> Result<RsaBigInt, RsaError> {
    if message >= &public_key.n {
        return Err(RsaError::MessageTooLong {
            encoded_bits: message.bits(),
            modulus_bits: public_key.n.bits(),
        });
    }

    Ok(mod_pow(message, &public_key.e, &public_key.n))
}

/// Encode a byte message and encrypt it in a single modular block.
pub fn encrypt_bytes(plaintext: &[u8], public_key: &RsaPublicKey) -> Result<RsaBigInt, RsaError> {
    let m = codec::encode(plaintext)?;
    encrypt(&m, public_key)
}

/// Encrypt a string message.
pub fn encrypt_string(plaintext: &str, public_key: &RsaPublicKey) -> Result<RsaBigInt, RsaError> {
    encrypt_bytes(plaintext.as_bytes(), public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::generate_keypair;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn test_rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let mut rng = test_rng();
        let keypair = generate_keypair(128, &mut rng).unwrap();

        let first = encrypt_bytes(b"Hello", &keypair.public_key).unwrap();
        let second = encrypt_bytes(b"Hello", &keypair.public_key).unwrap();

        // Unpadded RSA is deterministic
        assert_eq!(first, second);
    }

    #[test]
    fn test_encrypt_rejects_oversized_message() {
        let mut rng = test_rng();
        let keypair = generate_keypair(64, &mut rng).unwrap();

        // 16 bytes encode to far more than 64 bits
        let result = encrypt_bytes(b"0123456789abcdef", &keypair.public_key);
        assert!(matches!(result, Err(RsaError::MessageTooLong { .. })));
    }

    #[test]
    fn test_encrypt_rejects_empty_message() {
        let mut rng = test_rng();
        let keypair = generate_keypair(64, &mut rng).unwrap();

        let result = encrypt_bytes(b"", &keypair.public_key);
        assert!(matches!(result, Err(RsaError::EmptyMessage)));
    }

    #[test]
    fn test_ciphertext_is_below_modulus() {
        let mut rng = test_rng();
        let keypair = generate_keypair(128, &mut rng).unwrap();

        let ciphertext = encrypt_string("Hi", &keypair.public_key).unwrap();
        assert!(ciphertext < keypair.public_key.n);
    }
}
