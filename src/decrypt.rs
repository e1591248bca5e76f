// RSA Decryption
// Raw modular exponentiation under the private exponent

use crate::bigint::{mod_pow, RsaBigInt};
use crate::codec;
use crate::error::RsaError;
use crate::keygen::RsaPrivateKey;

/// Decrypt a ciphertext integer: m = c^d mod n.
///
/// The ciphertext must be strictly below the modulus; a larger value
/// cannot have been produced by encryption under this key.
pub fn decrypt(ciphertext: &RsaBigInt, private_key: &RsaPrivateKey) -> Result<RsaBigInt, RsaError> {
    if ciphertext >= &private_key.n {
        return Err(RsaError::CiphertextOutOfRange);
    }

    Ok(mod_pow(ciphertext, &private_key.d, &private_key.n))
}

/// Decrypt a ciphertext integer and decode the plaintext bytes.
pub fn decrypt_bytes(
    ciphertext: &RsaBigInt,
    private_key: &RsaPrivateKey,
) -> Result<Vec<u8>, RsaError> {
    let m = decrypt(ciphertext, private_key)?;
    Ok(codec::decode(&m))
}

/// Decrypt a ciphertext integer to a UTF-8 string.
///
/// A UTF-8 failure here means a corrupted ciphertext, the wrong key, or
/// a message that never fit one modular block; without padding or an
/// integrity check the three are indistinguishable, and most bit-flips
/// decrypt "successfully" to garbage instead of failing.
pub fn decrypt_to_string(
    ciphertext: &RsaBigInt,
    private_key: &RsaPrivateKey,
) -> Result<String, RsaError> {
    let m = decrypt(ciphertext, private_key)?;
    codec::decode_utf8(&m)
}
