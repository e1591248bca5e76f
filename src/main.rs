use anyhow::Result;

use rsa_core::{decrypt_to_string, encrypt_string, generate_keypair};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut rng = rand::thread_rng();

    let bits = 512;
    let keypair = generate_keypair(bits, &mut rng)?;
    println!(
        "generated {} bit key pair (modulus: {} bits, e = {})",
        bits,
        keypair.public_key.bit_length(),
        keypair.public_key.e
    );

    let message = "Hello, textbook RSA!";
    let ciphertext = encrypt_string(message, &keypair.public_key)?;
    println!("ciphertext: {}", hex::encode(ciphertext.to_bytes_be()));

    let recovered = decrypt_to_string(&ciphertext, &keypair.private_key)?;
    println!("recovered:  {}", recovered);

    Ok(())
}
