//! Sealed-box encryption of secret values.
//!
//! GitHub requires `crypto_box_seal` ciphertext: an ephemeral X25519 key
//! agreement against the environment's public key, so the uploader holds no
//! key material and only GitHub can open the box.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use crypto_box::{aead::OsRng, PublicKey};

/// Seal `plaintext` under the base64-encoded public key and re-encode the
/// ciphertext as base64 for the upload body.
pub(crate) fn seal_to_base64(plaintext: &str, public_key_b64: &str) -> Result<String> {
    let key_bytes = general_purpose::STANDARD
        .decode(public_key_b64)
        .context("environment public key is not valid base64")?;

    let key_bytes: [u8; 32] = key_bytes.as_slice().try_into().map_err(|_| {
        anyhow::anyhow!(
            "environment public key must be 32 bytes, got {}",
            key_bytes.len()
        )
    })?;

    let sealed = PublicKey::from(key_bytes)
        .seal(&mut OsRng, plaintext.as_bytes())
        .map_err(|e| anyhow::anyhow!("sealed-box encryption failed: {e}"))?;

    Ok(general_purpose::STANDARD.encode(sealed))
}
