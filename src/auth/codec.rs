//! Authenticated, encrypted session tokens.
//!
//! Token layout: `base64url(nonce || ciphertext) "." base64url(hmac)`.
//! The ciphertext is ChaCha20-Poly1305 over `{"name": ...}` with the cookie
//! name as associated data. The HMAC-SHA256 tag covers
//! `<cookie name> "|" <first segment>` and is checked before decryption.

use base64ct::{Base64UrlUnpadded, Encoding};
use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, KeyInit, Payload},
};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNING_KEY_LEN: usize = 64;
pub const ENCRYPTION_KEY_LEN: usize = 32;
/// Browsers cap a single cookie at roughly 4 KiB.
pub const MAX_TOKEN_LEN: usize = 4096;
const NONCE_LEN: usize = 12;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to draw random bytes")]
    Random(#[from] rand::Error),
    #[error("session token is empty")]
    Empty,
    #[error("session token is too long")]
    TooLong,
    #[error("invalid session token format")]
    Format,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid session signature")]
    Signature,
    #[error("failed to encrypt session")]
    Encrypt,
    #[error("failed to decrypt session")]
    Decrypt,
    #[error("invalid session payload")]
    Payload(#[from] serde_json::Error),
}

/// Signing and encryption keys for one process lifetime.
#[derive(Clone)]
pub struct SessionKeys {
    signing: [u8; SIGNING_KEY_LEN],
    encryption: [u8; ENCRYPTION_KEY_LEN],
}

impl SessionKeys {
    /// Draw fresh keys from the OS RNG.
    ///
    /// # Errors
    /// Returns [`SessionError::Random`] if the RNG fails.
    pub fn generate() -> Result<Self, SessionError> {
        let mut signing = [0u8; SIGNING_KEY_LEN];
        let mut encryption = [0u8; ENCRYPTION_KEY_LEN];
        OsRng.try_fill_bytes(&mut signing)?;
        OsRng.try_fill_bytes(&mut encryption)?;
        Ok(Self {
            signing,
            encryption,
        })
    }

    #[must_use]
    pub fn from_bytes(signing: [u8; SIGNING_KEY_LEN], encryption: [u8; ENCRYPTION_KEY_LEN]) -> Self {
        Self {
            signing,
            encryption,
        }
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("signing", &"***")
            .field("encryption", &"***")
            .finish()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionClaims {
    name: String,
}

/// Encodes and decodes session tokens bound to a cookie name.
#[derive(Clone, Debug)]
pub struct SessionCodec {
    cookie_name: String,
    keys: SessionKeys,
}

impl SessionCodec {
    #[must_use]
    pub fn new(cookie_name: impl Into<String>, keys: SessionKeys) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            keys,
        }
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Mint a token embedding `{"name": name}`.
    ///
    /// # Errors
    /// Returns an error if encryption fails or the token would not fit in a cookie.
    pub fn encode(&self, name: &str) -> Result<String, SessionError> {
        let claims = serde_json::to_vec(&SessionClaims {
            name: name.to_string(),
        })?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.try_fill_bytes(&mut nonce_bytes)?;

        let cipher = ChaCha20Poly1305::new(Key::from_slice(&self.keys.encryption));
        let ciphertext = cipher
            .encrypt(
                Nonce::from_slice(&nonce_bytes),
                Payload {
                    msg: &claims,
                    aad: self.cookie_name.as_bytes(),
                },
            )
            .map_err(|_| SessionError::Encrypt)?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);
        let body = Base64UrlUnpadded::encode_string(&sealed);

        let tag = self.mac(&body)?.finalize().into_bytes();
        let token = format!("{body}.{}", Base64UrlUnpadded::encode_string(&tag));

        if token.len() > MAX_TOKEN_LEN {
            return Err(SessionError::TooLong);
        }

        Ok(token)
    }

    /// Verify and open a token, reporting why it was rejected.
    ///
    /// # Errors
    /// Returns a [`SessionError`] describing the first check that failed.
    pub fn try_decode(&self, token: &str) -> Result<String, SessionError> {
        if token.is_empty() {
            return Err(SessionError::Empty);
        }
        if token.len() > MAX_TOKEN_LEN {
            return Err(SessionError::TooLong);
        }

        let (body, tag) = token.split_once('.').ok_or(SessionError::Format)?;
        if body.is_empty() || tag.is_empty() || tag.contains('.') {
            return Err(SessionError::Format);
        }

        let tag = Base64UrlUnpadded::decode_vec(tag).map_err(|_| SessionError::Base64)?;
        self.mac(body)?
            .verify_slice(&tag)
            .map_err(|_| SessionError::Signature)?;

        let sealed = Base64UrlUnpadded::decode_vec(body).map_err(|_| SessionError::Base64)?;
        if sealed.len() <= NONCE_LEN {
            return Err(SessionError::Format);
        }
        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);

        let cipher = ChaCha20Poly1305::new(Key::from_slice(&self.keys.encryption));
        let claims = cipher
            .decrypt(
                Nonce::from_slice(nonce_bytes),
                Payload {
                    msg: ciphertext,
                    aad: self.cookie_name.as_bytes(),
                },
            )
            .map_err(|_| SessionError::Decrypt)?;

        let claims: SessionClaims = serde_json::from_slice(&claims)?;
        Ok(claims.name)
    }

    /// Embedded name, or an empty string for any token that does not verify.
    #[must_use]
    pub fn decode(&self, token: &str) -> String {
        self.try_decode(token).unwrap_or_default()
    }

    fn mac(&self, body: &str) -> Result<HmacSha256, SessionError> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.keys.signing)
            .map_err(|_| SessionError::Signature)?;
        mac.update(self.cookie_name.as_bytes());
        mac.update(b"|");
        mac.update(body.as_bytes());
        Ok(mac)
    }
}
