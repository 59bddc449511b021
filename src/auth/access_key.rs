//! DoorDash developer access keys and JWT minting.
//!
//! The DoorDash Developer Portal issues an access key made of three values:
//! a developer ID, a key ID and a base64url-encoded signing secret. The Drive
//! API does not accept the key directly. Each request carries a short-lived
//! JWT signed with the secret:
//!
//! - Header: `{"alg":"HS256","typ":"JWT","dd-ver":"DD-JWT-V1"}`
//! - Claims: `aud = "doordash"`, `iss = developer_id`, `kid = key_id`,
//!   `iat = now`, `exp = now + 300`
//!
//! # Example
//!
//! ```rust
//! use doordash_drive::auth::AccessKey;
//!
//! let key = AccessKey::from_json(r#"{
//!     "developer_id": "dev-123",
//!     "key_id": "key-456",
//!     "signing_secret": "ZHJpdmUtdGVzdC1zaWduaW5nLXNlY3JldC0wMTIzNDU2Nzg5"
//! }"#).unwrap();
//!
//! let token = key.mint_token().unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```

use std::fmt;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::ConfigError;

type HmacSha256 = Hmac<Sha256>;

/// Audience claim expected by DoorDash.
pub const JWT_AUDIENCE: &str = "doordash";

/// Value of the DoorDash-specific `dd-ver` header.
pub const JWT_VERSION: &str = "DD-JWT-V1";

/// Lifetime of a minted token in seconds.
pub const TOKEN_TTL_SECS: i64 = 300;

/// URL-safe base64 that accepts secrets with or without padding.
const SECRET_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// JWT segments are always unpadded.
const SEGMENT_ENGINE: GeneralPurpose = URL_SAFE_NO_PAD;

#[derive(Serialize)]
struct JwtHeader<'a> {
    alg: &'a str,
    typ: &'a str,
    #[serde(rename = "dd-ver")]
    dd_ver: &'a str,
}

/// Claims carried by a minted DoorDash JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveClaims {
    /// Audience, always `"doordash"`.
    pub aud: String,
    /// Issuer, the developer ID.
    pub iss: String,
    /// Key identifier.
    pub kid: String,
    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,
    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
}

/// A DoorDash developer access key.
///
/// The `Debug` implementation masks the signing secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey {
    developer_id: String,
    key_id: String,
    secret: Vec<u8>,
}

#[derive(Deserialize)]
struct RawAccessKey {
    developer_id: String,
    key_id: String,
    signing_secret: String,
}

impl AccessKey {
    /// Creates a validated access key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccessKey`] if any part is empty or the
    /// signing secret is not valid base64url.
    pub fn new(
        developer_id: impl Into<String>,
        key_id: impl Into<String>,
        signing_secret: &str,
    ) -> Result<Self, ConfigError> {
        let developer_id = developer_id.into();
        let key_id = key_id.into();

        if developer_id.is_empty() {
            return Err(invalid("developer_id is empty"));
        }
        if key_id.is_empty() {
            return Err(invalid("key_id is empty"));
        }
        if signing_secret.is_empty() {
            return Err(invalid("signing_secret is empty"));
        }

        let secret = SECRET_ENGINE
            .decode(signing_secret.trim())
            .map_err(|e| invalid(&format!("signing_secret is not base64url: {e}")))?;

        Ok(Self {
            developer_id,
            key_id,
            secret,
        })
    }

    /// Parses the JSON document downloaded from the Developer Portal.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccessKey`] if the JSON is malformed or
    /// any field fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawAccessKey =
            serde_json::from_str(json).map_err(|e| invalid(&e.to_string()))?;
        Self::new(raw.developer_id, raw.key_id, &raw.signing_secret)
    }

    /// Returns the developer ID.
    #[must_use]
    pub fn developer_id(&self) -> &str {
        &self.developer_id
    }

    /// Returns the key ID.
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Mints a JWT valid for [`TOKEN_TTL_SECS`] from now.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the header or claims fail to encode.
    pub fn mint_token(&self) -> Result<String, serde_json::Error> {
        self.mint_token_at(chrono::Utc::now().timestamp())
    }

    /// Mints a JWT as if issued at `issued_at` (Unix seconds).
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the header or claims fail to encode.
    #[allow(clippy::missing_panics_doc)] // HMAC accepts any key size
    pub fn mint_token_at(&self, issued_at: i64) -> Result<String, serde_json::Error> {
        let header = JwtHeader {
            alg: "HS256",
            typ: "JWT",
            dd_ver: JWT_VERSION,
        };
        let claims = DriveClaims {
            aud: JWT_AUDIENCE.to_string(),
            iss: self.developer_id.clone(),
            kid: self.key_id.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(TOKEN_TTL_SECS),
        };

        let signing_input = format!(
            "{}.{}",
            SEGMENT_ENGINE.encode(serde_json::to_vec(&header)?),
            SEGMENT_ENGINE.encode(serde_json::to_vec(&claims)?)
        );

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = SEGMENT_ENGINE.encode(mac.finalize().into_bytes());

        Ok(format!("{signing_input}.{signature}"))
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKey")
            .field("developer_id", &self.developer_id)
            .field("key_id", &self.key_id)
            .field("signing_secret", &"*****")
            .finish()
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::InvalidAccessKey {
        reason: reason.to_string(),
    }
}
