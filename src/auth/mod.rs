//! Authentication types for the DoorDash Drive SDK.
//!
//! Every request carries `Authorization: Bearer <token>`. The token comes
//! from one of two [`Credentials`]:
//!
//! - [`Credentials::Token`]: an opaque bearer token supplied by the caller
//! - [`Credentials::AccessKey`]: a developer [`AccessKey`] that mints a fresh
//!   DoorDash JWT for each request
//!
//! # Example
//!
//! ```rust
//! use doordash_drive::auth::Credentials;
//! use doordash_drive::ApiToken;
//!
//! let credentials = Credentials::Token(ApiToken::new("my-token").unwrap());
//! assert_eq!(credentials.bearer_token().unwrap(), "my-token");
//! ```

mod access_key;

pub use access_key::{AccessKey, DriveClaims, JWT_AUDIENCE, JWT_VERSION, TOKEN_TTL_SECS};

use crate::config::ApiToken;

/// The credential used to produce the bearer token for each request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// A pre-issued bearer token, sent verbatim.
    Token(ApiToken),
    /// A developer access key; a new JWT is minted for every request.
    AccessKey(AccessKey),
}

impl Credentials {
    /// Returns the bearer token to send with the next request.
    ///
    /// Minting reads the clock and never mutates the credentials, so the
    /// same value can be shared by concurrent requests.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if a JWT cannot be encoded.
    pub fn bearer_token(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Token(token) => Ok(token.as_ref().to_string()),
            Self::AccessKey(key) => key.mint_token(),
        }
    }
}

impl From<ApiToken> for Credentials {
    fn from(token: ApiToken) -> Self {
        Self::Token(token)
    }
}

impl From<AccessKey> for Credentials {
    fn from(key: AccessKey) -> Self {
        Self::AccessKey(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_credentials_are_sent_verbatim() {
        let credentials: Credentials = ApiToken::new("abc.def").unwrap().into();
        assert_eq!(credentials.bearer_token().unwrap(), "abc.def");
    }

    #[test]
    fn test_access_key_credentials_mint_jwt() {
        let key = AccessKey::new(
            "dev-1",
            "key-1",
            "ZHJpdmUtdGVzdC1zaWduaW5nLXNlY3JldC0wMTIzNDU2Nzg5",
        )
        .unwrap();
        let credentials: Credentials = key.into();
        let token = credentials.bearer_token().unwrap();
        assert_eq!(token.split('.').count(), 3);
    }
}
