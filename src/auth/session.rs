//! Session Store
//!
//! Owns the bearer token persisted in browser local storage. All storage
//! access goes through this module; the rest of the app carries an explicit
//! [`Session`] value instead of reading storage at call sites.

use crate::auth::claims::{self, TokenClaims};

/// Local storage key for the bearer token
pub const TOKEN_KEY: &str = "backoffice_access_token";

/// Minimum length a login token must have before it is accepted
pub const MIN_TOKEN_LEN: usize = 10;

/// An authenticated session backed by a bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Read the stored token, if any. Returns `None` outside a browser
    /// context or when no token has been saved.
    pub fn load() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        Some(Self { token })
    }

    /// Write the token to local storage.
    pub fn persist(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, &self.token);
            }
        }
    }

    /// Remove the stored token (logout or session expiry).
    pub fn clear() {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Authorization` header value for API requests.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Decode embedded claims for display. Advisory only: the signature is
    /// never verified and no authorization decision may consult this.
    pub fn claims(&self) -> Option<TokenClaims> {
        claims::decode_claims(&self.token)
    }
}

/// Presence-and-length gate applied to tokens returned by the login
/// endpoint. Not a validity check; the backend remains the authority.
pub fn token_is_plausible(token: &str) -> bool {
    token.len() >= MIN_TOKEN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_token_rejected() {
        assert!(!token_is_plausible(""));
        assert!(!token_is_plausible("xyz"));
        assert!(!token_is_plausible("123456789"));
    }

    #[test]
    fn test_minimum_length_token_accepted() {
        assert!(token_is_plausible("1234567890"));
        assert!(token_is_plausible("eyJhbGciOiJIUzI1NiJ9.e30.sig"));
    }

    #[test]
    fn test_bearer_header_value() {
        let session = Session::new("abcdef123456".to_string());
        assert_eq!(session.bearer(), "Bearer abcdef123456");
    }
}
