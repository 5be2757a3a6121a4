//! Advisory Claims Decoding
//!
//! Decodes the payload segment of a JWT for display on the dashboard.
//! The signature is NOT verified here; only the backend can vouch for a
//! token. Nothing in this module may be used to gate access.

/// Claims embedded in the session token. All fields are optional; a token
/// from a different issuer may carry none of them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry as a UNIX timestamp in seconds
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued-at as a UNIX timestamp in seconds
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Decode the payload of a `header.payload.signature` token. Returns `None`
/// for anything that is not a three-segment token with a base64url JSON
/// payload; malformed tokens are a display no-op, not an error.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = base64url_decode(payload)?;
    serde_json::from_slice(&bytes).ok()
}

/// Base64url decoding (RFC 4648 §5). Accepts both padded and unpadded
/// input; rejects characters outside the url-safe alphabet.
fn base64url_decode(input: &str) -> Option<Vec<u8>> {
    fn sextet(c: u8) -> Option<u32> {
        match c {
            b'A'..=b'Z' => Some((c - b'A') as u32),
            b'a'..=b'z' => Some((c - b'a' + 26) as u32),
            b'0'..=b'9' => Some((c - b'0' + 52) as u32),
            b'-' => Some(62),
            b'_' => Some(63),
            _ => None,
        }
    }

    let trimmed = input.trim_end_matches('=');
    // A single trailing sextet cannot encode a full byte
    if trimmed.len() % 4 == 1 {
        return None;
    }

    let mut out = Vec::with_capacity(trimmed.len() * 3 / 4);
    let mut buffer = 0u32;
    let mut bits = 0u8;

    for &c in trimmed.as_bytes() {
        let v = sextet(c)?;
        buffer = (buffer << 6) | v;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // {"username":"ada","role":"admin","exp":4102444800,"iat":1754300000}
    const PAYLOAD: &str = "eyJ1c2VybmFtZSI6ImFkYSIsInJvbGUiOiJhZG1pbiIsImV4cCI6NDEwMjQ0NDgwMCwiaWF0IjoxNzU0MzAwMDAwfQ";
    const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

    #[test]
    fn test_base64url_decode() {
        assert_eq!(base64url_decode("aGVsbG8").as_deref(), Some(&b"hello"[..]));
        assert_eq!(base64url_decode("aGVsbG8=").as_deref(), Some(&b"hello"[..]));
        assert!(base64url_decode("not base64!").is_none());
    }

    #[test]
    fn test_decode_full_claims() {
        let token = format!("{}.{}.sig", HEADER, PAYLOAD);
        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.username.as_deref(), Some("ada"));
        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert_eq!(claims.exp, Some(4102444800));
        assert_eq!(claims.iat, Some(1754300000));
    }

    #[test]
    fn test_decode_minimal_claims() {
        // {"username":"kit"} with no role or timestamps
        let token = format!("{}.eyJ1c2VybmFtZSI6ImtpdCJ9.sig", HEADER);
        let claims = decode_claims(&token).expect("claims should decode");
        assert_eq!(claims.username.as_deref(), Some("kit"));
        assert_eq!(claims.role, None);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_malformed_tokens_decode_to_none() {
        assert!(decode_claims("").is_none());
        assert!(decode_claims("only-one-segment").is_none());
        assert!(decode_claims(&format!("{}.{}", HEADER, PAYLOAD)).is_none());
        assert!(decode_claims(&format!("{}.{}.sig.extra", HEADER, PAYLOAD)).is_none());
        assert!(decode_claims("a.!!!not-base64!!!.c").is_none());
        // Valid base64 but not a JSON object
        assert!(decode_claims("a.aGVsbG8.c").is_none());
    }
}
