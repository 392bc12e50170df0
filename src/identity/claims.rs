use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};

/// Claims carried by a verified identity or access token, accessed by named
/// field rather than dynamic key lookup. Unknown claims are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: String,
    #[serde(default, rename = "cognito:username")]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Group memberships; absent claim decodes as empty.
    #[serde(default, rename = "cognito:groups")]
    pub groups: Vec<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// A token as handed over by the session provider: the compact serialized
/// form plus its decoded claim set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub raw: String,
    pub claims: TokenClaims,
}

impl Token {
    /// Decode the payload segment of a compact JWS. The provider has already
    /// verified the signature; this only reads claims out of it.
    pub fn from_compact(raw: &str) -> GateResult<Token> {
        let mut parts = raw.split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(p), Some(_), None) => p,
            _ => return Err(GateError::claims("bad_claims", "token is not a three-part compact JWS")),
        };
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| GateError::claims("bad_claims".into(), format!("payload is not base64url: {e}")))?;
        let claims: TokenClaims = serde_json::from_slice(&bytes)
            .map_err(|e| GateError::claims("bad_claims".into(), format!("payload is not a claim set: {e}")))?;
        Ok(Token { raw: raw.to_string(), claims })
    }

    /// Build a token directly from an already-decoded claim set.
    pub fn from_claims(claims: TokenClaims) -> Token {
        Token { raw: String::new(), claims }
    }
}
