//! JWT issuance and validation.
//!
//! Access and refresh tokens are HS256 JWTs sharing one secret. The `typ`
//! claim keeps a refresh token from being accepted where an access token is
//! expected and vice versa.

use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

pub const TOKEN_TYPE_BEARER: &str = "Bearer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a decimal string.
    pub sub: String,
    pub role: Role,
    pub typ: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("non-numeric subject '{}'", self.sub)))
    }
}

/// Freshly minted access/refresh pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl_secs
    }

    /// Signs an access and a refresh token for the user.
    pub fn issue_pair(&self, user_id: i32, role: Role) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue(user_id, role, TokenKind::Access)?,
            refresh_token: self.issue(user_id, role, TokenKind::Refresh)?,
            expires_in: self.access_ttl_secs,
        })
    }

    pub fn issue(&self, user_id: i32, role: Role, kind: TokenKind) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let ttl = match kind {
            TokenKind::Access => self.access_ttl_secs,
            TokenKind::Refresh => self.refresh_ttl_secs,
        };

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            typ: kind,
            iat: now,
            exp: now + ttl,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Decodes a token and checks signature, expiry and that `typ` matches `expected`.
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.typ != expected {
            return Err(AuthError::InvalidToken(format!(
                "expected {:?} token, got {:?}",
                expected, data.claims.typ
            )));
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 7200, 604800)
    }

    /// Tests an issued access token verifies with its subject and role intact.
    ///
    /// Expected: Ok(Claims) with sub "42", role Editor, typ Access
    #[test]
    fn round_trips_access_token() {
        let tokens = service();
        let pair = tokens.issue_pair(42, Role::Editor).unwrap();

        let claims = tokens.verify(&pair.access_token, TokenKind::Access).unwrap();

        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.role, Role::Editor);
        assert_eq!(claims.typ, TokenKind::Access);
        assert_eq!(claims.exp - claims.iat, 7200);
        assert_eq!(pair.expires_in, 7200);
    }

    /// Tests token kinds are not interchangeable.
    ///
    /// Expected: Err(InvalidToken) in both directions
    #[test]
    fn rejects_wrong_token_kind() {
        let tokens = service();
        let pair = tokens.issue_pair(1, Role::Member).unwrap();

        assert!(tokens.verify(&pair.refresh_token, TokenKind::Access).is_err());
        assert!(tokens.verify(&pair.access_token, TokenKind::Refresh).is_err());
        assert!(tokens.verify(&pair.refresh_token, TokenKind::Refresh).is_ok());
    }

    /// Tests expired tokens are rejected with zero leeway.
    ///
    /// Expected: Err(InvalidToken)
    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("test-secret", -10, -10);
        let token = tokens.issue(1, Role::Member, TokenKind::Access).unwrap();

        let result = tokens.verify(&token, TokenKind::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    /// Tests tokens signed with another secret are rejected.
    ///
    /// Expected: Err(InvalidToken)
    #[test]
    fn rejects_foreign_signature() {
        let other = TokenService::new("other-secret", 7200, 604800);
        let token = other.issue(1, Role::Admin, TokenKind::Access).unwrap();

        assert!(service().verify(&token, TokenKind::Access).is_err());
        assert!(service().verify("not-a-jwt", TokenKind::Access).is_err());
    }
}
