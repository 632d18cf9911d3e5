use axum::http::{header, HeaderMap};
use entity::sea_orm_active_enums::Role;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{TokenKind, TokenService},
};

/// Role tiers a route can demand. Checked against the token's role claim only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any admin console role: admin, super_admin, editor, reviewer.
    Admin,
    /// Content editing: admin, super_admin, editor.
    Editor,
    /// Work and comment moderation: admin, super_admin, reviewer.
    Reviewer,
    /// Account and settings management.
    SuperAdmin,
}

impl Permission {
    pub fn allows(self, role: Role) -> bool {
        match self {
            Self::Admin => matches!(
                role,
                Role::Admin | Role::SuperAdmin | Role::Editor | Role::Reviewer
            ),
            Self::Editor => matches!(role, Role::Admin | Role::SuperAdmin | Role::Editor),
            Self::Reviewer => matches!(role, Role::Admin | Role::SuperAdmin | Role::Reviewer),
            Self::SuperAdmin => role == Role::SuperAdmin,
        }
    }
}

/// Identity taken from a validated access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub role: Role,
}

impl AuthUser {
    pub fn has(&self, permission: Permission) -> bool {
        permission.allows(self.role)
    }
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Validates the bearer access token and checks every listed permission.
    ///
    /// An empty slice only requires a valid access token.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Caller identity
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or a refresh token
    /// - `Err(AuthError::AccessDenied)` - Role outside a permission's allow-set
    pub fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = self.tokens.verify(token, TokenKind::Access)?;
        let user = AuthUser {
            id: claims.user_id()?,
            role: claims.role,
        };

        for permission in permissions {
            if !permission.allows(user.role) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("role {:?} lacks {:?} permission", user.role, permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .ok_or(AuthError::MissingToken)?;

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
