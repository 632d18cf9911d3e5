//! Registration, login and token refresh.

use entity::sea_orm_active_enums::{Role, UserStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{normalize_email, CreateUserParam, RegisterParam, User},
    service::{
        password::{hash_password, verify_password},
        token::{TokenKind, TokenPair, TokenService},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
        }
    }

    /// Creates a member account.
    ///
    /// The email is trimmed and lowercased before the uniqueness check.
    ///
    /// # Returns
    /// - `Ok(User)` - New active member
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let email = normalize_email(&param.email);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;

        user_repo
            .create(CreateUserParam {
                name: param.name.trim().to_string(),
                email,
                password_hash,
                role: Role::Member,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::BadRequest("Email already exists".to_string())
                } else {
                    e.into()
                }
            })
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// Banned accounts are rejected only after the password matches so the
    /// response does not reveal which emails exist.
    ///
    /// # Returns
    /// - `Ok((User, TokenPair))` - Authenticated user and fresh tokens
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountBanned)` - Account status is `banned`
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, TokenPair), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&normalize_email(email)).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status == UserStatus::Banned {
            return Err(AuthError::AccountBanned(user.id).into());
        }

        user_repo.touch_last_login(user.id).await?;
        let tokens = self.tokens.issue_pair(user.id, user.role)?;

        tracing::info!("User {} logged in", user.id);

        Ok((user, tokens))
    }

    /// Mints a new access token from a valid refresh token.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.tokens.verify(refresh_token, TokenKind::Refresh)?;
        let user_id = claims.user_id()?;

        self.tokens.issue(user_id, claims.role, TokenKind::Access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::user::UserFactory};

    const COST: u32 = 4;

    fn tokens() -> TokenService {
        TokenService::new("auth-secret", 7200, 604800)
    }

    fn register_param(email: &str) -> RegisterParam {
        RegisterParam {
            name: "Lin Wei".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
        }
    }

    /// Tests registration normalizes the email and creates an active member.
    ///
    /// Expected: Ok(User) with lowercase email, role Member, status Active
    #[tokio::test]
    async fn registers_member_with_normalized_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();

        let user = AuthService::new(db, &tokens, COST)
            .register(register_param("  Lin.Wei@Example.COM "))
            .await?;

        assert_eq!(user.email, "lin.wei@example.com");
        assert_eq!(user.role, Role::Member);
        assert_eq!(user.status, UserStatus::Active);
        assert_ne!(user.password_hash, "secret123");

        Ok(())
    }

    /// Tests a second registration with the same email in different case fails.
    ///
    /// Expected: Err(AppError::BadRequest("Email already exists"))
    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens, COST);

        service.register(register_param("poet@example.com")).await?;
        let result = service.register(register_param("POET@example.com")).await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Email already exists"),
            other => panic!("expected BadRequest, got {:?}", other.map(|u| u.id)),
        }

        Ok(())
    }

    /// Tests login issues tokens and records the login time.
    ///
    /// Expected: Ok with a verifiable access token and last_login_at set
    #[tokio::test]
    async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens, COST);

        let registered = service.register(register_param("reader@example.com")).await?;
        let (user, pair) = service.login("Reader@example.com", "secret123").await?;

        assert_eq!(user.id, registered.id);
        let claims = tokens.verify(&pair.access_token, TokenKind::Access)?;
        assert_eq!(claims.user_id()?, registered.id);

        let stored = UserRepository::new(db).find_by_id(registered.id).await?.unwrap();
        assert!(stored.last_login_at.is_some());

        Ok(())
    }

    /// Tests wrong passwords and unknown emails both yield invalid credentials.
    ///
    /// Expected: Err(AuthError::InvalidCredentials) for both
    #[tokio::test]
    async fn rejects_bad_credentials() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens, COST);

        service.register(register_param("reader@example.com")).await?;

        let wrong_password = service.login("reader@example.com", "nope").await;
        let unknown_email = service.login("ghost@example.com", "secret123").await;

        assert!(matches!(
            wrong_password,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
        assert!(matches!(
            unknown_email,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    /// Tests banned users cannot log in even with the right password.
    ///
    /// Expected: Err(AuthError::AccountBanned)
    #[tokio::test]
    async fn rejects_banned_user() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();

        let hash = bcrypt::hash("secret123", COST)?;
        UserFactory::new(db)
            .email("banned@example.com")
            .password_hash(hash)
            .status(UserStatus::Banned)
            .build()
            .await?;

        let result = AuthService::new(db, &tokens, COST)
            .login("banned@example.com", "secret123")
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccountBanned(_)))
        ));

        Ok(())
    }

    /// Tests refresh accepts only refresh tokens and keeps subject and role.
    ///
    /// Expected: new access token for the same user; access token input rejected
    #[tokio::test]
    async fn refreshes_only_with_refresh_token() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens, COST);
        let pair = tokens.issue_pair(9, Role::Reviewer)?;

        let access = service.refresh(&pair.refresh_token)?;
        let claims = tokens.verify(&access, TokenKind::Access)?;

        assert_eq!(claims.user_id()?, 9);
        assert_eq!(claims.role, Role::Reviewer);
        assert!(matches!(
            service.refresh(&pair.access_token),
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));

        Ok(())
    }
}
