// src/services/auth.rs

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User, UserRole},
};

const TOKEN_TTL_DAYS: i64 = 7;

// A sessão é um objeto explícito: o `jti` do token identifica a sessão e
// o logout a encerra revogando exatamente esse id. Nada de estado de
// autenticação ambiente espalhado pela aplicação.
#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    pool: PgPool,
    revoked_sessions: Arc<RwLock<HashSet<Uuid>>>,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, pool: PgPool) -> Self {
        Self {
            user_repo,
            jwt_secret,
            pool,
            revoked_sessions: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        role: Option<UserRole>,
    ) -> Result<String, AppError> {
        // Hashing fora do executor async, que é trabalho de CPU
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let mut tx = self.pool.begin().await?;

        // E-mail é único; verificamos antes para devolver um 409 amigável
        if self.user_repo.find_by_email(&mut *tx, email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        let new_user = self
            .user_repo
            .create_user(
                &mut *tx,
                email,
                &hashed_password,
                display_name,
                role.unwrap_or(UserRole::Barber),
            )
            .await?;

        tx.commit().await?;

        self.generate_token(&new_user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(&self.pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let hash_clone = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify(&password_clone, &hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação: {}", e))??;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        self.generate_token(&user)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.decode_claims(token)?;

        if self.is_revoked(claims.jti)? {
            return Err(AppError::InvalidToken);
        }

        self.user_repo
            .find_by_id(&self.pool, claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }

    // Teardown explícito da sessão: a partir daqui o token não vale mais,
    // mesmo antes de expirar.
    pub fn logout(&self, token: &str) -> Result<(), AppError> {
        let claims = self.decode_claims(token)?;

        self.revoked_sessions
            .write()
            .map_err(|_| anyhow::anyhow!("lock de sessões envenenado"))?
            .insert(claims.jti);

        Ok(())
    }

    fn is_revoked(&self, jti: Uuid) -> Result<bool, AppError> {
        let revoked = self
            .revoked_sessions
            .read()
            .map_err(|_| anyhow::anyhow!("lock de sessões envenenado"))?;

        Ok(revoked.contains(&jti))
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }

    fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let expiration = Utc::now() + Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: user.id,
            jti: Uuid::new_v4(),
            role: user.role,
            exp: expiration.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?;

        Ok(token)
    }
}
