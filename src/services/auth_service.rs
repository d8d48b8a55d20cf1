use crate::entities::identity_entity as identities;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{JwtService, verify_password};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let identity = identities::Entity::find()
            .filter(identities::Column::Email.eq(request.email.trim()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !identity.is_active {
            return Err(AppError::AuthError("Account is disabled".to_string()));
        }

        if !verify_password(&request.password, &identity.password_hash)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        self.issue_tokens(identity.id, &identity.email)
    }

    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;
        let identity_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::AuthError("Invalid refresh token".to_string()))?;

        // 刷新前确认账号仍然存在且未停用
        let identity = identities::Entity::find_by_id(identity_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Account no longer exists".to_string()))?;

        if !identity.is_active {
            return Err(AppError::AuthError("Account is disabled".to_string()));
        }

        self.issue_tokens(identity.id, &identity.email)
    }

    fn issue_tokens(&self, identity_id: i64, email: &str) -> AppResult<AuthResponse> {
        let access_token = self.jwt_service.generate_access_token(identity_id, email)?;
        let refresh_token = self.jwt_service.generate_refresh_token(identity_id, email)?;

        Ok(AuthResponse {
            email: email.to_string(),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}
