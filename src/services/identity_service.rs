use crate::entities::identity_entity as identities;
use crate::error::{AppError, AppResult};
use crate::utils::{hash_password, validate_email, validate_password};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct IdentityService {
    pool: DatabaseConnection,
}

impl IdentityService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建认证账号。邮箱重复或口令不合规时拒绝，不写任何记录。
    pub async fn create_identity(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<identities::Model> {
        validate_email(email)?;
        validate_password(password)?;

        let existing = identities::Entity::find()
            .filter(identities::Column::Email.eq(email))
            .one(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(AppError::IdentityError(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(password)?;

        let identity = identities::ActiveModel {
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            is_active: Set(true),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Identity created: {} ({})", identity.id, identity.email);
        Ok(identity)
    }
}
