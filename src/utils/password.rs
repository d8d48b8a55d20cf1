use crate::error::{AppError, AppResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// 管理员初始密码策略（与审批表单一致：6-100 字符）
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < 6 || password.len() > 100 {
        return Err(AppError::ValidationError(
            "Password must be between 6 and 100 characters".to_string(),
        ));
    }

    Ok(())
}

pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {e}")))
}
