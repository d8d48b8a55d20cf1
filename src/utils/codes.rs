use crate::entities::{gym_entity as gyms, tenant_entity as tenants};
use crate::error::AppResult;
use rand::Rng;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect()
}

/// 生成 tenant ID: "tenant_" + 8 位大写 base36
pub fn generate_tenant_id() -> String {
    format!("tenant_{}", random_code(8))
}

/// 生成 gym code: "GYM" + 6 位大写 base36
pub fn generate_gym_code() -> String {
    format!("GYM{}", random_code(6))
}

/// 生成不与现有记录冲突的 tenant ID
pub async fn generate_unique_tenant_id<C: ConnectionTrait>(db: &C) -> AppResult<String> {
    loop {
        let tenant_id = generate_tenant_id();

        let exists = tenants::Entity::find()
            .filter(tenants::Column::Id.eq(tenant_id.clone()))
            .count(db)
            .await?;

        if exists == 0 {
            return Ok(tenant_id);
        }
    }
}

/// 生成不与现有记录冲突的 gym code
pub async fn generate_unique_gym_code<C: ConnectionTrait>(db: &C) -> AppResult<String> {
    loop {
        let code = generate_gym_code();

        let exists = gyms::Entity::find()
            .filter(gyms::Column::Code.eq(code.clone()))
            .count(db)
            .await?;

        if exists == 0 {
            return Ok(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tenant_id_format() {
        let id = generate_tenant_id();
        assert!(id.starts_with("tenant_"));

        let suffix = &id["tenant_".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generate_gym_code_format() {
        let code = generate_gym_code();
        assert!(code.starts_with("GYM"));

        let suffix = &code[3..];
        assert_eq!(suffix.len(), 6);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }
}
