use crate::entities::gym_entity as gyms;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

#[derive(Clone)]
pub struct GymService {
    pool: DatabaseConnection,
}

impl GymService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_gyms(&self, query: GymQuery) -> AppResult<Vec<GymResponse>> {
        let mut finder = gyms::Entity::find();
        if let Some(tenant_id) = query.tenant_id {
            finder = finder.filter(gyms::Column::TenantId.eq(tenant_id));
        }

        let models = finder
            .order_by_desc(gyms::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        Ok(models.into_iter().map(GymResponse::from).collect())
    }

    pub async fn get_gym(&self, gym_id: i64) -> AppResult<GymResponse> {
        let model = gyms::Entity::find_by_id(gym_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Gym {gym_id} not found")))?;

        Ok(GymResponse::from(model))
    }
}
