use crate::entities::gym_entity as gyms;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GymResponse {
    pub id: i64,
    pub tenant_id: String,
    pub owner_id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<gyms::Model> for GymResponse {
    fn from(model: gyms::Model) -> Self {
        Self {
            id: model.id,
            tenant_id: model.tenant_id,
            owner_id: model.owner_id,
            code: model.code,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            city: model.city,
            country: model.country,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GymQuery {
    pub tenant_id: Option<String>,
}
