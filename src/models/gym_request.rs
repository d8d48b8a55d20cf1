use crate::entities::{RequestState, RequestedPlan, gym_request_entity as gym_requests};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateGymRequestRequest {
    #[schema(example = "Iron Gym")]
    pub gym_name: String,
    pub gym_phone: String,
    pub gym_address: String,
    pub company_name: String,
    pub admin_name: String,
    pub admin_surname1: String,
    pub admin_surname2: String,
    pub admin_phone: String,
    #[schema(example = "owner@iron.gym")]
    pub email: String,
    pub requested_plan: RequestedPlan,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GymRequestResponse {
    pub id: i64,
    pub gym_name: String,
    pub gym_phone: String,
    pub gym_address: String,
    pub company_name: String,
    pub admin_name: String,
    pub admin_surname1: String,
    pub admin_surname2: String,
    pub admin_phone: String,
    pub email: String,
    pub requested_plan: RequestedPlan,
    pub state: RequestState,
    pub date: DateTime<Utc>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub generated_token: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<gym_requests::Model> for GymRequestResponse {
    fn from(model: gym_requests::Model) -> Self {
        Self {
            id: model.id,
            gym_name: model.gym_name,
            gym_phone: model.gym_phone,
            gym_address: model.gym_address,
            company_name: model.company_name,
            admin_name: model.admin_name,
            admin_surname1: model.admin_surname1,
            admin_surname2: model.admin_surname2,
            admin_phone: model.admin_phone,
            email: model.email,
            requested_plan: model.requested_plan,
            state: model.state,
            date: model.date,
            reviewed_by: model.reviewed_by,
            reviewed_at: model.reviewed_at,
            rejection_reason: model.rejection_reason,
            generated_token: model.generated_token,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GymRequestQuery {
    pub state: Option<RequestState>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApproveRequestRequest {
    #[schema(example = "admin@iron.gym")]
    pub admin_email: String,
    #[schema(example = "secret1")]
    pub admin_password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApproveRequestResponse {
    pub tenant_id: String,
    pub gym_id: i64,
    pub user_id: i64,
    pub gym_code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RejectRequestRequest {
    pub rejection_reason: String,
}
