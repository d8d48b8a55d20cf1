use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestState::Pending => write!(f, "pending"),
            RequestState::Approved => write!(f, "approved"),
            RequestState::Rejected => write!(f, "rejected"),
        }
    }
}

/// 注册申请所选的套餐（与 tenant 套餐命名不一致，映射见 utils::plans）
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "snake_case")]
pub enum RequestedPlan {
    #[sea_orm(string_value = "basic_plan")]
    BasicPlan,
    #[sea_orm(string_value = "professional_plan")]
    ProfessionalPlan,
    #[sea_orm(string_value = "enterprise_plan")]
    EnterprisePlan,
}

impl std::fmt::Display for RequestedPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestedPlan::BasicPlan => write!(f, "basic_plan"),
            RequestedPlan::ProfessionalPlan => write!(f, "professional_plan"),
            RequestedPlan::EnterprisePlan => write!(f, "enterprise_plan"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "register_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    /// 批准后写入生成的 tenant ID（沿用历史字段名）
    pub generated_token: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
