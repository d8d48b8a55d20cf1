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
pub enum TenantPlan {
    #[sea_orm(string_value = "basic_plan")]
    BasicPlan,
    #[sea_orm(string_value = "standard_plan")]
    StandardPlan,
    #[sea_orm(string_value = "premium_plan")]
    PremiumPlan,
    #[sea_orm(string_value = "enterprise_plan")]
    EnterprisePlan,
}

impl std::fmt::Display for TenantPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenantPlan::BasicPlan => write!(f, "basic_plan"),
            TenantPlan::StandardPlan => write!(f, "standard_plan"),
            TenantPlan::PremiumPlan => write!(f, "premium_plan"),
            TenantPlan::EnterprisePlan => write!(f, "enterprise_plan"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    /// 生成格式: "tenant_" + 8 位大写 base36
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub owner_id: i64,
    pub current_plan_id: TenantPlan,
    pub subscription_end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
