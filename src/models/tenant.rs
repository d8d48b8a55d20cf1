use crate::entities::{
    RequestedPlan, SubscriptionStatus, TenantPlan, tenant_entity as tenants,
    tenant_subscription_entity as tenant_subscriptions,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TenantResponse {
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

impl From<tenants::Model> for TenantResponse {
    fn from(model: tenants::Model) -> Self {
        Self {
            id: model.id,
            company_name: model.company_name,
            company_email: model.company_email,
            company_phone: model.company_phone,
            owner_id: model.owner_id,
            current_plan_id: model.current_plan_id,
            subscription_end_date: model.subscription_end_date,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateTenantRequest {
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub company_phone: Option<String>,
    pub current_plan_id: Option<TenantPlan>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TenantQuery {
    /// 仅返回启用中的 tenant
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkPaymentRequest {
    #[schema(example = 59.99)]
    pub amount: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkPaymentResponse {
    pub payment_id: i64,
    pub new_end_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub tenant_id: String,
    pub plan_id: RequestedPlan,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub payment_date: DateTime<Utc>,
    pub payment_amount: f64,
    pub auto_renew: bool,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<tenant_subscriptions::Model> for SubscriptionResponse {
    fn from(model: tenant_subscriptions::Model) -> Self {
        Self {
            id: model.id,
            tenant_id: model.tenant_id,
            plan_id: model.plan_id,
            status: model.status,
            start_date: model.start_date,
            end_date: model.end_date,
            payment_date: model.payment_date,
            payment_amount: model.payment_amount,
            auto_renew: model.auto_renew,
            cancelled_at: model.cancelled_at,
            created_at: model.created_at,
        }
    }
}
