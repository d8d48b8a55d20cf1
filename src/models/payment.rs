use crate::entities::{PaymentStatus, subscription_payment_entity as subscription_payments};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i64,
    pub tenant_id: String,
    pub subscription_id: Option<i64>,
    pub amount: f64,
    pub has_paid: bool,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub status: PaymentStatus,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<subscription_payments::Model> for PaymentResponse {
    fn from(model: subscription_payments::Model) -> Self {
        // 逾期状态在读取时计算，存储值不是唯一依据
        let status = if !model.has_paid && Utc::now() > model.period_end {
            PaymentStatus::Overdue
        } else {
            model.status
        };

        Self {
            id: model.id,
            tenant_id: model.tenant_id,
            subscription_id: model.subscription_id,
            amount: model.amount,
            has_paid: model.has_paid,
            period_start: model.period_start,
            period_end: model.period_end,
            paid_at: model.paid_at,
            status,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
