use crate::entities::{
    PaymentStatus, subscription_payment_entity as subscription_payments,
    tenant_subscription_entity as tenant_subscriptions,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct PaymentService {
    pool: DatabaseConnection,
}

impl PaymentService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 登记一笔已收款。调用方负责确认 tenant 存在。
    pub async fn create_payment<C: ConnectionTrait>(
        &self,
        db: &C,
        tenant_id: &str,
        amount: f64,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        notes: Option<String>,
    ) -> AppResult<subscription_payments::Model> {
        validate_payment_input(amount, period_start, period_end, notes.as_deref())?;

        // 关联 tenant 当前最新的订阅记录（可能不存在）
        let subscription_id = tenant_subscriptions::Entity::find()
            .filter(tenant_subscriptions::Column::TenantId.eq(tenant_id))
            .order_by_desc(tenant_subscriptions::Column::CreatedAt)
            .one(db)
            .await?
            .map(|subscription| subscription.id);

        let now = Utc::now();
        let payment = subscription_payments::ActiveModel {
            tenant_id: Set(tenant_id.to_string()),
            subscription_id: Set(subscription_id),
            amount: Set(amount),
            has_paid: Set(true),
            period_start: Set(period_start),
            period_end: Set(period_end),
            paid_at: Set(Some(now)),
            status: Set(PaymentStatus::Active),
            notes: Set(notes),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        log::info!(
            "Payment record created: {} for tenant {tenant_id} ({amount})",
            payment.id
        );
        Ok(payment)
    }

    pub async fn list_all(
        &self,
        query: PaymentQuery,
    ) -> AppResult<PaginatedResponse<PaymentResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let paginator = subscription_payments::Entity::find()
            .order_by_desc(subscription_payments::Column::CreatedAt)
            .paginate(&self.pool, params.get_per_page() as u64);

        let total = paginator.num_items().await? as i64;
        let items = paginator
            .fetch_page((params.get_page() - 1) as u64)
            .await?
            .into_iter()
            .map(PaymentResponse::from)
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn list_by_tenant(&self, tenant_id: &str) -> AppResult<Vec<PaymentResponse>> {
        let payments = subscription_payments::Entity::find()
            .filter(subscription_payments::Column::TenantId.eq(tenant_id))
            .order_by_desc(subscription_payments::Column::PaidAt)
            .order_by_desc(subscription_payments::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }
}

fn validate_payment_input(
    amount: f64,
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    notes: Option<&str>,
) -> AppResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::ValidationError(
            "Amount must be a positive number".to_string(),
        ));
    }

    if period_start >= period_end {
        return Err(AppError::ValidationError(
            "Period end date must be after period start date".to_string(),
        ));
    }

    let period_days = (period_end - period_start).num_days();
    if period_days > 365 {
        return Err(AppError::ValidationError(
            "Payment period cannot exceed 365 days".to_string(),
        ));
    }

    if let Some(notes) = notes
        && notes.chars().count() > 500
    {
        return Err(AppError::ValidationError(
            "Notes cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_payment_input() {
        let start = Utc::now();
        let end = start + Duration::days(30);

        assert!(validate_payment_input(59.99, start, end, None).is_ok());
        assert!(validate_payment_input(0.0, start, end, None).is_err());
        assert!(validate_payment_input(-5.0, start, end, None).is_err());
        assert!(validate_payment_input(f64::NAN, start, end, None).is_err());
        assert!(validate_payment_input(f64::INFINITY, start, end, None).is_err());
        // 起止倒置
        assert!(validate_payment_input(59.99, end, start, None).is_err());
        // 超过365天
        assert!(validate_payment_input(59.99, start, start + Duration::days(366), None).is_err());
        // 备注过长
        let long_notes = "x".repeat(501);
        assert!(validate_payment_input(59.99, start, end, Some(&long_notes)).is_err());
    }
}
