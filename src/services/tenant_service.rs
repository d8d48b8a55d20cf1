use crate::entities::{
    SubscriptionStatus, tenant_entity as tenants, tenant_subscription_entity as tenant_subscriptions,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::PaymentService;
use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct TenantService {
    pool: DatabaseConnection,
    payment_service: PaymentService,
}

impl TenantService {
    pub fn new(pool: DatabaseConnection) -> Self {
        let payment_service = PaymentService::new(pool.clone());
        Self {
            pool,
            payment_service,
        }
    }

    pub async fn list_tenants(&self, query: TenantQuery) -> AppResult<Vec<TenantResponse>> {
        let mut finder = tenants::Entity::find();
        if query.active.unwrap_or(false) {
            finder = finder.filter(tenants::Column::IsActive.eq(true));
        }

        let models = finder
            .order_by_desc(tenants::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        Ok(models.into_iter().map(TenantResponse::from).collect())
    }

    pub async fn get_tenant(&self, tenant_id: &str) -> AppResult<TenantResponse> {
        let model = self.find_tenant(tenant_id).await?;
        Ok(TenantResponse::from(model))
    }

    async fn find_tenant(&self, tenant_id: &str) -> AppResult<tenants::Model> {
        tenants::Entity::find_by_id(tenant_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tenant {tenant_id} not found")))
    }

    pub async fn update_tenant(
        &self,
        tenant_id: &str,
        request: UpdateTenantRequest,
    ) -> AppResult<TenantResponse> {
        let model = self.find_tenant(tenant_id).await?;

        if request.company_name.is_none()
            && request.company_email.is_none()
            && request.company_phone.is_none()
            && request.current_plan_id.is_none()
        {
            return Err(AppError::ValidationError(
                "No fields to update".to_string(),
            ));
        }

        let mut active = model.into_active_model();
        if let Some(company_name) = request.company_name {
            active.company_name = Set(company_name);
        }
        if let Some(company_email) = request.company_email {
            active.company_email = Set(company_email);
        }
        if let Some(company_phone) = request.company_phone {
            active.company_phone = Set(company_phone);
        }
        if let Some(current_plan_id) = request.current_plan_id {
            active.current_plan_id = Set(current_plan_id);
        }

        let model = active.update(&self.pool).await?;
        Ok(TenantResponse::from(model))
    }

    pub async fn toggle_status(&self, tenant_id: &str) -> AppResult<TenantResponse> {
        let model = self.find_tenant(tenant_id).await?;
        let next = !model.is_active;

        let mut active = model.into_active_model();
        active.is_active = Set(next);

        let model = active.update(&self.pool).await?;
        log::info!("Tenant {tenant_id} is_active -> {next}");
        Ok(TenantResponse::from(model))
    }

    /// 登记收款并顺延订阅 30 天。
    /// 新截止日 = 当前截止日 + 30 天，欠费期照样从旧截止日接续。
    pub async fn extend_subscription(
        &self,
        tenant_id: &str,
        amount: f64,
        notes: Option<String>,
    ) -> AppResult<MarkPaymentResponse> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::ValidationError(
                "Amount must be a positive number".to_string(),
            ));
        }

        let tenant = self.find_tenant(tenant_id).await?;
        let current_end_date = tenant.subscription_end_date;
        let new_end_date = current_end_date + Duration::days(30);

        let notes = notes.or_else(|| {
            Some("Payment received - subscription extended for 30 days".to_string())
        });

        let txn = self.pool.begin().await?;

        let payment = self
            .payment_service
            .create_payment(&txn, tenant_id, amount, current_end_date, new_end_date, notes)
            .await?;

        let mut active = tenant.into_active_model();
        active.subscription_end_date = Set(new_end_date);
        active.update(&txn).await?;

        txn.commit().await?;

        log::info!(
            "Tenant {tenant_id} subscription extended to {new_end_date} (payment {})",
            payment.id
        );

        Ok(MarkPaymentResponse {
            payment_id: payment.id,
            new_end_date,
        })
    }

    pub async fn list_subscriptions(&self, tenant_id: &str) -> AppResult<Vec<SubscriptionResponse>> {
        self.find_tenant(tenant_id).await?;

        let subscriptions = tenant_subscriptions::Entity::find()
            .filter(tenant_subscriptions::Column::TenantId.eq(tenant_id))
            .order_by_desc(tenant_subscriptions::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        Ok(subscriptions
            .into_iter()
            .map(SubscriptionResponse::from)
            .collect())
    }

    /// 后台任务: 把已过截止日的 active 订阅标记为 expired
    pub async fn expire_subscriptions(&self) -> AppResult<u64> {
        let result = tenant_subscriptions::Entity::update_many()
            .col_expr(
                tenant_subscriptions::Column::Status,
                Expr::value(SubscriptionStatus::Expired),
            )
            .filter(tenant_subscriptions::Column::Status.eq(SubscriptionStatus::Active))
            .filter(tenant_subscriptions::Column::EndDate.lt(Utc::now()))
            .exec(&self.pool)
            .await?;

        Ok(result.rows_affected)
    }
}
