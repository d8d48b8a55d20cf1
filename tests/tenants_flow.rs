mod common;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use metagym_backend::entities::{
    PaymentStatus, RequestedPlan, SubscriptionStatus, TenantPlan,
    subscription_payment_entity as subscription_payments, tenant_entity as tenants,
    tenant_subscription_entity as tenant_subscriptions,
};
use metagym_backend::error::AppError;
use metagym_backend::models::{TenantQuery, UpdateTenantRequest};
use metagym_backend::services::{PaymentService, TenantService};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

async fn seed_tenant(db: &DatabaseConnection, tenant_id: &str, end_date: DateTime<Utc>) {
    tenants::ActiveModel {
        id: Set(tenant_id.to_string()),
        company_name: Set("Iron Gym SL".to_string()),
        company_email: Set("owner@iron.gym".to_string()),
        company_phone: Set("+34600111222".to_string()),
        owner_id: Set(1),
        current_plan_id: Set(TenantPlan::BasicPlan),
        subscription_end_date: Set(end_date),
        is_active: Set(true),
        created_at: Set(Some(Utc::now())),
    }
    .insert(db)
    .await
    .expect("failed to seed tenant");
}

async fn seed_subscription(
    db: &DatabaseConnection,
    tenant_id: &str,
    end_date: DateTime<Utc>,
    status: SubscriptionStatus,
) -> i64 {
    let subscription = tenant_subscriptions::ActiveModel {
        tenant_id: Set(tenant_id.to_string()),
        plan_id: Set(RequestedPlan::BasicPlan),
        status: Set(status),
        start_date: Set(end_date - Duration::days(30)),
        end_date: Set(end_date),
        payment_date: Set(end_date - Duration::days(30)),
        payment_amount: Set(29.99),
        auto_renew: Set(true),
        cancelled_at: Set(None),
        created_at: Set(Some(Utc::now())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed subscription");
    subscription.id
}

#[tokio::test]
async fn marking_a_payment_extends_from_the_previous_end_date() {
    let db = common::setup_db().await;
    let service = TenantService::new(db.clone());

    // 截止日在过去（欠费），顺延仍从旧截止日接续
    let jan1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    seed_tenant(&db, "tenant_ARREARS1", jan1).await;
    let subscription_id = seed_subscription(&db, "tenant_ARREARS1", jan1, SubscriptionStatus::Active).await;

    let result = service
        .extend_subscription("tenant_ARREARS1", 59.99, Some("manual check".to_string()))
        .await
        .unwrap();

    assert_eq!(result.new_end_date, jan1 + Duration::days(30));
    assert_eq!(
        result.new_end_date.date_naive(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    );

    // 付款记录覆盖 [旧截止日, 新截止日]，已收款
    let payment = subscription_payments::Entity::find_by_id(result.payment_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.tenant_id, "tenant_ARREARS1");
    assert_eq!(payment.subscription_id, Some(subscription_id));
    assert_eq!(payment.amount, 59.99);
    assert!(payment.has_paid);
    assert!(payment.paid_at.is_some());
    assert_eq!(payment.period_start, jan1);
    assert_eq!(payment.period_end, result.new_end_date);
    assert_eq!(payment.notes.as_deref(), Some("manual check"));

    // tenant 截止日已更新
    let tenant = tenants::Entity::find_by_id("tenant_ARREARS1".to_string())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tenant.subscription_end_date, result.new_end_date);
}

#[tokio::test]
async fn extension_preserves_remaining_buffer_for_future_end_dates() {
    let db = common::setup_db().await;
    let service = TenantService::new(db.clone());

    let end_date = Utc.with_ymd_and_hms(2026, 9, 15, 12, 0, 0).unwrap();
    seed_tenant(&db, "tenant_BUFFER01", end_date).await;
    seed_subscription(&db, "tenant_BUFFER01", end_date, SubscriptionStatus::Active).await;

    let result = service
        .extend_subscription("tenant_BUFFER01", 29.99, None)
        .await
        .unwrap();

    // 不是 now + 30，而是旧截止日 + 30
    assert_eq!(result.new_end_date, end_date + Duration::days(30));

    // 未显式给备注时写入默认备注
    let payment = subscription_payments::Entity::find_by_id(result.payment_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        payment.notes.as_deref(),
        Some("Payment received - subscription extended for 30 days")
    );
}

#[tokio::test]
async fn invalid_amounts_are_rejected_without_writes() {
    let db = common::setup_db().await;
    let service = TenantService::new(db.clone());

    let end_date = Utc.with_ymd_and_hms(2026, 9, 15, 12, 0, 0).unwrap();
    seed_tenant(&db, "tenant_BADPAY01", end_date).await;

    for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = service
            .extend_subscription("tenant_BADPAY01", amount, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)), "got: {err}");
    }

    assert_eq!(
        subscription_payments::Entity::find().count(&db).await.unwrap(),
        0
    );
    let tenant = tenants::Entity::find_by_id("tenant_BADPAY01".to_string())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tenant.subscription_end_date, end_date);
}

#[tokio::test]
async fn extending_a_missing_tenant_is_not_found() {
    let db = common::setup_db().await;
    let service = TenantService::new(db.clone());

    let err = service
        .extend_subscription("tenant_MISSING0", 29.99, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got: {err}");
}

#[tokio::test]
async fn unpaid_payments_past_their_period_read_as_overdue() {
    let db = common::setup_db().await;
    let payment_service = PaymentService::new(db.clone());

    let past_end = Utc::now() - Duration::days(5);
    seed_tenant(&db, "tenant_OVERDUE1", past_end).await;

    // 直接落一条未收款且周期已过的记录
    subscription_payments::ActiveModel {
        tenant_id: Set("tenant_OVERDUE1".to_string()),
        subscription_id: Set(None),
        amount: Set(29.99),
        has_paid: Set(false),
        period_start: Set(past_end - Duration::days(30)),
        period_end: Set(past_end),
        paid_at: Set(None),
        status: Set(PaymentStatus::Active),
        notes: Set(None),
        created_at: Set(Some(Utc::now())),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let payments = payment_service.list_by_tenant("tenant_OVERDUE1").await.unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].status, PaymentStatus::Overdue);
    assert!(!payments[0].has_paid);
}

#[tokio::test]
async fn expire_subscriptions_only_touches_active_past_due_rows() {
    let db = common::setup_db().await;
    let service = TenantService::new(db.clone());

    let past = Utc::now() - Duration::days(1);
    let future = Utc::now() + Duration::days(10);
    seed_tenant(&db, "tenant_EXPIRE01", future).await;
    let expired_id =
        seed_subscription(&db, "tenant_EXPIRE01", past, SubscriptionStatus::Active).await;
    let active_id =
        seed_subscription(&db, "tenant_EXPIRE01", future, SubscriptionStatus::Active).await;
    let cancelled_id =
        seed_subscription(&db, "tenant_EXPIRE01", past, SubscriptionStatus::Cancelled).await;

    let affected = service.expire_subscriptions().await.unwrap();
    assert_eq!(affected, 1);

    let fetch = |id: i64| {
        let db = db.clone();
        async move {
            tenant_subscriptions::Entity::find_by_id(id)
                .one(&db)
                .await
                .unwrap()
                .unwrap()
                .status
        }
    };
    assert_eq!(fetch(expired_id).await, SubscriptionStatus::Expired);
    assert_eq!(fetch(active_id).await, SubscriptionStatus::Active);
    assert_eq!(fetch(cancelled_id).await, SubscriptionStatus::Cancelled);
}

#[tokio::test]
async fn tenant_updates_and_status_toggle() {
    let db = common::setup_db().await;
    let service = TenantService::new(db.clone());

    let end_date = Utc.with_ymd_and_hms(2026, 9, 15, 12, 0, 0).unwrap();
    seed_tenant(&db, "tenant_MANAGE01", end_date).await;

    // 空更新被拒
    let err = service
        .update_tenant(
            "tenant_MANAGE01",
            UpdateTenantRequest {
                company_name: None,
                company_email: None,
                company_phone: None,
                current_plan_id: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)), "got: {err}");

    let updated = service
        .update_tenant(
            "tenant_MANAGE01",
            UpdateTenantRequest {
                company_name: Some("Iron Gym Holdings".to_string()),
                company_email: None,
                company_phone: None,
                current_plan_id: Some(TenantPlan::EnterprisePlan),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.company_name, "Iron Gym Holdings");
    assert_eq!(updated.current_plan_id, TenantPlan::EnterprisePlan);
    // 未提供的字段保持原值
    assert_eq!(updated.company_email, "owner@iron.gym");

    let toggled = service.toggle_status("tenant_MANAGE01").await.unwrap();
    assert!(!toggled.is_active);
    let toggled = service.toggle_status("tenant_MANAGE01").await.unwrap();
    assert!(toggled.is_active);

    // active 过滤
    service.toggle_status("tenant_MANAGE01").await.unwrap();
    let active_only = service
        .list_tenants(TenantQuery { active: Some(true) })
        .await
        .unwrap();
    assert!(active_only.is_empty());
    let all = service.list_tenants(TenantQuery { active: None }).await.unwrap();
    assert_eq!(all.len(), 1);
}
