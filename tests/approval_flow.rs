mod common;

use chrono::Duration;
use metagym_backend::entities::{
    RequestState, RequestedPlan, SubscriptionStatus, TenantPlan, admin_user_entity as admin_users,
    gym_entity as gyms, gym_request_entity as gym_requests, identity_entity as identities,
    tenant_entity as tenants, tenant_subscription_entity as tenant_subscriptions,
};
use metagym_backend::error::AppError;
use metagym_backend::models::{ApproveRequestRequest, RejectRequestRequest};
use metagym_backend::services::RequestService;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

fn approve_input(email: &str, password: &str) -> ApproveRequestRequest {
    ApproveRequestRequest {
        admin_email: email.to_string(),
        admin_password: password.to_string(),
    }
}

#[tokio::test]
async fn approving_a_request_provisions_cross_referenced_records() {
    let db = common::setup_db().await;
    let request_id =
        common::seed_request(&db, "Iron Gym", "owner@iron.gym", RequestedPlan::BasicPlan).await;
    let service = common::approval_service(&db);

    let outcome = service
        .approve(request_id, approve_input("admin@iron.gym", "secret1"), 42)
        .await
        .expect("approval should succeed even though the mailer endpoint is unreachable");

    // 申请被标记为 approved，generated_token 存放新 tenant ID
    let request = gym_requests::Entity::find_by_id(request_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.state, RequestState::Approved);
    assert_eq!(request.reviewed_by, Some(42));
    assert!(request.reviewed_at.is_some());
    assert_eq!(
        request.generated_token.as_deref(),
        Some(outcome.tenant_id.as_str())
    );

    // tenant: ID 格式、公司信息来自申请、套餐映射、截止日 = 创建 + 30 天
    let tenant = tenants::Entity::find_by_id(outcome.tenant_id.clone())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(tenant.id.starts_with("tenant_"));
    assert_eq!(tenant.id.len(), "tenant_".len() + 8);
    assert_eq!(tenant.company_name, "Iron Gym SL");
    assert_eq!(tenant.company_email, "owner@iron.gym");
    assert_eq!(tenant.current_plan_id, TenantPlan::BasicPlan);
    assert!(tenant.is_active);
    assert_eq!(
        tenant.subscription_end_date - tenant.created_at.unwrap(),
        Duration::days(30)
    );

    // subscription: 保留原始申请套餐，价格来自价格表
    let subscription = tenant_subscriptions::Entity::find()
        .filter(tenant_subscriptions::Column::TenantId.eq(tenant.id.clone()))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(subscription.plan_id, RequestedPlan::BasicPlan);
    assert_eq!(subscription.status, SubscriptionStatus::Active);
    assert_eq!(subscription.payment_amount, 29.99);
    assert!(subscription.auto_renew);
    assert_eq!(subscription.end_date, tenant.subscription_end_date);

    // gym: code 格式、邮箱为新建管理员邮箱、city/country 为占位值
    let gym = gyms::Entity::find_by_id(outcome.gym_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(gym.code, outcome.gym_code);
    assert!(gym.code.starts_with("GYM"));
    assert_eq!(gym.code.len(), "GYM".len() + 6);
    assert_eq!(gym.name, "Iron Gym");
    assert_eq!(gym.email, "admin@iron.gym");
    assert_eq!(gym.city, "N/A");
    assert_eq!(gym.country, "N/A");

    // 三方 owner 引用一致，tenant 引用闭环
    let admin_user = admin_users::Entity::find_by_id(outcome.user_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tenant.owner_id, gym.owner_id);
    assert_eq!(gym.owner_id, admin_user.user_id);
    assert_eq!(gym.tenant_id, tenant.id);
    assert_eq!(subscription.tenant_id, tenant.id);
    assert_eq!(admin_user.tenant_id, tenant.id);
    assert_eq!(admin_user.gym_id, gym.id);
    assert_eq!(admin_user.roles[0]["id"], "own");
    assert_eq!(admin_user.roles[0]["name"], "Administrador");

    // 认证账号与档案共用同一 ID
    let identity = identities::Entity::find_by_id(outcome.user_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(identity.email, "admin@iron.gym");
    assert!(identity.is_active);
}

#[tokio::test]
async fn professional_plan_maps_to_premium_tenant_plan() {
    let db = common::setup_db().await;
    let request_id = common::seed_request(
        &db,
        "Flex Center",
        "owner@flex.gym",
        RequestedPlan::ProfessionalPlan,
    )
    .await;
    let service = common::approval_service(&db);

    let outcome = service
        .approve(request_id, approve_input("admin@flex.gym", "secret1"), 7)
        .await
        .unwrap();

    let tenant = tenants::Entity::find_by_id(outcome.tenant_id.clone())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    // professional 在 tenant 侧对应 premium
    assert_eq!(tenant.current_plan_id, TenantPlan::PremiumPlan);

    let subscription = tenant_subscriptions::Entity::find()
        .filter(tenant_subscriptions::Column::TenantId.eq(tenant.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(subscription.plan_id, RequestedPlan::ProfessionalPlan);
    assert_eq!(subscription.payment_amount, 59.99);
}

#[tokio::test]
async fn second_approval_of_same_request_conflicts_and_provisions_nothing() {
    let db = common::setup_db().await;
    let request_id =
        common::seed_request(&db, "Iron Gym", "owner@iron.gym", RequestedPlan::BasicPlan).await;
    let service = common::approval_service(&db);

    service
        .approve(request_id, approve_input("admin@iron.gym", "secret1"), 1)
        .await
        .unwrap();

    // 不同审核人、不同管理员邮箱的第二次审批必须被拒
    let err = service
        .approve(request_id, approve_input("other@iron.gym", "secret2"), 2)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got: {err}");

    // 没有第二套 tenant/gym/identity 被创建
    assert_eq!(tenants::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(gyms::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(identities::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(admin_users::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(
        tenant_subscriptions::Entity::find().count(&db).await.unwrap(),
        1
    );

    // 审核人信息仍是第一次审批的
    let request = gym_requests::Entity::find_by_id(request_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.reviewed_by, Some(1));
}

#[tokio::test]
async fn duplicate_admin_email_is_rejected_and_request_stays_pending() {
    let db = common::setup_db().await;
    let first = common::seed_request(&db, "Iron Gym", "owner@iron.gym", RequestedPlan::BasicPlan).await;
    let second =
        common::seed_request(&db, "Flex Center", "owner@flex.gym", RequestedPlan::BasicPlan).await;
    let service = common::approval_service(&db);

    service
        .approve(first, approve_input("admin@shared.gym", "secret1"), 1)
        .await
        .unwrap();

    let err = service
        .approve(second, approve_input("admin@shared.gym", "secret1"), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::IdentityError(_)), "got: {err}");

    // 第二条申请未被动过，可以换邮箱重试
    let request = gym_requests::Entity::find_by_id(second)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.state, RequestState::Pending);
    assert_eq!(tenants::Entity::find().count(&db).await.unwrap(), 1);

    service
        .approve(second, approve_input("admin2@shared.gym", "secret1"), 1)
        .await
        .unwrap();
    assert_eq!(tenants::Entity::find().count(&db).await.unwrap(), 2);
}

#[tokio::test]
async fn invalid_credentials_fail_validation_before_any_write() {
    let db = common::setup_db().await;
    let request_id =
        common::seed_request(&db, "Iron Gym", "owner@iron.gym", RequestedPlan::BasicPlan).await;
    let service = common::approval_service(&db);

    // 密码不足6位
    let err = service
        .approve(request_id, approve_input("admin@iron.gym", "short"), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)), "got: {err}");

    // 邮箱格式错误
    let err = service
        .approve(request_id, approve_input("not-an-email", "secret1"), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)), "got: {err}");

    assert_eq!(identities::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(tenants::Entity::find().count(&db).await.unwrap(), 0);

    let request = gym_requests::Entity::find_by_id(request_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.state, RequestState::Pending);
}

#[tokio::test]
async fn rejection_requires_reason_between_10_and_500_characters() {
    let db = common::setup_db().await;
    let request_id =
        common::seed_request(&db, "Iron Gym", "owner@iron.gym", RequestedPlan::BasicPlan).await;
    let service = RequestService::new(db.clone());

    // 9字符不够
    let err = service.reject(request_id, 1, "ninechars").await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)), "got: {err}");

    // 501字符超限
    let too_long = "x".repeat(501);
    let err = service.reject(request_id, 1, &too_long).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)), "got: {err}");

    let request = gym_requests::Entity::find_by_id(request_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.state, RequestState::Pending);

    // 恰好10字符通过
    let rejected = service.reject(request_id, 1, "ten__chars").await.unwrap();
    assert_eq!(rejected.state, RequestState::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("ten__chars"));
    assert_eq!(rejected.reviewed_by, Some(1));
    assert!(rejected.reviewed_at.is_some());
}

#[tokio::test]
async fn reviewed_requests_are_terminal() {
    let db = common::setup_db().await;
    let request_id =
        common::seed_request(&db, "Iron Gym", "owner@iron.gym", RequestedPlan::BasicPlan).await;
    let request_service = RequestService::new(db.clone());
    let approval_service = common::approval_service(&db);

    request_service
        .reject(request_id, 1, "incomplete paperwork")
        .await
        .unwrap();

    // 已驳回的申请不能再驳回，也不能再批准
    let err = request_service
        .reject(request_id, 2, "second rejection attempt")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got: {err}");

    let err = approval_service
        .approve(request_id, approve_input("admin@iron.gym", "secret1"), 2)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got: {err}");

    assert_eq!(tenants::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn rejecting_a_missing_request_is_not_found() {
    let db = common::setup_db().await;
    let service = RequestService::new(db.clone());

    let err = service.reject(999, 1, "does not matter here").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got: {err}");
}

#[tokio::test]
async fn reject_request_dto_roundtrip() {
    // handler 请求体字段约定
    let body: RejectRequestRequest =
        serde_json::from_str(r#"{"rejection_reason":"incomplete paperwork"}"#).unwrap();
    assert_eq!(body.rejection_reason, "incomplete paperwork");
}
