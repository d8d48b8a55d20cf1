use crate::entities::{
    RequestState, SubscriptionStatus, admin_user_entity as admin_users,
    gym_entity as gyms, gym_request_entity as gym_requests, tenant_entity as tenants,
    tenant_subscription_entity as tenant_subscriptions,
};
use crate::error::{AppError, AppResult};
use crate::external::{MailerService, SendCredentialsRequest};
use crate::models::*;
use crate::services::IdentityService;
use crate::utils::{generate_unique_gym_code, generate_unique_tenant_id, map_request_plan, plan_price};
use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};

/// 审批编排：按固定顺序创建 identity → tenant → subscription → gym →
/// admin user，最后条件更新申请状态并发送凭证邮件。
/// tenant 之后的所有写入在同一事务中，失败整体回滚（identity 除外）。
#[derive(Clone)]
pub struct ApprovalService {
    pool: DatabaseConnection,
    identity_service: IdentityService,
    mailer: MailerService,
}

struct ProvisionedRecords {
    tenant_id: String,
    gym_id: i64,
    gym_code: String,
}

impl ApprovalService {
    pub fn new(
        pool: DatabaseConnection,
        identity_service: IdentityService,
        mailer: MailerService,
    ) -> Self {
        Self {
            pool,
            identity_service,
            mailer,
        }
    }

    pub async fn approve(
        &self,
        request_id: i64,
        input: ApproveRequestRequest,
        reviewer_id: i64,
    ) -> AppResult<ApproveRequestResponse> {
        let request = gym_requests::Entity::find_by_id(request_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Gym request {request_id} not found")))?;

        if request.state != RequestState::Pending {
            return Err(AppError::Conflict(format!(
                "Gym request {request_id} has already been reviewed"
            )));
        }

        log::info!(
            "Approving gym request {request_id} ({}) by reviewer {reviewer_id}",
            request.gym_name
        );

        // 步骤1: 创建认证账号。失败则申请保持 pending，可换邮箱重试。
        let identity = self
            .identity_service
            .create_identity(&input.admin_email, &input.admin_password)
            .await?;
        let user_id = identity.id;

        // 步骤2-6 在同一事务内执行
        let txn = self.pool.begin().await?;
        let provisioned = match self
            .provision(&txn, &request, &input, user_id, reviewer_id)
            .await
        {
            Ok(records) => {
                txn.commit().await?;
                records
            }
            Err(err) => {
                txn.rollback().await.ok();
                // 此时认证账号已存在且无人引用，需人工清理
                log::error!(
                    "Provisioning failed for request {request_id}, orphaned identity {user_id}: {err}"
                );
                return Err(match err {
                    conflict @ AppError::Conflict(_) => conflict,
                    other => AppError::ProvisioningError(format!(
                        "Failed to approve gym request {request_id}: {other}"
                    )),
                });
            }
        };

        log::info!(
            "Gym request {request_id} approved: tenant {} gym {} ({})",
            provisioned.tenant_id,
            provisioned.gym_id,
            provisioned.gym_code
        );

        // 步骤7: 凭证邮件。记录已经落库，发送失败不影响审批结果。
        let email_payload = SendCredentialsRequest {
            to_email: request.email.clone(),
            to_name: format!(
                "{} {} {}",
                request.admin_name, request.admin_surname1, request.admin_surname2
            )
            .trim()
            .to_string(),
            gym_name: request.gym_name.clone(),
            email: input.admin_email.clone(),
            password: input.admin_password.clone(),
            tenant_id: provisioned.tenant_id.clone(),
            gym_code: provisioned.gym_code.clone(),
        };
        if let Err(e) = self.mailer.send_credentials(&email_payload).await {
            log::error!("Failed to send credentials email for request {request_id}: {e}");
        }

        Ok(ApproveRequestResponse {
            message: format!(
                "Request approved. Tenant: {}, Gym: {}",
                provisioned.tenant_id, provisioned.gym_code
            ),
            tenant_id: provisioned.tenant_id,
            gym_id: provisioned.gym_id,
            user_id,
            gym_code: provisioned.gym_code,
        })
    }

    async fn provision(
        &self,
        txn: &DatabaseTransaction,
        request: &gym_requests::Model,
        input: &ApproveRequestRequest,
        user_id: i64,
        reviewer_id: i64,
    ) -> AppResult<ProvisionedRecords> {
        let now = Utc::now();
        let requested_plan_id = request.requested_plan.to_string();

        // 步骤2: tenant，订阅截止 = 当前时间 + 30 天
        let tenant_id = generate_unique_tenant_id(txn).await?;
        let subscription_end_date = now + Duration::days(30);

        tenants::ActiveModel {
            id: Set(tenant_id.clone()),
            company_name: Set(request.company_name.clone()),
            company_email: Set(request.email.clone()),
            company_phone: Set(request.admin_phone.clone()),
            owner_id: Set(user_id),
            current_plan_id: Set(map_request_plan(&requested_plan_id)),
            subscription_end_date: Set(subscription_end_date),
            is_active: Set(true),
            created_at: Set(Some(now)),
        }
        .insert(txn)
        .await?;

        // 步骤3: subscription，金额按申请套餐查价格表
        tenant_subscriptions::ActiveModel {
            tenant_id: Set(tenant_id.clone()),
            plan_id: Set(request.requested_plan.clone()),
            status: Set(SubscriptionStatus::Active),
            start_date: Set(now),
            end_date: Set(subscription_end_date),
            payment_date: Set(now),
            payment_amount: Set(plan_price(&requested_plan_id)),
            auto_renew: Set(true),
            cancelled_at: Set(None),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        // 步骤4: gym。邮箱用新建的管理员邮箱；city/country 申请表未采集。
        let gym_code = generate_unique_gym_code(txn).await?;
        let gym = gyms::ActiveModel {
            tenant_id: Set(tenant_id.clone()),
            owner_id: Set(user_id),
            code: Set(gym_code.clone()),
            name: Set(request.gym_name.clone()),
            email: Set(input.admin_email.clone()),
            phone: Set(request.gym_phone.clone()),
            address: Set(request.gym_address.clone()),
            city: Set("N/A".to_string()),
            country: Set("N/A".to_string()),
            is_active: Set(true),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        // 步骤5: 应用层用户档案，角色固定为 owner
        admin_users::ActiveModel {
            user_id: Set(user_id),
            email: Set(input.admin_email.clone()),
            name: Set(request.admin_name.clone()),
            surname1: Set(request.admin_surname1.clone()),
            surname2: Set(request.admin_surname2.clone()),
            phone: Set(request.admin_phone.clone()),
            date_of_birth: Set(None),
            roles: Set(serde_json::json!([
                { "id": "own", "name": "Administrador" }
            ])),
            gym_id: Set(gym.id),
            tenant_id: Set(tenant_id.clone()),
            height: Set(0),
            weight: Set(0),
            membership_id: Set(None),
            profile_picture_url: Set(None),
            pin: Set(None),
            created_at: Set(Some(now)),
        }
        .insert(txn)
        .await?;

        // 步骤6: 条件更新申请状态，输掉并发审批则整个事务回滚
        let updated = gym_requests::Entity::update_many()
            .col_expr(
                gym_requests::Column::State,
                Expr::value(RequestState::Approved),
            )
            .col_expr(
                gym_requests::Column::ReviewedBy,
                Expr::value(Some(reviewer_id)),
            )
            .col_expr(gym_requests::Column::ReviewedAt, Expr::value(Some(now)))
            .col_expr(
                gym_requests::Column::GeneratedToken,
                Expr::value(Some(tenant_id.clone())),
            )
            .filter(gym_requests::Column::Id.eq(request.id))
            .filter(gym_requests::Column::State.eq(RequestState::Pending))
            .exec(txn)
            .await?;

        if updated.rows_affected == 0 {
            return Err(AppError::Conflict(format!(
                "Gym request {} was approved by another reviewer",
                request.id
            )));
        }

        Ok(ProvisionedRecords {
            tenant_id,
            gym_id: gym.id,
            gym_code,
        })
    }
}
