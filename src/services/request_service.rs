use crate::entities::{RequestState, gym_request_entity as gym_requests};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::validate_email;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct RequestService {
    pool: DatabaseConnection,
}

impl RequestService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 公开注册入口：登记一条待审核的申请
    pub async fn create_request(
        &self,
        request: CreateGymRequestRequest,
    ) -> AppResult<GymRequestResponse> {
        validate_email(&request.email)?;

        let required = [
            ("gym_name", &request.gym_name),
            ("gym_phone", &request.gym_phone),
            ("gym_address", &request.gym_address),
            ("company_name", &request.company_name),
            ("admin_name", &request.admin_name),
            ("admin_surname1", &request.admin_surname1),
            ("admin_phone", &request.admin_phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!("{field} is required")));
            }
        }

        let now = Utc::now();
        let model = gym_requests::ActiveModel {
            gym_name: Set(request.gym_name.trim().to_string()),
            gym_phone: Set(request.gym_phone.trim().to_string()),
            gym_address: Set(request.gym_address.trim().to_string()),
            company_name: Set(request.company_name.trim().to_string()),
            admin_name: Set(request.admin_name.trim().to_string()),
            admin_surname1: Set(request.admin_surname1.trim().to_string()),
            admin_surname2: Set(request.admin_surname2.trim().to_string()),
            admin_phone: Set(request.admin_phone.trim().to_string()),
            email: Set(request.email.trim().to_string()),
            requested_plan: Set(request.requested_plan),
            state: Set(RequestState::Pending),
            date: Set(now),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Gym request created: {} ({})", model.id, model.gym_name);
        Ok(GymRequestResponse::from(model))
    }

    pub async fn list_requests(
        &self,
        query: GymRequestQuery,
    ) -> AppResult<PaginatedResponse<GymRequestResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let mut finder = gym_requests::Entity::find();
        if let Some(state) = query.state {
            finder = finder.filter(gym_requests::Column::State.eq(state));
        }

        let paginator = finder
            .order_by_desc(gym_requests::Column::CreatedAt)
            .paginate(&self.pool, params.get_per_page() as u64);

        let total = paginator.num_items().await? as i64;
        let items = paginator
            .fetch_page((params.get_page() - 1) as u64)
            .await?
            .into_iter()
            .map(GymRequestResponse::from)
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get_request(&self, request_id: i64) -> AppResult<GymRequestResponse> {
        let model = self.find_request(request_id).await?;
        Ok(GymRequestResponse::from(model))
    }

    pub(crate) async fn find_request(&self, request_id: i64) -> AppResult<gym_requests::Model> {
        gym_requests::Entity::find_by_id(request_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Gym request {request_id} not found")))
    }

    /// 驳回申请。仅更新申请本身，不发送任何通知。
    pub async fn reject(
        &self,
        request_id: i64,
        reviewer_id: i64,
        rejection_reason: &str,
    ) -> AppResult<GymRequestResponse> {
        let reason = rejection_reason.trim();
        let reason_chars = reason.chars().count();
        if reason_chars < 10 {
            return Err(AppError::ValidationError(
                "Rejection reason must be at least 10 characters".to_string(),
            ));
        }
        if reason_chars > 500 {
            return Err(AppError::ValidationError(
                "Rejection reason must be at most 500 characters".to_string(),
            ));
        }

        // 确认存在，区分 404 与状态冲突
        self.find_request(request_id).await?;

        // 条件更新: 只有 pending 状态允许进入 rejected
        let result = gym_requests::Entity::update_many()
            .col_expr(
                gym_requests::Column::State,
                Expr::value(RequestState::Rejected),
            )
            .col_expr(
                gym_requests::Column::ReviewedBy,
                Expr::value(Some(reviewer_id)),
            )
            .col_expr(
                gym_requests::Column::ReviewedAt,
                Expr::value(Some(Utc::now())),
            )
            .col_expr(
                gym_requests::Column::RejectionReason,
                Expr::value(Some(reason.to_string())),
            )
            .filter(gym_requests::Column::Id.eq(request_id))
            .filter(gym_requests::Column::State.eq(RequestState::Pending))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::Conflict(format!(
                "Gym request {request_id} has already been reviewed"
            )));
        }

        log::info!("Gym request {request_id} rejected by {reviewer_id}");
        self.get_request(request_id).await
    }
}
