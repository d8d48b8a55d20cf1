use crate::error::AppError;
use crate::models::*;
use crate::services::{ApprovalService, RequestService};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

fn get_reviewer_id(req: &HttpRequest) -> Option<i64> {
    req.extensions().get::<i64>().copied()
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "requests",
    request_body = CreateGymRequestRequest,
    responses(
        (status = 200, description = "申请已登记", body = GymRequestResponse),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn register(
    request_service: web::Data<RequestService>,
    request: web::Json<CreateGymRequestRequest>,
) -> Result<HttpResponse> {
    match request_service.create_request(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response,
            "message": "Registration request submitted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("state" = Option<String>, Query, description = "按状态过滤 (pending/approved/rejected)"),
        ("page" = Option<u32>, Query, description = "页码"),
        ("per_page" = Option<u32>, Query, description = "每页数量")
    ),
    responses(
        (status = 200, description = "获取申请列表成功"),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_requests(
    request_service: web::Data<RequestService>,
    query: web::Query<GymRequestQuery>,
) -> Result<HttpResponse> {
    match request_service.list_requests(query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "申请ID")
    ),
    responses(
        (status = 200, description = "获取申请成功", body = GymRequestResponse),
        (status = 404, description = "申请不存在")
    )
)]
pub async fn get_request(
    request_service: web::Data<RequestService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match request_service.get_request(path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/requests/{id}/approve",
    tag = "requests",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "申请ID")
    ),
    request_body = ApproveRequestRequest,
    responses(
        (status = 200, description = "审批通过", body = ApproveRequestResponse),
        (status = 400, description = "请求参数错误"),
        (status = 409, description = "申请已被处理")
    )
)]
pub async fn approve_request(
    approval_service: web::Data<ApprovalService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<ApproveRequestRequest>,
) -> Result<HttpResponse> {
    let Some(reviewer_id) = get_reviewer_id(&req) else {
        return Ok(AppError::AuthError("Missing reviewer identity".to_string()).error_response());
    };

    match approval_service
        .approve(path.into_inner(), request.into_inner(), reviewer_id)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/requests/{id}/reject",
    tag = "requests",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "申请ID")
    ),
    request_body = RejectRequestRequest,
    responses(
        (status = 200, description = "申请已驳回", body = GymRequestResponse),
        (status = 400, description = "驳回原因不合规"),
        (status = 409, description = "申请已被处理")
    )
)]
pub async fn reject_request(
    request_service: web::Data<RequestService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<RejectRequestRequest>,
) -> Result<HttpResponse> {
    let Some(reviewer_id) = get_reviewer_id(&req) else {
        return Ok(AppError::AuthError("Missing reviewer identity".to_string()).error_response());
    };

    match request_service
        .reject(path.into_inner(), reviewer_id, &request.rejection_reason)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn register_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register));
}

pub fn request_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/requests")
            .route("", web::get().to(list_requests))
            .route("/{id}", web::get().to(get_request))
            .route("/{id}/approve", web::post().to(approve_request))
            .route("/{id}/reject", web::post().to(reject_request)),
    );
}
