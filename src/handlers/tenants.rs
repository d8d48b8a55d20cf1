use crate::models::*;
use crate::services::{PaymentService, TenantService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/tenants",
    tag = "tenants",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("active" = Option<bool>, Query, description = "仅返回启用中的 tenant")
    ),
    responses(
        (status = 200, description = "获取 tenant 列表成功"),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_tenants(
    tenant_service: web::Data<TenantService>,
    query: web::Query<TenantQuery>,
) -> Result<HttpResponse> {
    match tenant_service.list_tenants(query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tenants/{id}",
    tag = "tenants",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "获取 tenant 成功", body = TenantResponse),
        (status = 404, description = "Tenant 不存在")
    )
)]
pub async fn get_tenant(
    tenant_service: web::Data<TenantService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match tenant_service.get_tenant(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/tenants/{id}",
    tag = "tenants",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Tenant ID")
    ),
    request_body = UpdateTenantRequest,
    responses(
        (status = 200, description = "更新 tenant 成功", body = TenantResponse),
        (status = 400, description = "请求参数错误"),
        (status = 404, description = "Tenant 不存在")
    )
)]
pub async fn update_tenant(
    tenant_service: web::Data<TenantService>,
    path: web::Path<String>,
    request: web::Json<UpdateTenantRequest>,
) -> Result<HttpResponse> {
    match tenant_service
        .update_tenant(&path.into_inner(), request.into_inner())
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
    path = "/tenants/{id}/toggle-status",
    tag = "tenants",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "切换 tenant 状态成功", body = TenantResponse),
        (status = 404, description = "Tenant 不存在")
    )
)]
pub async fn toggle_tenant_status(
    tenant_service: web::Data<TenantService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match tenant_service.toggle_status(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tenants/{id}/payments",
    tag = "tenants",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Tenant ID")
    ),
    request_body = MarkPaymentRequest,
    responses(
        (status = 200, description = "收款已登记，订阅顺延30天", body = MarkPaymentResponse),
        (status = 400, description = "金额不合规"),
        (status = 404, description = "Tenant 不存在")
    )
)]
pub async fn mark_payment(
    tenant_service: web::Data<TenantService>,
    path: web::Path<String>,
    request: web::Json<MarkPaymentRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    match tenant_service
        .extend_subscription(&path.into_inner(), request.amount, request.notes)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response,
            "message": "Payment recorded, subscription extended"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tenants/{id}/payments",
    tag = "tenants",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "获取 tenant 付款记录成功"),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_tenant_payments(
    payment_service: web::Data<PaymentService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match payment_service.list_by_tenant(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tenants/{id}/subscriptions",
    tag = "tenants",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = String, Path, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "获取 tenant 订阅记录成功"),
        (status = 404, description = "Tenant 不存在")
    )
)]
pub async fn list_tenant_subscriptions(
    tenant_service: web::Data<TenantService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match tenant_service.list_subscriptions(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn tenant_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tenants")
            .route("", web::get().to(list_tenants))
            .route("/{id}", web::get().to(get_tenant))
            .route("/{id}", web::put().to(update_tenant))
            .route("/{id}/toggle-status", web::post().to(toggle_tenant_status))
            .route("/{id}/payments", web::post().to(mark_payment))
            .route("/{id}/payments", web::get().to(list_tenant_payments))
            .route("/{id}/subscriptions", web::get().to(list_tenant_subscriptions)),
    );
}
