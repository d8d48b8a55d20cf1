use crate::models::*;
use crate::services::GymService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/gyms",
    tag = "gyms",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("tenant_id" = Option<String>, Query, description = "按 tenant 过滤")
    ),
    responses(
        (status = 200, description = "获取 gym 列表成功"),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_gyms(
    gym_service: web::Data<GymService>,
    query: web::Query<GymQuery>,
) -> Result<HttpResponse> {
    match gym_service.list_gyms(query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/gyms/{id}",
    tag = "gyms",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Gym ID")
    ),
    responses(
        (status = 200, description = "获取 gym 成功", body = GymResponse),
        (status = 404, description = "Gym 不存在")
    )
)]
pub async fn get_gym(
    gym_service: web::Data<GymService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match gym_service.get_gym(path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn gym_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/gyms")
            .route("", web::get().to(list_gyms))
            .route("/{id}", web::get().to(get_gym)),
    );
}
