use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{PaymentStatus, RequestState, RequestedPlan, SubscriptionStatus, TenantPlan};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::requests::register,
        handlers::requests::list_requests,
        handlers::requests::get_request,
        handlers::requests::approve_request,
        handlers::requests::reject_request,
        handlers::tenants::list_tenants,
        handlers::tenants::get_tenant,
        handlers::tenants::update_tenant,
        handlers::tenants::toggle_tenant_status,
        handlers::tenants::mark_payment,
        handlers::tenants::list_tenant_payments,
        handlers::tenants::list_tenant_subscriptions,
        handlers::gyms::list_gyms,
        handlers::gyms::get_gym,
        handlers::payments::list_payments,
    ),
    components(
        schemas(
            LoginRequest,
            AuthResponse,
            CreateGymRequestRequest,
            GymRequestResponse,
            ApproveRequestRequest,
            ApproveRequestResponse,
            RejectRequestRequest,
            TenantResponse,
            UpdateTenantRequest,
            MarkPaymentRequest,
            MarkPaymentResponse,
            SubscriptionResponse,
            GymResponse,
            PaymentResponse,
            RequestState,
            RequestedPlan,
            TenantPlan,
            SubscriptionStatus,
            PaymentStatus,
            PaginationInfo,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication API"),
        (name = "requests", description = "Gym registration request API"),
        (name = "tenants", description = "Tenant management API"),
        (name = "gyms", description = "Gym management API"),
        (name = "payments", description = "Subscription payment API"),
    ),
    info(
        title = "Meta Gym Admin API",
        version = "1.0.0",
        description = "Meta Gym admin backend REST API documentation",
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
