#![allow(dead_code)]

use metagym_backend::config::MailerConfig;
use metagym_backend::entities::RequestedPlan;
use metagym_backend::external::MailerService;
use metagym_backend::models::CreateGymRequestRequest;
use metagym_backend::services::{ApprovalService, IdentityService, RequestService};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// 内存 SQLite，单连接，建表后即用
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite database");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");
    db
}

/// 指向不可达端点的邮件服务。审批对邮件失败是非致命的，
/// 因此所有审批测试都顺带覆盖了这条路径。
pub fn unreachable_mailer() -> MailerService {
    MailerService::new(MailerConfig {
        endpoint: "http://127.0.0.1:9/send-credentials".to_string(),
        api_key: String::new(),
    })
}

pub fn approval_service(db: &DatabaseConnection) -> ApprovalService {
    ApprovalService::new(
        db.clone(),
        IdentityService::new(db.clone()),
        unreachable_mailer(),
    )
}

/// 通过公开注册入口登记一条待审核申请，返回申请 ID
pub async fn seed_request(
    db: &DatabaseConnection,
    gym_name: &str,
    email: &str,
    requested_plan: RequestedPlan,
) -> i64 {
    let service = RequestService::new(db.clone());
    let created = service
        .create_request(CreateGymRequestRequest {
            gym_name: gym_name.to_string(),
            gym_phone: "+34911222333".to_string(),
            gym_address: "Calle Mayor 1".to_string(),
            company_name: format!("{gym_name} SL"),
            admin_name: "Ana".to_string(),
            admin_surname1: "García".to_string(),
            admin_surname2: "López".to_string(),
            admin_phone: "+34600111222".to_string(),
            email: email.to_string(),
            requested_plan,
        })
        .await
        .expect("failed to seed gym request");
    created.id
}
