use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use metagym_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::MailerService,
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    tasks,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 创建JWT服务
    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    // 创建外部服务
    let mailer_service = MailerService::new(config.mailer.clone());

    // 创建服务
    let auth_service = AuthService::new(pool.clone(), jwt_service.clone());
    let identity_service = IdentityService::new(pool.clone());
    let request_service = RequestService::new(pool.clone());
    let approval_service = ApprovalService::new(
        pool.clone(),
        identity_service.clone(),
        mailer_service.clone(),
    );
    let tenant_service = TenantService::new(pool.clone());
    let payment_service = PaymentService::new(pool.clone());
    let gym_service = GymService::new(pool.clone());

    // 启动后台任务
    tasks::spawn_all(tenant_service.clone());

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(request_service.clone()))
            .app_data(web::Data::new(approval_service.clone()))
            .app_data(web::Data::new(tenant_service.clone()))
            .app_data(web::Data::new(payment_service.clone()))
            .app_data(web::Data::new(gym_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::register_config)
                    .configure(handlers::request_config)
                    .configure(handlers::tenant_config)
                    .configure(handlers::gym_config)
                    .configure(handlers::payment_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
