//! Background scheduled tasks for the application.
//!
//! Call `spawn_all` once during startup to launch them.

use crate::services::TenantService;

/// Spawn all background tasks.
///
/// Notes
/// - Each task is idempotent as implemented in its service and runs on its own schedule.
/// - This function detaches tasks via `tokio::spawn`; it does not block.
pub fn spawn_all(tenant_service: TenantService) {
    // 过期订阅清理（每 6 小时）
    {
        let svc = tenant_service.clone();
        tokio::spawn(async move {
            loop {
                match svc.expire_subscriptions().await {
                    Ok(n) if n > 0 => log::info!("Expired subscriptions processed: {n}"),
                    Ok(_) => {}
                    Err(e) => log::error!("Failed to expire subscriptions: {e:?}"),
                }
                tokio::time::sleep(std::time::Duration::from_secs(6 * 3600)).await;
            }
        });
    }
}
