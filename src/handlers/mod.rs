pub mod auth;
pub mod gyms;
pub mod payments;
pub mod requests;
pub mod tenants;

pub use auth::auth_config;
pub use gyms::gym_config;
pub use payments::payment_config;
pub use requests::{register_config, request_config};
pub use tenants::tenant_config;
