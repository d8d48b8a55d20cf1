pub mod approval_service;
pub mod auth_service;
pub mod gym_service;
pub mod identity_service;
pub mod payment_service;
pub mod request_service;
pub mod tenant_service;

pub use approval_service::*;
pub use auth_service::*;
pub use gym_service::*;
pub use identity_service::*;
pub use payment_service::*;
pub use request_service::*;
pub use tenant_service::*;
