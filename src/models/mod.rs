pub mod auth;
pub mod common;
pub mod gym;
pub mod gym_request;
pub mod pagination;
pub mod payment;
pub mod tenant;

pub use auth::*;
pub use common::*;
pub use gym::*;
pub use gym_request::*;
pub use pagination::*;
pub use payment::*;
pub use tenant::*;
