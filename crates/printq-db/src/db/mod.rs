//! Database repositories for the data access layer.
//
// Order persistence (orders + order_files)
pub mod order;
//
// Admin identities (admin_users)
pub mod admin_user;

pub use admin_user::AdminUserRepository;
pub use order::OrderRepository;
