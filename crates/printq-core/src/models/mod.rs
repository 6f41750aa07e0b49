pub mod admin_user;
pub mod order;

pub use admin_user::{AdminUser, AdminUserInfo};
pub use order::{
    CreateOrderRequest, NewOrderFile, Order, OrderFile, OrderFileResponse, OrderWithFiles,
    DEFAULT_STATUS,
};
