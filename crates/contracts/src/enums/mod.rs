mod category;
mod order_status;
mod product_type;
mod user_role;

pub use category::Category;
pub use order_status::OrderStatus;
pub use product_type::ProductType;
pub use user_role::UserRole;
