pub mod admin_dashboard;
pub mod contact;
