pub mod agent_orders;
pub mod checkout;
pub mod management;
