pub mod agents;
pub mod content;
pub mod orders;
pub mod products;
