pub mod translation;
pub mod validation;
