pub mod api_utils;
pub mod cache;
pub mod client;
pub mod components;
pub mod contact;
pub mod storage;
pub mod toast;
pub mod whatsapp;
