pub mod edit_text;
pub mod home;
pub mod reference_website;
