//! Centralized shop contact information

pub const SHOP_NAME: &str = "Rajdhani Beej Bhandar";
pub const SHOP_PHONE: &str = "8077036783";
pub const SHOP_PHONE_FORMATTED: &str = "+91 8077036783";
/// wa.me format: country code + number, no spaces or symbols
pub const WHATSAPP_NUMBER: &str = "918077036783";
pub const SHOP_ADDRESS: &str = "Ganj Daranagar, Bijnor, Uttar Pradesh, India";
pub const GOOGLE_MAPS_LINK: &str = "https://maps.app.goo.gl/1nXnfAyBe6BFAnA87";
/// Address-query embed, more reliable than the place-id variant
pub const GOOGLE_MAPS_EMBED_URL: &str =
    "https://www.google.com/maps?q=Rajdhani+Beej+Bhandar,+Ganj+Daranagar,+Bijnor,+Uttar+Pradesh,+India&output=embed";
