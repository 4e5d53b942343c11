//! Built-in UI string table
//!
//! English is the default language and carries the complete key set; other
//! languages are filled in as translations arrive and fall back to English
//! in the meantime.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Language, StringTable};

static BUILTIN: Lazy<StringTable> = Lazy::new(|| {
    let en: HashMap<&'static str, &'static str> = [
        ("app.title", "Agricultural Products Shop"),
        ("nav.home", "Home"),
        ("nav.products", "Products"),
        ("nav.contact", "Contact"),
        ("nav.admin", "Admin"),
        ("footer.admin", "Admin Login"),
        ("categories.title", "Product Categories"),
        ("category.pesticide", "Pesticides"),
        ("category.herbicide", "Herbicides"),
        ("category.insecticide", "Insecticides"),
        ("category.fungicide", "Fungicides"),
        ("category.plantGrowthRegulator", "Plant Growth Regulators"),
        ("category.seed", "Seeds"),
        ("category.machine", "Agriculture Machines"),
        ("category.kitchenGarden", "Organic Home Kitchen Garden"),
        ("products.title", "Our Products"),
        ("products.filter", "Filter by Category"),
        ("products.all", "All Products"),
        ("products.loading", "Loading products..."),
        ("products.error", "Failed to load products"),
        ("products.empty", "No products found"),
        ("product.price", "Price"),
        ("product.stock", "In Stock"),
        ("product.minOrder", "Minimum Order"),
        ("product.orderNow", "Order Now"),
        ("product.viewDetails", "View Details"),
        ("product.description", "Description"),
        ("order.title", "Place Your Order"),
        ("order.description", "Choose your preferred ordering method"),
        ("order.website", "Order via Website"),
        ("order.websiteDesc", "Complete your order through our secure checkout"),
        ("order.whatsapp", "Order via WhatsApp"),
        ("order.whatsappDesc", "Chat with us directly on WhatsApp"),
        ("order.bulk", "Bulk Order (Coming in Phase 2)"),
        ("order.bulkDesc", "Special pricing for large quantities"),
        ("checkout.title", "Checkout"),
        ("checkout.name", "Full Name"),
        ("checkout.mobile", "Mobile Number"),
        ("checkout.address", "Full Address"),
        ("checkout.city", "City"),
        ("checkout.state", "State"),
        ("checkout.pincode", "Pincode"),
        ("checkout.quantity", "Quantity"),
        ("checkout.total", "Total Amount"),
        ("checkout.submit", "Place Order"),
        ("checkout.success", "Order placed successfully!"),
        ("checkout.error", "Failed to place order"),
        ("contact.title", "Contact Us"),
        ("contact.location", "Our Location"),
        ("contact.openMap", "Open in Google Maps"),
        ("admin.dashboard", "Admin Dashboard"),
        ("admin.products", "Product Manager"),
        ("admin.orders", "Order Management"),
        ("admin.agents", "Agent Management"),
        ("admin.content", "Edit Site Text"),
        ("admin.reference", "Reference Website"),
        ("admin.logout", "Logout"),
        ("admin.login", "Login"),
        ("admin.welcome", "Welcome, Admin"),
        ("admin.accessDenied", "Access Denied"),
        (
            "admin.accessDeniedDescription",
            "You need to log in as an administrator to view this page.",
        ),
        ("admin.adminLoginButton", "Admin Login"),
        ("admin.goHome", "Go Home"),
        ("agent.accessDenied", "Agent Access Required"),
        (
            "agent.accessDeniedDesc",
            "You need to log in as a field agent to view this page.",
        ),
        ("agent.login", "Agent Login"),
        ("agent.logout", "Logout"),
        ("agent.loginTitle", "Agent Login"),
        (
            "agent.loginDesc",
            "Sign in with your registered mobile number and password",
        ),
        ("agent.loggedInAs", "You are logged in as a field agent."),
        ("agent.mobileNumber", "Mobile Number"),
        ("agent.password", "Password"),
        ("agent.loggingIn", "Logging in..."),
        (
            "agent.loginErrorRequired",
            "Mobile number and password are required",
        ),
        ("agent.orders", "My Orders"),
        ("loading", "Loading..."),
        ("error", "Error"),
        ("retry", "Retry"),
        ("save", "Save"),
        ("cancel", "Cancel"),
        ("delete", "Delete"),
        ("edit", "Edit"),
        ("add", "Add"),
        ("close", "Close"),
    ]
    .into_iter()
    .collect();

    let hi: HashMap<&'static str, &'static str> = [
        ("app.title", "कृषि उत्पाद की दुकान"),
        ("nav.home", "होम"),
        ("nav.products", "उत्पाद"),
        ("nav.contact", "संपर्क"),
        ("products.title", "हमारे उत्पाद"),
        ("product.price", "कीमत"),
        ("product.orderNow", "अभी ऑर्डर करें"),
        ("checkout.title", "चेकआउट"),
        ("checkout.submit", "ऑर्डर करें"),
        ("contact.title", "संपर्क करें"),
        ("loading", "लोड हो रहा है..."),
        ("save", "सहेजें"),
        ("cancel", "रद्द करें"),
    ]
    .into_iter()
    .collect();

    let mut tables = HashMap::new();
    tables.insert(Language::En, en);
    tables.insert(Language::Hi, hi);
    StringTable::new(tables)
});

pub fn builtin() -> &'static StringTable {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hindi_entry_wins_over_english() {
        assert_eq!(builtin().resolve("nav.home", Language::Hi), "होम");
    }

    #[test]
    fn missing_hindi_entry_falls_back_to_english() {
        assert_eq!(builtin().resolve("nav.admin", Language::Hi), "Admin");
    }

    #[test]
    fn every_category_has_a_default_string() {
        for category in contracts::enums::Category::all() {
            let key = category.translation_key();
            assert_ne!(builtin().resolve(&key, Language::En), key, "{}", key);
        }
    }
}
