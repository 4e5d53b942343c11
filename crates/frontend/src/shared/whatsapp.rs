//! WhatsApp deep links for the alternate ordering channel

use super::contact::WHATSAPP_NUMBER;

/// Build the wa.me deep link; the whole message is URL-encoded
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

/// Human-readable order summary prefilled into the chat
pub fn order_message(product_name: &str, price: u64, quantity: u64) -> String {
    format!(
        "Hi, I'm interested in ordering:\n\nProduct: {}\nQuantity: {}\nPrice: ₹{}\n\nPlease provide more details.",
        product_name, quantity, price
    )
}

/// Open a WhatsApp chat with a prefilled message in a new tab
pub fn open_whatsapp_chat(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&whatsapp_url(message), "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_the_whole_message() {
        let url = whatsapp_url("Product: Wheat Seeds\nPrice: ₹100");
        assert!(url.starts_with("https://wa.me/918077036783?text="));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
        assert!(url.contains("Wheat%20Seeds"));
    }

    #[test]
    fn message_names_product_quantity_and_price() {
        let message = order_message("Wheat Seeds", 100, 5);
        assert!(message.contains("Wheat Seeds"));
        assert!(message.contains("Quantity: 5"));
        assert!(message.contains("₹100"));
    }
}
