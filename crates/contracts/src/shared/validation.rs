//! Client-side form validation
//!
//! Validation failures block submission before any remote call is made and
//! are reported per-field; messages are shown next to the offending input.

/// A non-empty check; the message names the field
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{} is required", field_name));
    }
    None
}

/// Indian mobile numbers: exactly 10 digits after stripping separators
pub fn validate_mobile(mobile: &str) -> Option<String> {
    if mobile.trim().is_empty() {
        return Some("Mobile number is required".to_string());
    }
    let digits = mobile.chars().filter(|c| c.is_ascii_digit()).count();
    if digits != 10 {
        return Some("Mobile number must be 10 digits".to_string());
    }
    None
}

/// Indian postal codes: exactly 6 digits after stripping separators
pub fn validate_pincode(pincode: &str) -> Option<String> {
    if pincode.trim().is_empty() {
        return Some("Pincode is required".to_string());
    }
    let digits = pincode.chars().filter(|c| c.is_ascii_digit()).count();
    if digits != 6 {
        return Some("Pincode must be 6 digits".to_string());
    }
    None
}

/// Order quantity must meet the product's minimum; the message names it
pub fn validate_quantity(quantity: u64, minimum: u64) -> Option<String> {
    if quantity < minimum {
        return Some(format!("Minimum order quantity is {}", minimum));
    }
    None
}

/// Price entered by the admin, in whole minor units, strictly positive
pub fn validate_price(price: &str) -> Option<String> {
    match price.trim().parse::<i64>() {
        Ok(value) if value > 0 => None,
        _ => Some("Price must be a positive number".to_string()),
    }
}

/// Stock entered by the admin, zero or more
pub fn validate_stock(stock: &str) -> Option<String> {
    match stock.trim().parse::<i64>() {
        Ok(value) if value >= 0 => None,
        _ => Some("Stock must be a non-negative number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert_eq!(
            validate_required("  ", "Name").as_deref(),
            Some("Name is required")
        );
        assert_eq!(validate_required("Ravi", "Name"), None);
    }

    #[test]
    fn mobile_needs_ten_digits() {
        assert_eq!(validate_mobile("9876543210"), None);
        assert_eq!(validate_mobile("98765-43210"), None);
        assert!(validate_mobile("12345").is_some());
        assert!(validate_mobile("").is_some());
    }

    #[test]
    fn pincode_needs_six_digits() {
        assert_eq!(validate_pincode("246701"), None);
        assert!(validate_pincode("2467").is_some());
    }

    #[test]
    fn quantity_below_minimum_names_the_minimum() {
        assert_eq!(
            validate_quantity(1, 5).as_deref(),
            Some("Minimum order quantity is 5")
        );
        assert_eq!(validate_quantity(5, 5), None);
    }

    #[test]
    fn price_must_be_positive() {
        assert_eq!(validate_price("100"), None);
        assert!(validate_price("0").is_some());
        assert!(validate_price("-3").is_some());
        assert!(validate_price("abc").is_some());
    }

    #[test]
    fn stock_may_be_zero() {
        assert_eq!(validate_stock("0"), None);
        assert_eq!(validate_stock("12"), None);
        assert!(validate_stock("-1").is_some());
    }
}
