//! Общие проверки полей записей

pub fn require_non_empty(value: &str, what: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", what));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(format!("Invalid email: {}", email)),
    }
}

/// Телефон: ровно 10 цифр (мобильный номер без кода страны)
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 || digits.len() != phone.trim().len() {
        return Err("Phone must contain 10 digits".into());
    }
    Ok(())
}

pub fn require_non_negative(value: f64, what: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must not be negative", what));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("rahul.sharma@example.com").is_ok());
        assert!(validate_email("rahul.sharma").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@localhost").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("987654321").is_err());
        assert!(validate_phone("98765-43210").is_err());
        assert!(validate_phone("98765432ab").is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative(0.0, "Price").is_ok());
        assert!(require_non_negative(-1.0, "Price").is_err());
        assert!(require_non_negative(f64::NAN, "Price").is_err());
    }

    #[test]
    fn test_messages_are_shown_in_english() {
        assert_eq!(require_non_empty(" ", "Name"), Err("Name must not be empty".to_string()));
        assert_eq!(
            require_non_negative(-5.0, "Price"),
            Err("Price must not be negative".to_string())
        );
        assert_eq!(validate_email("x"), Err("Invalid email: x".to_string()));
        assert_eq!(validate_phone("123"), Err("Phone must contain 10 digits".to_string()));
    }
}
