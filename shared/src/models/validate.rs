//! Custom field validators used by the request payloads

use crate::error::MOBILE_FORMAT_CODE;
use validator::ValidationError;

/// Organization mobile: exactly 10 digits, first digit in 6-9.
pub fn validate_org_mobile(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let valid = bytes.len() == 10
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(u8::is_ascii_digit);

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(MOBILE_FORMAT_CODE)
            .with_message("Mobile number must be 10 digits and start with 6-9".into()))
    }
}

/// User mobile: exactly 10 digits.
pub fn validate_user_mobile(value: &str) -> Result<(), ValidationError> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new(MOBILE_FORMAT_CODE)
            .with_message("Mobile number must be exactly 10 digits".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_mobile() {
        assert!(validate_org_mobile("9876543210").is_ok());
        assert!(validate_org_mobile("6000000000").is_ok());
        assert!(validate_org_mobile("5876543210").is_err());
        assert!(validate_org_mobile("987654321").is_err());
        assert!(validate_org_mobile("98765432100").is_err());
        assert!(validate_org_mobile("98765a3210").is_err());
        assert!(validate_org_mobile("").is_err());
    }

    #[test]
    fn test_user_mobile() {
        assert!(validate_user_mobile("0123456789").is_ok());
        assert!(validate_user_mobile("12345").is_err());
        assert!(validate_user_mobile("90100***07").is_err());
    }

    #[test]
    fn test_error_code() {
        let err = validate_org_mobile("1").unwrap_err();
        assert_eq!(err.code, MOBILE_FORMAT_CODE);
    }
}
