use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex must compile"));

/// Email value object for a company contact address
///
/// # Invariants
/// - Shape is `local@domain.tld` with no whitespace and a single '@'
/// - Stored verbatim; no case folding or trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use rolodex_api::domain::company::value_objects::Email;
    ///
    /// let email = Email::new("sales@acme.com").expect("valid email");
    /// assert_eq!(email.as_str(), "sales@acme.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if EMAIL_RE.is_match(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number value object: exactly ten ASCII digits, no separators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> Result<Self, String> {
        let number = number.into();
        if PHONE_RE.is_match(&number) {
            Ok(PhoneNumber(number))
        } else {
            Err(format!("Invalid phone number: {}", number))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn valid_email_with_subdomain() {
        assert!(Email::new("user@mail.example.com").is_ok());
    }

    #[test]
    fn email_kept_verbatim() {
        let email = Email::new("Sales.Team@Acme.COM").unwrap();
        assert_eq!(email.as_str(), "Sales.Team@Acme.COM");
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("invalid").is_err());
    }

    #[test]
    fn invalid_email_no_domain_dot() {
        assert!(Email::new("user@localhost").is_err());
    }

    #[test]
    fn invalid_email_whitespace() {
        assert!(Email::new("john doe@acme.com").is_err());
    }

    #[test]
    fn invalid_email_double_at() {
        assert!(Email::new("a@b@acme.com").is_err());
    }

    #[test]
    fn invalid_email_empty() {
        assert!(Email::new("").is_err());
    }

    #[test]
    fn valid_phone_number() {
        assert_eq!(PhoneNumber::new("5551234567").unwrap().as_str(), "5551234567");
    }

    #[test]
    fn invalid_phone_number_wrong_length() {
        assert!(PhoneNumber::new("555123456").is_err());
        assert!(PhoneNumber::new("55512345678").is_err());
    }

    #[test]
    fn invalid_phone_number_separators() {
        assert!(PhoneNumber::new("555-123-4567").is_err());
        assert!(PhoneNumber::new("+155512345").is_err());
    }

    #[test]
    fn invalid_phone_number_non_ascii_digits() {
        // Arabic-Indic digits zero through nine
        let arabic_indic: String = ('\u{0660}'..='\u{0669}').collect();
        assert_eq!(arabic_indic.chars().count(), 10);
        assert!(PhoneNumber::new(arabic_indic).is_err());

        // Fullwidth digits
        assert!(PhoneNumber::new("\u{FF15}\u{FF15}\u{FF15}1234567").is_err());
    }
}
