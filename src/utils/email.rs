use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$")
        .expect("Email regex invalid")
});

/// A syntactically valid email address.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part of the address before the `@`, used as a display name
    /// fallback.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or(&self.0)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if EMAIL_REGEX.is_match(&s) {
            Ok(Self(s))
        } else {
            Err("Invalid email format".to_owned())
        }
    }
}

impl From<EmailAddress> for String {
    fn from(addr: EmailAddress) -> Self {
        let EmailAddress(s) = addr;
        s
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::EmailAddress;

    #[test]
    fn accepts_plain_addresses() {
        assert!(EmailAddress::try_from("user@example.com").is_ok());
        assert!(EmailAddress::try_from("first.last+tag@mail.example.co.uk").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "plainaddress", "user@", "@example.com", "a b@example.com", "user@nodot"] {
            assert!(EmailAddress::try_from(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn local_part_is_prefix_before_at() {
        let addr = EmailAddress::try_from("viewer@example.com").expect("valid");
        assert_eq!(addr.local_part(), "viewer");
    }
}
