use std::{fmt, str::FromStr};

use thiserror::Error;

/// Domain suffixes accepted for an address, checked in this order.
pub const ACCEPTED_SUFFIXES: [&str; 3] = [".com", ".ru", ".net"];

const MASK_MARKER: &str = "***@";
const MASK_VISIBLE_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid email address: {input}")]
pub struct InvalidEmailAddress {
    /// Raw input as supplied by the caller, before normalization.
    pub input: String,
}

/// A normalized, validated email address.
///
/// Equality and hashing only consider the normalized text, so two values
/// parsed from `"Bob@Mail.ru"` and `" bob@mail.ru "` are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress {
    address: String,
}

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, InvalidEmailAddress> {
        let address = Self::normalize(raw);

        if is_acceptable(&address) {
            Ok(Self { address })
        } else {
            Err(InvalidEmailAddress {
                input: raw.to_owned(),
            })
        }
    }

    /// Trims surrounding whitespace and lower-cases the input.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// Privacy-preserving form: up to two leading characters of the local
    /// part, the mask marker, then the domain.
    pub fn masked(&self) -> String {
        let (local, domain) = self.split();
        let visible: String = local.chars().take(MASK_VISIBLE_CHARS).collect();

        format!("{visible}{MASK_MARKER}{domain}")
    }

    fn split(&self) -> (&str, &str) {
        // Construction guarantees exactly one '@'.
        self.address
            .split_once('@')
            .unwrap_or((self.address.as_str(), ""))
    }
}

fn is_acceptable(address: &str) -> bool {
    if address.is_empty() || !address.contains('@') {
        return false;
    }

    let mut parts = address.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    ACCEPTED_SUFFIXES
        .iter()
        .find_map(|suffix| domain.strip_suffix(suffix))
        .is_some_and(|rest| !rest.is_empty())
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for EmailAddress {
    type Err = InvalidEmailAddress;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keeps_already_normalized_address() {
        let address = EmailAddress::parse("user@example.com").expect("address should parse");

        assert_eq!(address.address(), "user@example.com");
    }

    #[test]
    fn normalizes_case_and_surrounding_whitespace() {
        let address = EmailAddress::parse("  User@Example.COM  ").expect("address should parse");

        assert_eq!(address.address(), "user@example.com");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["  MiXeD@Case.Ru\t", "", "   ", "plain", "A@B.NET\n"] {
            let once = EmailAddress::normalize(raw);

            assert_eq!(EmailAddress::normalize(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn accepts_every_allowed_suffix() {
        for raw in ["user@example.com", "user@example.ru", "user@example.net"] {
            let address = EmailAddress::parse(raw).expect("address should parse");

            assert_eq!(address.address(), raw);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let rejected = [
            "userexample.com",
            "user@example.org",
            "@example.com",
            "user@.com",
            "user@domain",
            "name@domain.comm",
            "a@b@c.com",
            "user@",
            "",
            "   ",
        ];

        for raw in rejected {
            assert!(EmailAddress::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn rejection_carries_raw_input() {
        let error = EmailAddress::parse(" Bad.Address ").expect_err("address should be rejected");

        assert_eq!(error.input, " Bad.Address ");
        assert_eq!(error.to_string(), "invalid email address:  Bad.Address ");
    }

    #[test]
    fn suffix_check_ignores_input_case() {
        let address = EmailAddress::parse("user@site.NET").expect("address should parse");

        assert_eq!(address.domain(), "site.net");
    }

    #[test]
    fn masks_local_part() {
        let address = EmailAddress::parse("alice@example.com").expect("address should parse");

        assert_eq!(address.masked(), "al***@example.com");
    }

    #[test]
    fn masks_short_local_part_with_available_characters() {
        let address = EmailAddress::parse("a@example.ru").expect("address should parse");

        assert_eq!(address.masked(), "a***@example.ru");
    }

    #[test]
    fn masks_by_character_not_byte() {
        let address = EmailAddress::parse("иван@почта.ru").expect("address should parse");

        assert_eq!(address.masked(), "ив***@почта.ru");
    }

    #[test]
    fn splits_local_part_and_domain() {
        let address = EmailAddress::parse("user.name@domain.ru").expect("address should parse");

        assert_eq!(address.local_part(), "user.name");
        assert_eq!(address.domain(), "domain.ru");
    }

    #[test]
    fn equal_normalized_addresses_collapse_in_sets() {
        let set: HashSet<EmailAddress> = ["bob@mail.ru", " BOB@mail.RU "]
            .into_iter()
            .map(|raw| raw.parse().expect("address should parse"))
            .collect();

        assert_eq!(set.len(), 1);
    }
}
