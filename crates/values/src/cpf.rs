//! CPF, the Brazilian individual taxpayer number.
//!
//! Canonical form is eleven digits (`11458201660`); the display form is
//! `DDD.DDD.DDD-DD` (`114.582.016-60`).

use std::sync::OnceLock;

use serde::{Deserialize, Serialize, Serializer};

use keel_core::{
    Component, DomainError, DomainResult, Formattable, Formatter, ValueObject, impl_value_equality,
};

/// Formatting policy shared by every [`Cpf`].
pub struct CpfFormatter;

impl CpfFormatter {
    pub const FORMATTED_PATTERN: &'static str = r"^([0-9]{3})\.([0-9]{3})\.([0-9]{3})-([0-9]{2})$";
    pub const FORMATTED_REPLACEMENT: &'static str = "${1}.${2}.${3}-${4}";
    pub const UNFORMATTED_PATTERN: &'static str = r"^([0-9]{3})([0-9]{3})([0-9]{3})([0-9]{2})$";
    pub const UNFORMATTED_REPLACEMENT: &'static str = "${1}${2}${3}${4}";

    /// Build a fresh formatter instance.
    pub fn build() -> DomainResult<Formatter> {
        Formatter::from_patterns(
            Self::FORMATTED_PATTERN,
            Self::FORMATTED_REPLACEMENT,
            Self::UNFORMATTED_PATTERN,
            Self::UNFORMATTED_REPLACEMENT,
        )
    }

    /// Process-wide instance, compiled on first use and read-only afterwards.
    pub fn shared() -> DomainResult<&'static Formatter> {
        static SHARED: OnceLock<DomainResult<Formatter>> = OnceLock::new();
        SHARED.get_or_init(Self::build).as_ref().map_err(Clone::clone)
    }
}

/// A validated CPF.
///
/// Holds only the canonical digits; the formatter is a shared policy and
/// takes no part in equality or hashing.
#[derive(Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Cpf {
    code: String,
    formatter: &'static Formatter,
}

impl Cpf {
    /// Parse either representation.
    ///
    /// Fails with `EmptyInput` for `""` and `InvalidFormat` for anything
    /// matching neither pattern.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let formatter = CpfFormatter::shared()?;
        let code = formatter.unformat(raw)?;
        Ok(Self { code, formatter })
    }

    pub fn try_parse(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }

    /// Canonical digits.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn to_display_string(&self) -> String {
        self.formatted()
    }

    /// Compare against a raw string in either representation.
    ///
    /// Empty or malformed input compares unequal instead of failing.
    pub fn equals_str(&self, raw: &str) -> bool {
        if raw.is_empty() {
            return false;
        }
        self.formatter
            .unformat(raw)
            .is_ok_and(|code| code == self.code)
    }
}

impl Formattable for Cpf {
    fn formatter(&self) -> &Formatter {
        self.formatter
    }

    fn canonical(&self) -> &str {
        &self.code
    }
}

impl ValueObject for Cpf {
    fn components(&self) -> Vec<Component<'_>> {
        vec![(&self.code).into()]
    }
}

impl_value_equality!(Cpf);

impl core::fmt::Debug for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cpf").field(&self.code).finish()
    }
}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl core::str::FromStr for Cpf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.formatted()
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::ValueObjectExt;

    #[test]
    fn canonical_input_projects_both_forms() {
        let cpf = Cpf::parse("11458201660").unwrap();
        assert_eq!(cpf.formatted(), "114.582.016-60");
        assert_eq!(cpf.unformatted(), "11458201660");
        assert_eq!(cpf.code(), "11458201660");
    }

    #[test]
    fn formatted_input_is_stored_canonically() {
        let formatted = Cpf::parse("114.582.016-60").unwrap();
        let canonical = Cpf::parse("11458201660").unwrap();
        assert_eq!(formatted.code(), "11458201660");
        assert_eq!(formatted, canonical);
        assert_eq!(formatted.structural_hash(), canonical.structural_hash());
    }

    #[test]
    fn short_input_is_invalid_format() {
        match Cpf::parse("123").unwrap_err() {
            DomainError::InvalidFormat(_) => {}
            other => panic!("Expected InvalidFormat error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            Cpf::parse("").unwrap_err(),
            DomainError::EmptyInput { field: "value" }
        );
        assert!(Cpf::try_parse("").is_none());
    }

    #[test]
    fn partially_punctuated_input_is_rejected() {
        assert!(Cpf::try_parse("114582016-60").is_none());
        assert!(Cpf::try_parse("114.582.01660").is_none());
        assert!(Cpf::try_parse(" 11458201660").is_none());
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert!(Cpf::try_parse("١١٤٥٨٢٠١٦٦٠").is_none());
    }

    #[test]
    fn equals_str_accepts_either_representation() {
        let cpf = Cpf::parse("11458201660").unwrap();
        assert!(cpf.equals_str("11458201660"));
        assert!(cpf.equals_str("114.582.016-60"));
        assert!(!cpf.equals_str("11458201661"));
        assert!(!cpf.equals_str(""));
        assert!(!cpf.equals_str("garbage"));
    }

    #[test]
    fn string_conversions() {
        let cpf: Cpf = "114.582.016-60".parse().unwrap();
        assert_eq!(cpf.to_string(), "114.582.016-60");
        assert_eq!(cpf.to_display_string(), "114.582.016-60");
        assert_eq!(String::from(cpf.clone()), "114.582.016-60");
        assert_eq!(Cpf::try_from("11458201660").unwrap(), cpf);
        assert_eq!(Cpf::try_from("11458201660".to_string()).unwrap(), cpf);
        assert!(Cpf::try_from("1").is_err());
    }

    #[test]
    fn debug_shows_only_canonical_code() {
        let cpf = Cpf::parse("11458201660").unwrap();
        assert_eq!(format!("{cpf:?}"), "Cpf(\"11458201660\")");
    }

    #[test]
    fn serializes_as_canonical_string() {
        let cpf = Cpf::parse("114.582.016-60").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), "\"11458201660\"");

        let back: Cpf = serde_json::from_str("\"114.582.016-60\"").unwrap();
        assert_eq!(back, cpf);
        assert!(serde_json::from_str::<Cpf>("\"123\"").is_err());
    }

    #[test]
    fn shared_formatter_is_a_single_instance() {
        let a = CpfFormatter::shared().unwrap();
        let b = CpfFormatter::shared().unwrap();
        assert!(std::ptr::eq(a, b));
        let x = Cpf::parse("11458201660").unwrap();
        assert!(std::ptr::eq(x.formatter(), a));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: both representations of the same digits build equal values.
            #[test]
            fn representations_are_interchangeable(digits in "[0-9]{11}") {
                let canonical = Cpf::parse(&digits).unwrap();
                let formatted = Cpf::parse(&canonical.formatted()).unwrap();
                prop_assert_eq!(&canonical, &formatted);
                prop_assert_eq!(canonical.structural_hash(), formatted.structural_hash());
                prop_assert_eq!(formatted.code(), digits.as_str());
            }

            /// Property: projections are idempotent.
            #[test]
            fn projections_are_idempotent(digits in "[0-9]{11}") {
                let cpf = Cpf::parse(&digits).unwrap();
                let formatter = cpf.formatter();
                let formatted = cpf.formatted();
                prop_assert_eq!(formatter.format(&formatted).unwrap(), formatted.clone());
                prop_assert_eq!(formatter.unformat(&cpf.unformatted()).unwrap(), cpf.unformatted());
            }

            /// Property: digit strings of the wrong length never parse.
            #[test]
            fn wrong_lengths_are_rejected(digits in "[0-9]{1,10}|[0-9]{12,15}") {
                prop_assert!(matches!(Cpf::parse(&digits), Err(DomainError::InvalidFormat(_))));
            }
        }
    }
}
