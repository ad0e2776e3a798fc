//! # milvus-cli-domain
//!
//! Closed vocabularies shared by every request validator:
//!
//! - **Fields** - `FieldType`
//! - **Indexes** - `IndexType`, `IndexParamName`
//! - **Metrics** - `MetricType`
//!
//! Each vocabulary has exactly one canonical definition here, so the set of
//! accepted tokens and the "should be one of" messages can never drift apart
//! between validators.
//!
//! ## Dependency Rules
//!
//! - No workspace dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod field;
pub mod index;
pub mod metric;
pub mod vocabulary;

pub use field::FieldType;
pub use index::{IndexParamName, IndexType};
pub use metric::MetricType;
pub use vocabulary::{UnknownToken, Vocabulary};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    fn assert_canonical<V>() -> Result<(), TestCaseError>
    where
        V: Vocabulary + serde::Serialize + PartialEq + std::fmt::Debug,
    {
        for variant in V::ALL {
            prop_assert_eq!(V::parse(variant.as_str()), Some(*variant));
            let encoded = serde_json::to_value(variant)
                .map_err(|error| TestCaseError::fail(error.to_string()))?;
            prop_assert_eq!(encoded.as_str(), Some(variant.as_str()));
        }
        Ok(())
    }

    #[test]
    fn domain_crate_compiles() {
        assert!(!domain_crate_version().is_empty());
    }

    #[test]
    fn serde_names_match_canonical_tokens() -> Result<(), TestCaseError> {
        assert_canonical::<FieldType>()?;
        assert_canonical::<IndexType>()?;
        assert_canonical::<MetricType>()?;
        assert_canonical::<IndexParamName>()?;
        Ok(())
    }

    #[test]
    fn unknown_token_names_its_vocabulary() {
        let error = "COSINE".parse::<MetricType>().err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("unknown metric type `COSINE`".to_owned())
        );
    }

    proptest! {
        #[test]
        fn tokens_outside_vocabulary_are_rejected(token in "[a-zA-Z_0-9]{0,16}") {
            let known = MetricType::ALL.iter().any(|metric| metric.as_str() == token);
            prop_assert_eq!(MetricType::parse(&token).is_some(), known);

            let known = IndexParamName::ALL.iter().any(|param| param.as_str() == token);
            prop_assert_eq!(IndexParamName::parse(&token).is_some(), known);
        }

        #[test]
        fn field_type_parse_is_exact(index in 0..FieldType::ALL.len(), pad in "[ ]{1,3}") {
            let field_type = FieldType::ALL[index];
            let padded = format!("{pad}{}", field_type.as_str());
            prop_assert_eq!(FieldType::parse(&padded), None);
            prop_assert_eq!(FieldType::parse(field_type.as_str()), Some(field_type));
        }
    }
}
