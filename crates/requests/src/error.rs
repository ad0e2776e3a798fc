//! Validation failures for raw CLI parameters.

use milvus_cli_domain::{FieldType, IndexParamName, IndexType, MetricType, Vocabulary};
use milvus_cli_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;
use thiserror::Error;

/// Logical category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamErrorKind {
    /// A required value was empty or absent.
    MissingRequiredValue,
    /// A composite token had the wrong number of parts.
    MalformedToken,
    /// A type, metric, or param name is not in its vocabulary.
    InvalidEnumValue,
    /// An integer or float failed to parse.
    InvalidNumericFormat,
    /// A name appeared twice within one request.
    DuplicateIdentifier,
    /// A name referenced a field that is not defined.
    CrossReferenceNotFound,
}

impl ParamErrorKind {
    /// Stable snake-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequiredValue => "missing_required_value",
            Self::MalformedToken => "malformed_token",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::InvalidNumericFormat => "invalid_numeric_format",
            Self::DuplicateIdentifier => "duplicate_identifier",
            Self::CrossReferenceNotFound => "cross_reference_not_found",
        }
    }
}

impl fmt::Display for ParamErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A rule violation found while validating CLI parameters.
///
/// Validators stop at the first violation, so a request yields at most one
/// `ParamError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Collection name is empty.
    #[error("Missing collection name.")]
    MissingName,
    /// Primary field name is empty.
    #[error("Missing primary field.")]
    MissingPrimaryField,
    /// No field descriptors were provided.
    #[error("Missing fields.")]
    MissingFields,
    /// Field descriptor is not `name:type:extra`.
    #[error("Field should contain three parameters concatenated by \":\", got `{input}`.")]
    MalformedField {
        /// Raw descriptor.
        input: Box<str>,
    },
    /// Field type token is not a known data type.
    #[error("Invalid field data type `{input}`, should be one of {}", FieldType::one_of())]
    InvalidFieldType {
        /// Raw type token.
        input: Box<str>,
    },
    /// Vector field dimension is not an integer.
    #[error("Vector's dim should be int, got `{input}` for field `{field}`.")]
    InvalidDimension {
        /// Field the dimension belongs to.
        field: Box<str>,
        /// Raw dimension token.
        input: Box<str>,
    },
    /// Two fields share a name.
    #[error("Field names are duplicated: `{name}`.")]
    DuplicateFieldName {
        /// Repeated field name.
        name: Box<str>,
    },
    /// Primary field is not among the declared fields.
    #[error("Primary field name `{name}` doesn't exist in input fields.")]
    PrimaryFieldNotFound {
        /// Requested primary field name.
        name: Box<str>,
    },
    /// Index type token is not a known index type.
    #[error("Invalid index type `{input}`, should be one of {}", IndexType::one_of())]
    InvalidIndexType {
        /// Raw index type token.
        input: Box<str>,
    },
    /// Metric type token is not a known metric.
    #[error("Invalid index metric type `{input}`, should be one of {}", MetricType::one_of())]
    InvalidMetricType {
        /// Raw metric token.
        input: Box<str>,
    },
    /// No index params were provided.
    #[error("Missing params.")]
    MissingParams,
    /// Param descriptor is not `name:value`.
    #[error("Params should contain two parameters concatenated by \":\", got `{input}`.")]
    MalformedParam {
        /// Raw descriptor.
        input: Box<str>,
    },
    /// Index param name is not recognized.
    #[error("Invalid index param `{input}`, should be one of {}", IndexParamName::one_of())]
    InvalidIndexParam {
        /// Raw param name.
        input: Box<str>,
    },
    /// Param value is not an integer.
    #[error("Param `{name}` value should be int, got `{input}`.")]
    InvalidParamValue {
        /// Param name.
        name: Box<str>,
        /// Raw value.
        input: Box<str>,
    },
    /// Two index params share a name.
    #[error("Index params are duplicated: `{name}`.")]
    DuplicateParam {
        /// Repeated param name.
        name: Box<str>,
    },
    /// Vector data is not a `list[list[float]]`.
    #[error("Format(list[list[float]]) \"data\" error! {reason}")]
    InvalidVectorData {
        /// Raw vector data.
        input: Box<str>,
        /// Parser error text.
        reason: Box<str>,
    },
    /// Search target field is empty.
    #[error("annsField is empty!")]
    MissingAnnsField,
    /// Search param name is not recognized.
    #[error("Invalid search parameter `{input}`, should be one of {}", IndexParamName::one_of())]
    InvalidSearchParam {
        /// Raw param name.
        input: Box<str>,
    },
    /// Limit is not an integer.
    #[error("Format(int) \"limit\" error! got `{input}`.")]
    InvalidLimit {
        /// Raw limit.
        input: Box<str>,
    },
    /// Filter expression is empty.
    #[error("expr is empty!")]
    MissingExpr,
    /// Timeout is not a finite, non-negative number of seconds.
    #[error("Format(float) \"timeout\" error! got `{input}`.")]
    InvalidTimeout {
        /// Raw timeout.
        input: Box<str>,
    },
}

impl ParamError {
    /// Logical category of this failure.
    #[must_use]
    pub const fn kind(&self) -> ParamErrorKind {
        match self {
            Self::MissingName
            | Self::MissingPrimaryField
            | Self::MissingFields
            | Self::MissingParams
            | Self::MissingAnnsField
            | Self::MissingExpr => ParamErrorKind::MissingRequiredValue,
            Self::MalformedField { .. } | Self::MalformedParam { .. } => {
                ParamErrorKind::MalformedToken
            },
            Self::InvalidFieldType { .. }
            | Self::InvalidIndexType { .. }
            | Self::InvalidMetricType { .. }
            | Self::InvalidIndexParam { .. }
            | Self::InvalidSearchParam { .. } => ParamErrorKind::InvalidEnumValue,
            Self::InvalidDimension { .. }
            | Self::InvalidParamValue { .. }
            | Self::InvalidVectorData { .. }
            | Self::InvalidLimit { .. }
            | Self::InvalidTimeout { .. } => ParamErrorKind::InvalidNumericFormat,
            Self::DuplicateFieldName { .. } | Self::DuplicateParam { .. } => {
                ParamErrorKind::DuplicateIdentifier
            },
            Self::PrimaryFieldNotFound { .. } => ParamErrorKind::CrossReferenceNotFound,
        }
    }

    /// Stable per-variant code, used as the envelope code under `params:`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::MissingPrimaryField => "missing_primary_field",
            Self::MissingFields => "missing_fields",
            Self::MalformedField { .. } => "malformed_field",
            Self::InvalidFieldType { .. } => "invalid_field_type",
            Self::InvalidDimension { .. } => "invalid_dimension",
            Self::DuplicateFieldName { .. } => "duplicate_field_name",
            Self::PrimaryFieldNotFound { .. } => "primary_field_not_found",
            Self::InvalidIndexType { .. } => "invalid_index_type",
            Self::InvalidMetricType { .. } => "invalid_metric_type",
            Self::MissingParams => "missing_params",
            Self::MalformedParam { .. } => "malformed_param",
            Self::InvalidIndexParam { .. } => "invalid_index_param",
            Self::InvalidParamValue { .. } => "invalid_param_value",
            Self::DuplicateParam { .. } => "duplicate_param",
            Self::InvalidVectorData { .. } => "invalid_vector_data",
            Self::MissingAnnsField => "missing_anns_field",
            Self::InvalidSearchParam { .. } => "invalid_search_param",
            Self::InvalidLimit { .. } => "invalid_limit",
            Self::MissingExpr => "missing_expr",
            Self::InvalidTimeout { .. } => "invalid_timeout",
        }
    }

    /// CLI argument the failure is attributed to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "collectionName",
            Self::MissingPrimaryField | Self::PrimaryFieldNotFound { .. } => "primaryField",
            Self::MissingFields
            | Self::MalformedField { .. }
            | Self::InvalidFieldType { .. }
            | Self::InvalidDimension { .. }
            | Self::DuplicateFieldName { .. } => "fields",
            Self::InvalidIndexType { .. } => "indexType",
            Self::InvalidMetricType { .. } => "metricType",
            Self::MissingParams
            | Self::MalformedParam { .. }
            | Self::InvalidIndexParam { .. }
            | Self::InvalidParamValue { .. }
            | Self::DuplicateParam { .. }
            | Self::InvalidSearchParam { .. } => "params",
            Self::InvalidVectorData { .. } => "data",
            Self::MissingAnnsField => "annsField",
            Self::InvalidLimit { .. } => "limit",
            Self::MissingExpr => "expr",
            Self::InvalidTimeout { .. } => "timeout",
        }
    }

    /// Offending raw input, when the failure has one.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::MalformedField { input }
            | Self::InvalidFieldType { input }
            | Self::InvalidDimension { input, .. }
            | Self::InvalidIndexType { input }
            | Self::InvalidMetricType { input }
            | Self::MalformedParam { input }
            | Self::InvalidIndexParam { input }
            | Self::InvalidParamValue { input, .. }
            | Self::InvalidSearchParam { input }
            | Self::InvalidVectorData { input, .. }
            | Self::InvalidLimit { input }
            | Self::InvalidTimeout { input } => Some(&**input),
            Self::DuplicateFieldName { name }
            | Self::PrimaryFieldNotFound { name }
            | Self::DuplicateParam { name } => Some(&**name),
            Self::MissingName
            | Self::MissingPrimaryField
            | Self::MissingFields
            | Self::MissingParams
            | Self::MissingAnnsField
            | Self::MissingExpr => None,
        }
    }
}

impl From<ParamError> for ErrorEnvelope {
    fn from(error: ParamError) -> Self {
        let mut envelope = Self::expected(ErrorCode::new("params", error.code()), error.to_string())
            .with_metadata("field", error.field())
            .with_metadata("kind", error.kind().as_str());

        if let Some(input) = error.input() {
            envelope = envelope.with_metadata("input", input);
        }
        match &error {
            ParamError::InvalidDimension { field, .. } => {
                envelope = envelope.with_metadata("fieldName", &**field);
            },
            ParamError::InvalidParamValue { name, .. } => {
                envelope = envelope.with_metadata("paramName", &**name);
            },
            ParamError::InvalidVectorData { reason, .. } => {
                envelope = envelope.with_metadata("reason", &**reason);
            },
            _ => {},
        }

        envelope
    }
}
