//! Collection-definition validation.

use crate::error::ParamError;
use crate::tokens::{FieldToken, first_duplicate, parse_int};
use milvus_cli_domain::{FieldType, Vocabulary};
use milvus_cli_shared::Validated;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One field of a collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSpec {
    /// Field name, unique within the collection.
    pub name: Box<str>,
    /// Field data type.
    #[serde(rename = "type")]
    pub data_type: FieldType,
    /// Vector dimension; present exactly for vector fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<i64>,
    /// Free-form description for scalar fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Box<str>>,
}

/// Normalized collection creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CollectionDefinition {
    /// Collection name.
    pub collection_name: Box<str>,
    /// Name of the primary key field.
    pub primary_field: Box<str>,
    /// Fields in input order.
    pub fields: Vec<FieldSpec>,
}

impl CollectionDefinition {
    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| &*field.name == name)
    }
}

/// Validate `create collection` arguments.
///
/// Each field descriptor is `name:type:extra`, where `extra` is the integer
/// dimension for vector types and an optional description otherwise.
pub fn validate_collection_params(
    collection_name: &str,
    primary_field: &str,
    fields: &[impl AsRef<str>],
) -> Result<Validated<CollectionDefinition>, ParamError> {
    if collection_name.is_empty() {
        return Err(ParamError::MissingName);
    }
    if primary_field.is_empty() {
        return Err(ParamError::MissingPrimaryField);
    }
    if fields.is_empty() {
        return Err(ParamError::MissingFields);
    }

    let fields = fields
        .iter()
        .map(|raw| parse_field(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(name) = first_duplicate(fields.iter().map(|field| &*field.name)) {
        return Err(ParamError::DuplicateFieldName { name: name.into() });
    }
    if !fields.iter().any(|field| &*field.name == primary_field) {
        return Err(ParamError::PrimaryFieldNotFound {
            name: primary_field.into(),
        });
    }

    Ok(Validated::new(CollectionDefinition {
        collection_name: collection_name.into(),
        primary_field: primary_field.into(),
        fields,
    }))
}

fn parse_field(raw: &str) -> Result<FieldSpec, ParamError> {
    let token =
        FieldToken::split(raw).map_err(|_| ParamError::MalformedField { input: raw.into() })?;
    let data_type =
        FieldType::parse(token.type_token).ok_or_else(|| ParamError::InvalidFieldType {
            input: token.type_token.into(),
        })?;

    if data_type.is_vector() {
        let dim = parse_int(token.extra).ok_or_else(|| ParamError::InvalidDimension {
            field: token.name.into(),
            input: token.extra.into(),
        })?;
        return Ok(FieldSpec {
            name: token.name.into(),
            data_type,
            dim: Some(dim),
            description: None,
        });
    }

    Ok(FieldSpec {
        name: token.name.into(),
        data_type,
        dim: None,
        description: (!token.extra.is_empty()).then(|| token.extra.into()),
    })
}
