//! JSON Schema exports for normalized request payloads.

use crate::{CollectionDefinition, IndexDefinition, QueryRequest, SearchRequest};
use schemars::{Schema, schema_for};

/// JSON Schema for `CollectionDefinition`.
#[must_use]
pub fn collection_definition_schema() -> Schema {
    schema_for!(CollectionDefinition)
}

/// JSON Schema for `IndexDefinition`.
#[must_use]
pub fn index_definition_schema() -> Schema {
    schema_for!(IndexDefinition)
}

/// JSON Schema for `SearchRequest`.
#[must_use]
pub fn search_request_schema() -> Schema {
    schema_for!(SearchRequest)
}

/// JSON Schema for `QueryRequest`.
#[must_use]
pub fn query_request_schema() -> Schema {
    schema_for!(QueryRequest)
}
