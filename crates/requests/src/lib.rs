//! # milvus-cli-requests
//!
//! Turns loosely-structured CLI strings into validated request payloads.
//!
//! Four independent entry points, one per operation:
//!
//! - [`validate_collection_params`] - `create collection`
//! - [`validate_index_params`] - `create index`
//! - [`validate_search_params`] - `search`
//! - [`validate_query_params`] - `query`
//!
//! Each is a pure function returning either a [`Validated`] payload or the
//! first [`ParamError`] encountered. Parsing of the `name:type:extra` and
//! `name:value` grammars lives in [`tokens`]; the validators only apply
//! rules to the split tokens.
//!
//! ## Dependency Rules
//!
//! - Depends on `domain` and `shared` only
//! - No I/O, no logging
//!
//! [`Validated`]: milvus_cli_shared::Validated

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod collection;
pub mod error;
pub mod index;
mod optional;
pub mod query;
pub mod schema;
pub mod search;
pub mod tokens;

pub use collection::{CollectionDefinition, FieldSpec, validate_collection_params};
pub use error::{ParamError, ParamErrorKind};
pub use index::{IndexDefinition, IndexParams, validate_index_params};
pub use query::{QueryParamsInput, QueryRequest, validate_query_params};
pub use schema::{
    collection_definition_schema, index_definition_schema, query_request_schema,
    search_request_schema,
};
pub use search::{SearchParam, SearchParamsInput, SearchRequest, validate_search_params};

/// Returns the requests crate version.
#[must_use]
pub const fn requests_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use milvus_cli_domain::domain_crate_version;
    use milvus_cli_shared::{Validated, shared_crate_version};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn requests_can_use_domain_and_shared() {
        assert!(!requests_crate_version().is_empty());
        assert!(!domain_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }

    #[test]
    fn request_types_are_send_and_sync() {
        assert_send_sync::<CollectionDefinition>();
        assert_send_sync::<FieldSpec>();
        assert_send_sync::<IndexDefinition>();
        assert_send_sync::<SearchRequest>();
        assert_send_sync::<QueryRequest>();
        assert_send_sync::<ParamError>();
        assert_send_sync::<Validated<SearchRequest>>();
        assert_send_sync::<SearchParamsInput<'static>>();
        assert_send_sync::<QueryParamsInput<'static>>();
    }
}
