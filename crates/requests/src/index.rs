//! Index-definition validation.

use crate::error::ParamError;
use crate::tokens::{ParamToken, first_duplicate, parse_int};
use milvus_cli_domain::{IndexParamName, IndexType, MetricType, Vocabulary};
use milvus_cli_shared::Validated;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Integer index params keyed by name.
pub type IndexParams = BTreeMap<IndexParamName, i64>;

/// Normalized index creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IndexDefinition {
    /// Index algorithm.
    pub index_type: IndexType,
    /// Distance metric.
    pub metric_type: MetricType,
    /// Build params.
    pub params: IndexParams,
}

/// Validate `create index` arguments.
///
/// Params are `name:value` descriptors. Any recognized param name is
/// accepted for any index type.
pub fn validate_index_params(
    index_type: &str,
    metric_type: &str,
    params: &[impl AsRef<str>],
) -> Result<Validated<IndexDefinition>, ParamError> {
    let index_type = IndexType::parse(index_type).ok_or_else(|| ParamError::InvalidIndexType {
        input: index_type.into(),
    })?;
    let metric_type = parse_metric(metric_type)?;
    if params.is_empty() {
        return Err(ParamError::MissingParams);
    }

    let parsed = params
        .iter()
        .map(|raw| {
            parse_param(raw.as_ref(), |name| ParamError::InvalidIndexParam {
                input: name.into(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(name) = first_duplicate(parsed.iter().map(|(name, _)| name.as_str())) {
        return Err(ParamError::DuplicateParam { name: name.into() });
    }

    Ok(Validated::new(IndexDefinition {
        index_type,
        metric_type,
        params: parsed.into_iter().collect(),
    }))
}

pub(crate) fn parse_metric(raw: &str) -> Result<MetricType, ParamError> {
    MetricType::parse(raw).ok_or_else(|| ParamError::InvalidMetricType { input: raw.into() })
}

/// Parse one `name:value` descriptor.
///
/// `on_unknown` builds the error for a name outside [`IndexParamName`], so
/// index and search report unknown names differently.
pub(crate) fn parse_param(
    raw: &str,
    on_unknown: impl FnOnce(&str) -> ParamError,
) -> Result<(IndexParamName, i64), ParamError> {
    let token =
        ParamToken::split(raw).map_err(|_| ParamError::MalformedParam { input: raw.into() })?;
    let name = IndexParamName::parse(token.name).ok_or_else(|| on_unknown(token.name))?;
    let value = parse_int(token.value).ok_or_else(|| ParamError::InvalidParamValue {
        name: token.name.into(),
        input: token.value.into(),
    })?;
    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamErrorKind;
    use proptest::prelude::*;
    use std::error::Error;

    #[test]
    fn ivf_flat_with_nlist_is_accepted() -> Result<(), Box<dyn Error>> {
        let definition = validate_index_params("IVF_FLAT", "L2", &["nlist:128"])?;
        assert_eq!(definition.index_type, IndexType::IvfFlat);
        assert_eq!(definition.metric_type, MetricType::L2);
        assert_eq!(definition.params.get(&IndexParamName::Nlist), Some(&128));
        assert_eq!(definition.params.len(), 1);

        let value = serde_json::to_value(definition.as_ref())?;
        assert_eq!(
            value,
            serde_json::json!({"index_type": "IVF_FLAT", "metric_type": "L2", "params": {"nlist": 128}})
        );
        Ok(())
    }

    #[test]
    fn hnsw_params_are_case_sensitive() -> Result<(), Box<dyn Error>> {
        let definition = validate_index_params("HNSW", "IP", &["M:16", "efConstruction:200", "m:8"])?;
        assert_eq!(definition.params.get(&IndexParamName::MaxDegree), Some(&16));
        assert_eq!(definition.params.get(&IndexParamName::SubQuantizers), Some(&8));
        assert_eq!(definition.params.get(&IndexParamName::EfConstruction), Some(&200));
        Ok(())
    }

    #[test]
    fn type_then_metric_then_params_are_checked() {
        assert!(matches!(
            validate_index_params("IVF", "COSINE", &[] as &[&str]).err(),
            Some(ParamError::InvalidIndexType { input }) if &*input == "IVF"
        ));
        assert!(matches!(
            validate_index_params("FLAT", "COSINE", &[] as &[&str]).err(),
            Some(ParamError::InvalidMetricType { input }) if &*input == "COSINE"
        ));
        assert_eq!(
            validate_index_params("FLAT", "L2", &[] as &[&str]).err(),
            Some(ParamError::MissingParams)
        );
    }

    #[test]
    fn descriptor_errors_are_reported() {
        assert!(matches!(
            validate_index_params("FLAT", "L2", &["nlist"]).err(),
            Some(ParamError::MalformedParam { input }) if &*input == "nlist"
        ));
        assert!(matches!(
            validate_index_params("FLAT", "L2", &["nprobe:10"]).err(),
            Some(ParamError::InvalidIndexParam { input }) if &*input == "nprobe"
        ));
        assert!(matches!(
            validate_index_params("FLAT", "L2", &["nlist:1.5"]).err(),
            Some(ParamError::InvalidParamValue { name, input }) if &*name == "nlist" && &*input == "1.5"
        ));
    }

    #[test]
    fn unsupported_combinations_are_not_checked() -> Result<(), Box<dyn Error>> {
        let definition = validate_index_params("FLAT", "HAMMING", &["n_trees:8"])?;
        assert_eq!(definition.params.get(&IndexParamName::NTrees), Some(&8));
        Ok(())
    }

    proptest! {
        #[test]
        fn duplicate_names_rejected_even_with_equal_values(
            index in 0..IndexParamName::ALL.len(),
            value in -1000_i64..1000,
            second in prop::option::of(-1000_i64..1000),
        ) {
            let name = IndexParamName::ALL[index].as_str();
            let repeat = second.unwrap_or(value);
            let params = [format!("{name}:{value}"), format!("{name}:{repeat}")];

            let error = validate_index_params("IVF_PQ", "L2", &params).err();
            prop_assert_eq!(error.map(|error| error.kind()), Some(ParamErrorKind::DuplicateIdentifier));
        }
    }
}
