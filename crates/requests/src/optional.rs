//! Optional trailing arguments shared by search and query.

use crate::error::ParamError;
use crate::tokens::{parse_float, split_csv};

/// Present, non-blank input, or `None`.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

/// Split an optional comma-separated name list.
pub(crate) fn optional_csv(raw: Option<&str>) -> Option<Vec<Box<str>>> {
    present(raw).map(split_csv)
}

/// Parse an optional timeout in seconds.
///
/// Beyond rejecting text that is not a float, this also rejects negative and
/// non-finite values such as `-1` or `inf`, which a plain float parse would
/// accept. A timeout below zero has no meaning for a client call.
pub(crate) fn optional_timeout(raw: Option<&str>) -> Result<Option<f64>, ParamError> {
    let Some(raw) = present(raw) else {
        return Ok(None);
    };
    match parse_float(raw) {
        Some(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(Some(seconds)),
        _ => Err(ParamError::InvalidTimeout { input: raw.into() }),
    }
}
