//! Newline-delimited JSON front end over the normalization helpers.
//!
//! Each input line is a [`NormalizeRequest`]: a row-major array, its shape and
//! optionally the lengths of the sequences stacked along axis 0. When lengths
//! are given every sequence block is normalized on its own.

use std::io::{BufRead, Write};

use ndarray::{ArrayD, ArrayViewMutD, Axis, IxDyn, Slice};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Domain, StreamConfig};
use crate::error::{Result, UtilsError};
use crate::logspace::{log_normalize_inplace, logsumexp, logsumexp_all};
use crate::normalize::normalize_inplace;
use crate::segments::iter_segments;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub t: u64,
    pub shape: Vec<usize>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub lengths: Option<Vec<usize>>,
    /// Missing: use the configured axis. `null`: normalize the whole array
    /// (or each whole sequence). A number: that axis.
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub axis: Option<Option<usize>>,
    #[serde(default)]
    pub domain: Option<Domain>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub t: u64,
    pub domain: Domain,
    pub shape: Vec<usize>,
    pub values: Vec<f64>,
    pub segments: Vec<(usize, usize)>,
    // per segment: lane sums (linear) or lane log-sum-exps (log) after normalization
    pub lane_totals: Vec<f64>,
}

// Keeps `null` distinct from a missing field: missing stays `None` via
// `#[serde(default)]`, `null` becomes `Some(None)`.
fn explicit_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn normalize_block(
    mut block: ArrayViewMutD<'_, f64>,
    axis: Option<Axis>,
    domain: Domain,
) -> Result<Vec<f64>> {
    match domain {
        Domain::Linear => {
            normalize_inplace(&mut block, axis)?;
            Ok(match axis {
                Some(axis) => block.sum_axis(axis).iter().copied().collect(),
                None => vec![block.sum()],
            })
        }
        Domain::Log => {
            log_normalize_inplace(&mut block, axis)?;
            Ok(match axis {
                Some(axis) => logsumexp(&block, axis)?.iter().copied().collect(),
                None => vec![logsumexp_all(&block)],
            })
        }
    }
}

/// Normalizes one request. Request-level `axis` and `domain` override `cfg`.
pub fn process_request(req: &NormalizeRequest, cfg: &StreamConfig) -> Result<NormalizeResult> {
    let expected = req
        .shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .unwrap_or(usize::MAX);
    if expected != req.values.len() {
        return Err(UtilsError::ShapeMismatch {
            expected,
            got: req.values.len(),
        });
    }

    let mut a = ArrayD::from_shape_vec(IxDyn(&req.shape), req.values.clone()).map_err(|_| {
        UtilsError::ShapeMismatch {
            expected,
            got: req.values.len(),
        }
    })?;

    let axis = req.axis.unwrap_or(cfg.axis).map(Axis);
    let domain = req.domain.unwrap_or(cfg.domain);

    let (segments, lane_totals) = match req.lengths.as_deref() {
        None => {
            let n_samples = req.shape.first().copied().unwrap_or(1);
            let totals = normalize_block(a.view_mut(), axis, domain)?;
            (vec![(0, n_samples)], totals)
        }
        Some(lengths) => {
            if a.ndim() == 0 {
                return Err(UtilsError::AxisOutOfBounds { axis: 0, ndim: 0 });
            }
            let segments: Vec<_> = iter_segments(a.len_of(Axis(0)), Some(lengths))?.collect();
            let mut totals = Vec::new();
            for &(start, end) in &segments {
                let block = a.slice_axis_mut(Axis(0), Slice::from(start..end));
                totals.extend(normalize_block(block, axis, domain)?);
            }
            (segments, totals)
        }
    };

    debug!(t = req.t, segments = segments.len(), ?domain, "request normalized");

    Ok(NormalizeResult {
        t: req.t,
        domain,
        shape: req.shape.clone(),
        values: a.iter().copied().collect(),
        segments,
        lane_totals,
    })
}

/// Parses requests line by line, skipping blank lines.
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = Result<NormalizeRequest>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(
            serde_json::from_str::<NormalizeRequest>(&line).map_err(UtilsError::from),
        ),
        Err(e) => Some(Err(UtilsError::Io(e))),
    })
}

pub fn write_ndjson<W: Write, T: Serialize>(w: &mut W, row: &T) -> Result<()> {
    serde_json::to_writer(&mut *w, row)?;
    writeln!(w)?;
    Ok(())
}
