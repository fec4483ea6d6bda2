//! Linear-domain probability normalization.
//!
//! Values are shifted by `f64::EPSILON` before summing so that an all-zero lane
//! normalizes to a uniform distribution instead of `0 / 0`.

use ndarray::{Array, ArrayBase, Axis, Data, DataMut, RemoveAxis};
use tracing::debug;

use crate::error::{check_axis, Result};

/// Rescale `a` in place so that it sums to 1 along `axis`, or over the whole
/// array when `axis` is `None`.
///
/// Inputs are expected to be non-negative. A lane whose sum is still exactly
/// zero after the epsilon shift is divided by 1. The axis is validated before
/// any element is touched.
pub fn normalize_inplace<S, D>(a: &mut ArrayBase<S, D>, axis: Option<Axis>) -> Result<()>
where
    S: DataMut<Elem = f64>,
    D: RemoveAxis,
{
    if let Some(axis) = axis {
        check_axis(axis, a.ndim())?;
    }

    a.mapv_inplace(|x| x + f64::EPSILON);

    match axis {
        None => {
            let total = a.sum();
            let total = if total == 0.0 { 1.0 } else { total };
            a.mapv_inplace(|x| x / total);
        }
        Some(axis) => {
            let mut sums = a.sum_axis(axis);
            let zero_lanes = sums.iter().filter(|&&s| s == 0.0).count();
            if zero_lanes > 0 {
                debug!(zero_lanes, axis = axis.index(), "guarding zero-sum lanes");
                sums.mapv_inplace(|s| if s == 0.0 { 1.0 } else { s });
            }
            // length-1 axis so the sums broadcast back over `a`
            *a /= &sums.insert_axis(axis);
        }
    }

    Ok(())
}

/// Same as [`normalize_inplace`] but leaves `a` untouched and returns a new array.
pub fn normalize<S, D>(a: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    let mut out = a.to_owned();
    normalize_inplace(&mut out, axis)?;
    Ok(out)
}
