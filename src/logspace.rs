use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, DataMut, Dimension, RemoveAxis};
use tracing::debug;

use crate::error::{check_axis, Result};

// max + ln(sum(exp(x - max))); the shift falls back to 0 for non-finite maxima
// so an all -inf lane gives -inf rather than NaN.
fn lane_logsumexp(lane: ArrayView1<f64>) -> f64 {
    let max = lane.fold(f64::NEG_INFINITY, |m, &x| m.max(x));
    let shift = if max.is_finite() { max } else { 0.0 };
    shift + lane.iter().map(|&x| (x - shift).exp()).sum::<f64>().ln()
}

/// Log-sum-exp of each lane along `axis`.
pub fn logsumexp<S, D>(a: &ArrayBase<S, D>, axis: Axis) -> Result<Array<f64, D::Smaller>>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    check_axis(axis, a.ndim())?;
    Ok(a.map_axis(axis, lane_logsumexp))
}

/// Log-sum-exp over every element of `a`.
pub fn logsumexp_all<S, D>(a: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let max = a.fold(f64::NEG_INFINITY, |m, &x| m.max(x));
    let shift = if max.is_finite() { max } else { 0.0 };
    shift + a.iter().map(|&x| (x - shift).exp()).sum::<f64>().ln()
}

/// Shift log-weights in place so that `exp(a)` sums to 1 along `axis`
/// (over the whole array when `axis` is `None`).
///
/// Lanes whose log-sum is `-inf` carry no probability mass and are left as
/// they are. `+inf` and NaN inputs propagate.
pub fn log_normalize_inplace<S, D>(a: &mut ArrayBase<S, D>, axis: Option<Axis>) -> Result<()>
where
    S: DataMut<Elem = f64>,
    D: RemoveAxis,
{
    match axis {
        None => {
            let lse = logsumexp_all(&*a);
            if lse == f64::NEG_INFINITY {
                debug!("array has no probability mass, leaving it unchanged");
                return Ok(());
            }
            a.mapv_inplace(|x| x - lse);
        }
        Some(axis) => {
            let lse = logsumexp(&*a, axis)?;
            let empty_lanes = lse.iter().filter(|&&l| l == f64::NEG_INFINITY).count();
            if empty_lanes > 0 {
                debug!(
                    empty_lanes,
                    axis = axis.index(),
                    "skipping lanes with no probability mass"
                );
            }
            a.zip_mut_with(&lse.insert_axis(axis), |x, &l| {
                if l != f64::NEG_INFINITY {
                    *x -= l;
                }
            });
        }
    }

    Ok(())
}

/// Same as [`log_normalize_inplace`] but returns a new array.
pub fn log_normalize<S, D>(a: &ArrayBase<S, D>, axis: Option<Axis>) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    let mut out = a.to_owned();
    log_normalize_inplace(&mut out, axis)?;
    Ok(out)
}
