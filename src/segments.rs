//! Boundaries of independent sequences concatenated into one sample array.
//!
//! HMM estimation takes several observation sequences stacked row-wise plus
//! the length of each one. [`iter_segments`] turns those lengths into
//! half-open `(start, end)` row ranges.

use std::iter::FusedIterator;

use ndarray::{s, ArrayView2};
use tracing::{trace, warn};

use crate::error::{Result, UtilsError};

/// Lazy iterator over `(start, end)` row ranges, built by [`iter_segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    whole: Option<usize>,
    lengths: std::slice::Iter<'a, usize>,
    offset: usize,
}

impl Iterator for Segments<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(n_samples) = self.whole.take() {
            return Some((0, n_samples));
        }
        let start = self.offset;
        self.offset += *self.lengths.next()?;
        Some((start, self.offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.lengths.len() + usize::from(self.whole.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

/// Segment boundaries for `n_samples` rows split by `lengths`.
///
/// Without lengths the whole range `(0, n_samples)` is one segment. With
/// lengths, the segments follow each other in the given order starting at 0.
/// The lengths are checked here, before anything is yielded: if they add up
/// to more than `n_samples` the call fails with
/// [`UtilsError::InvalidSegmentLengths`].
pub fn iter_segments(n_samples: usize, lengths: Option<&[usize]>) -> Result<Segments<'_>> {
    let Some(lengths) = lengths else {
        let none: &[usize] = &[];
        return Ok(Segments {
            whole: Some(n_samples),
            lengths: none.iter(),
            offset: 0,
        });
    };

    let total = lengths.iter().try_fold(0usize, |acc, &len| acc.checked_add(len));
    match total {
        Some(total) if total <= n_samples => {
            trace!(n_samples, segments = lengths.len(), covered = total, "segment boundaries");
        }
        _ => {
            warn!(n_samples, segments = lengths.len(), "segment lengths exceed sample count");
            return Err(UtilsError::InvalidSegmentLengths {
                n_samples,
                lengths: lengths.to_vec(),
            });
        }
    }

    Ok(Segments {
        whole: None,
        lengths: lengths.iter(),
        offset: 0,
    })
}

/// Row views of `x`, one per segment of [`iter_segments`] over `x.nrows()`.
pub fn split_rows<'a>(
    x: ArrayView2<'a, f64>,
    lengths: Option<&'a [usize]>,
) -> Result<impl Iterator<Item = ArrayView2<'a, f64>> + 'a> {
    let segments = iter_segments(x.nrows(), lengths)?;
    Ok(segments.map(move |(start, end)| x.clone().slice_move(s![start..end, ..])))
}
