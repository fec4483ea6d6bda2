/// Errors raised by the normalization and segmentation helpers.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    #[error("more than {n_samples} samples in lengths array {lengths:?}")]
    InvalidSegmentLengths { n_samples: usize, lengths: Vec<usize> },

    #[error("axis {axis} out of bounds for array of dimension {ndim}")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    #[error("shape mismatch: expected {expected} values, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = UtilsError> = std::result::Result<T, E>;

pub(crate) fn check_axis(axis: ndarray::Axis, ndim: usize) -> Result<()> {
    if axis.index() >= ndim {
        return Err(UtilsError::AxisOutOfBounds {
            axis: axis.index(),
            ndim,
        });
    }
    Ok(())
}
