pub mod config;
pub mod error;
pub mod logging;
pub mod logspace;
pub mod normalize;
pub mod segments;
pub mod stream;

pub use error::{Result, UtilsError};
pub use logspace::{log_normalize, log_normalize_inplace, logsumexp, logsumexp_all};
pub use normalize::{normalize, normalize_inplace};
pub use segments::{iter_segments, split_rows, Segments};
