use hmm_utils::logging::init_tracing;
use hmm_utils::{iter_segments, log_normalize_inplace, normalize, split_rows};
use ndarray::{array, Array2, Axis};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let counts = array![[4.0, 1.0, 0.0], [0.0, 0.0, 0.0], [2.0, 2.0, 4.0]];
    let transmat = normalize(&counts, Some(Axis(1)))?;
    println!("Transition matrix:\n{:.6}", transmat);

    let mut log_emission = Array2::from_shape_vec(
        (2, 4),
        vec![
            -1.0,
            -2.0,
            -0.5,
            -3.0,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        ],
    )?;
    log_normalize_inplace(&mut log_emission, Some(Axis(1)))?;
    println!("Log emission matrix:\n{:.6}", log_emission);

    let lengths: [usize; 3] = [3, 3, 4];
    let x = Array2::from_shape_fn((10, 2), |(i, j)| (i * 2 + j) as f64);
    for (start, end) in iter_segments(x.nrows(), Some(&lengths))? {
        println!("segment [{start}, {end})");
    }
    for (i, seq) in split_rows(x.view(), Some(&lengths))?.enumerate() {
        println!("sequence {i}: {} rows, first = {}", seq.nrows(), seq.row(0));
    }

    Ok(())
}
