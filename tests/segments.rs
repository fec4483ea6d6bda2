use hmm_utils::{iter_segments, split_rows, UtilsError};
use ndarray::Array2;

#[test]
fn lengths_split_range_in_order() {
    let lengths = [3, 3, 4];
    let segs: Vec<_> = iter_segments(10, Some(&lengths)).unwrap().collect();
    assert_eq!(segs, vec![(0, 3), (3, 6), (6, 10)]);
}

#[test]
fn no_lengths_is_one_segment() {
    let segs: Vec<_> = iter_segments(10, None).unwrap().collect();
    assert_eq!(segs, vec![(0, 10)]);
}

#[test]
fn too_many_samples_fails_before_iterating() {
    let lengths = [3, 3];
    let err = iter_segments(5, Some(&lengths)).unwrap_err();
    match &err {
        UtilsError::InvalidSegmentLengths { n_samples, lengths } => {
            assert_eq!(*n_samples, 5);
            assert_eq!(lengths, &vec![3, 3]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "more than 5 samples in lengths array [3, 3]");
}

#[test]
fn empty_lengths_yield_nothing() {
    let lengths: [usize; 0] = [];
    let mut segs = iter_segments(0, Some(&lengths)).unwrap();
    assert_eq!(segs.len(), 0);
    assert_eq!(segs.next(), None);
    assert_eq!(segs.next(), None);
}

#[test]
fn shorter_lengths_leave_tail_uncovered() {
    let lengths = [2, 0, 1];
    let segs: Vec<_> = iter_segments(7, Some(&lengths)).unwrap().collect();
    assert_eq!(segs, vec![(0, 2), (2, 2), (2, 3)]);
}

#[test]
fn overflowing_lengths_are_rejected() {
    let lengths = [usize::MAX, 2];
    assert!(matches!(
        iter_segments(usize::MAX, Some(&lengths)),
        Err(UtilsError::InvalidSegmentLengths { .. })
    ));
}

#[test]
fn exact_size_and_restart_by_clone() {
    let lengths = [1, 2, 3];
    let mut segs = iter_segments(6, Some(&lengths)).unwrap();
    assert_eq!(segs.len(), 3);
    let first = segs.next();
    assert_eq!(first, Some((0, 1)));
    assert_eq!(segs.len(), 2);

    let rest: Vec<_> = segs.clone().collect();
    assert_eq!(rest, vec![(1, 3), (3, 6)]);
    assert_eq!(segs.collect::<Vec<_>>(), rest);
}

#[test]
fn split_rows_views_each_sequence() {
    let x = Array2::from_shape_fn((5, 2), |(i, j)| (10 * i + j) as f64);
    let lengths = [2, 3];
    let seqs: Vec<_> = split_rows(x.view(), Some(&lengths)).unwrap().collect();

    assert_eq!(seqs.len(), 2);
    assert_eq!(seqs[0].nrows(), 2);
    assert_eq!(seqs[1].nrows(), 3);
    assert_eq!(seqs[1][[0, 0]], 20.0);
    assert_eq!(seqs[1][[2, 1]], 41.0);
}

#[test]
fn split_rows_rejects_bad_lengths() {
    let x = Array2::<f64>::zeros((4, 3));
    let lengths = [2, 3];
    assert!(split_rows(x.view(), Some(&lengths)).is_err());
}
