// Quality flagger - Classifies how much of a bucketed series has data
use crate::domain::sample::Bucket;
use crate::domain::trend::Sparsity;

const MIN_COMPLETE_BUCKETS: usize = 2;

/// Series with fewer non-null buckets than this are sparse
fn required_non_null(total: usize) -> usize {
    // floor(total * 0.6), in integers
    MIN_COMPLETE_BUCKETS.max(total * 3 / 5)
}

/// Empty when no bucket has a value; sparse below `max(2, floor(60%))` non-null
/// buckets. A single-bucket series is therefore always sparse, never complete.
pub fn classify(buckets: &[Bucket]) -> Sparsity {
    let non_null = buckets.iter().filter(|b| !b.is_null()).count();
    if non_null == 0 {
        return Sparsity::Empty;
    }

    if non_null < required_non_null(buckets.len()) {
        Sparsity::Sparse
    } else {
        Sparsity::Complete
    }
}
