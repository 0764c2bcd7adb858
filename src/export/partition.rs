use std::num::NonZeroUsize;

/// Split `items` into exactly `chunks` contiguous, in-order slices.
///
/// Chunk `i` covers `[i * len / chunks, (i + 1) * len / chunks)`, so sizes
/// differ by at most one and the slices concatenate back to `items`. With
/// fewer items than chunks, some chunks are empty. `chunks == 0` is treated
/// as one.
pub fn partition<T>(items: &[T], chunks: usize) -> Vec<&[T]> {
    let chunks = chunks.max(1);
    let len = items.len();
    (0..chunks)
        .map(|i| &items[i * len / chunks..(i + 1) * len / chunks])
        .collect()
}

/// Number of workers to export with.
///
/// An explicit `fixed` count wins; otherwise `per_core` workers for every
/// unit of available parallelism.
pub fn worker_count(parallelism: NonZeroUsize, per_core: usize, fixed: Option<usize>) -> usize {
    match fixed {
        Some(n) => n.max(1),
        None => parallelism.get().saturating_mul(per_core).max(1),
    }
}
