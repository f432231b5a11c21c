//! Evenly spaced query grids.
//!
//! Dense grids over the training range are the usual way a regression curve
//! is drawn. The endpoints are reproduced exactly; interior points are
//! computed as `start + i * step` so every grid is deterministic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Return `n` evenly spaced points from `start` to `end`, both inclusive.
///
/// `n = 0` yields an empty grid and `n = 1` yields `[start]`.
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let step = (end - start) / T::from(last).unwrap();
            let mut grid = Vec::with_capacity(n);
            for i in 0..last {
                grid.push(start + T::from(i).unwrap() * step);
            }
            grid.push(end);
            grid
        }
    }
}

/// Return the (min, max) of a slice, or `None` when it is empty.
pub fn range<T: Float>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
