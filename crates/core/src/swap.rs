//! The swap operation
//!
//! Exchanges the values held at two storage locations.
//!
//! ## Aliasing
//!
//! [`exchange`] takes two `&mut T` borrows. Two live mutable borrows of the
//! same location cannot coexist, so a self-swap is rejected at compile time
//! and the function needs no runtime check. [`exchange_at`] addresses slots
//! by index, where the compiler can no longer tell, and rejects `i == j`
//! before touching the slice.

use crate::error::{Error, Result};
use tracing::{trace, warn};

/// Exchange the values behind `a` and `b`.
///
/// After the call `*a` holds the old `*b` and `*b` holds the old `*a`.
/// Nothing else is touched. Constant time, cannot fail.
///
/// ```
/// use cellswap_core::exchange;
///
/// let mut m = 100;
/// let mut n = 200;
/// exchange(&mut m, &mut n);
/// assert_eq!((m, n), (200, 100));
/// ```
#[inline]
pub fn exchange<T: Copy>(a: &mut T, b: &mut T) {
    let temp = *a;
    *a = *b;
    *b = temp;
}

/// Value-returning form of [`exchange`]: the caller rebinds.
///
/// ```
/// use cellswap_core::exchanged;
///
/// let (m, n) = exchanged(100, 200);
/// assert_eq!((m, n), (200, 100));
/// ```
#[inline]
pub fn exchanged<T>(a: T, b: T) -> (T, T) {
    (b, a)
}

/// Exchange slots `i` and `j` of `cells`.
///
/// Fails with [`Error::OutOfBounds`] if either index is past the end, and
/// with [`Error::Aliased`] if `i == j`. The slice is unchanged on error.
pub fn exchange_at<T: Copy>(cells: &mut [T], i: usize, j: usize) -> Result<()> {
    let len = cells.len();
    for index in [i, j] {
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
    }
    if i == j {
        warn!(index = i, "rejected self-swap");
        return Err(Error::Aliased {
            location: i.to_string(),
        });
    }

    let (lo, hi) = (i.min(j), i.max(j));
    let (head, tail) = cells.split_at_mut(hi);
    exchange(&mut head[lo], &mut tail[0]);
    trace!(i, j, "exchanged slots");
    Ok(())
}
