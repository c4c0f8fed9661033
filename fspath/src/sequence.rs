//! Array-slice operations over ordered sequences.
//!
//! These helpers give any `Vec<T>` the conventional slice semantics used by
//! path components: negative indices count from the end, open-ended ranges
//! run to the corresponding end, out-of-range slice bounds are clamped, and
//! an empty range (`start >= stop`) is valid rather than an error.
//!
//! ```
//! use fspath::sequence::{self, Slice};
//!
//! let mut items = vec!["a", "b", "c", "d"];
//! sequence::splice(&mut items, Slice::from(1..-1), ["x"]);
//! assert_eq!(items, ["a", "x", "d"]);
//!
//! sequence::delete(&mut items, Slice::from(-1..));
//! assert_eq!(items, ["a", "x"]);
//! ```

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::{Error, Result};

/// A half-open `[start, stop)` selection whose bounds may be negative or
/// omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    /// First selected index; `None` means the beginning.
    pub start: Option<isize>,
    /// One past the last selected index; `None` means the end.
    pub stop: Option<isize>,
}

impl Slice {
    /// Creates a slice from optional bounds.
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self { start, stop }
    }

    /// Selects the whole sequence.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(None, None)
    }

    /// Resolves the slice against a sequence of `len` items.
    ///
    /// The returned bounds satisfy `start <= stop <= len`. A slice whose
    /// start lies at or past its stop resolves to the empty range at `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::sequence::Slice;
    ///
    /// assert_eq!(Slice::from(-3..-1).bounds(4), (1, 3));
    /// assert_eq!(Slice::from(2..).bounds(4), (2, 4));
    /// assert_eq!(Slice::from(3..1).bounds(4), (3, 3));
    /// assert_eq!(Slice::from(..10).bounds(4), (0, 4));
    /// ```
    #[must_use]
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = self.start.map_or(0, |s| clamp_bound(s, len));
        let stop = self.stop.map_or(len, |s| clamp_bound(s, len));
        (start, stop.max(start))
    }

    /// Returns true if the slice selects nothing in a sequence of `len` items.
    #[must_use]
    pub fn is_empty_in(&self, len: usize) -> bool {
        let (start, stop) = self.bounds(len);
        start == stop
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end))
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Clamps a possibly negative slice bound into `[0, len]`.
fn clamp_bound(bound: isize, len: usize) -> usize {
    let len_signed = signed_len(len);
    let absolute = if bound < 0 { len_signed + bound } else { bound };
    usize::try_from(absolute.clamp(0, len_signed)).unwrap_or(0)
}

/// Normalizes a single index against a sequence of `len` items.
///
/// Negative indices count from the end (`-1` is the last item).
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the normalized index does not address an
/// item.
///
/// # Examples
///
/// ```
/// use fspath::sequence::normalize_index;
///
/// assert_eq!(normalize_index(-1, 4).unwrap(), 3);
/// assert_eq!(normalize_index(2, 4).unwrap(), 2);
/// assert!(normalize_index(4, 4).is_err());
/// assert!(normalize_index(-5, 4).is_err());
/// ```
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let len_signed = signed_len(len);
    let absolute = if index < 0 { len_signed + index } else { index };
    if (0..len_signed).contains(&absolute) {
        usize::try_from(absolute).map_err(|_| Error::OutOfRange { index, len })
    } else {
        Err(Error::OutOfRange { index, len })
    }
}

/// Returns the single-item slice addressing `index`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the index does not address an item.
pub fn index_slice(index: isize, len: usize) -> Result<Slice> {
    let at = signed_len(normalize_index(index, len)?);
    Ok(Slice::from(at..at + 1))
}

/// Replaces the selected range with `replacement`.
///
/// The replacement may be longer or shorter than the range; an empty range
/// inserts at its start. Returns the resolved `(start, stop)` bounds of the
/// replaced range.
pub fn splice<T, I>(items: &mut Vec<T>, slice: Slice, replacement: I) -> (usize, usize)
where
    I: IntoIterator<Item = T>,
{
    let (start, stop) = slice.bounds(items.len());
    items.splice(start..stop, replacement);
    (start, stop)
}

/// Removes the selected range, shifting later items left.
///
/// Returns the resolved `(start, stop)` bounds of the removed range.
pub fn delete<T>(items: &mut Vec<T>, slice: Slice) -> (usize, usize) {
    let (start, stop) = slice.bounds(items.len());
    items.drain(start..stop);
    (start, stop)
}
