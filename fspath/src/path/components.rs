//! The canonical component sequence behind every [`FsPath`](super::FsPath).
//!
//! Component 0 is a root sentinel (`/` on Unix, a drive root such as `C:\`
//! on Windows). The remaining components are segment names in path order.
//! The sequence is kept canonical: no empty segments, no `.` segments, and
//! `..` always consumes the segment before it (never the root).

use std::path::MAIN_SEPARATOR_STR;

use crate::error::{Error, Result};
use crate::sequence::{self, Slice};

/// Ordered path segments with a protected root sentinel at index 0.
///
/// # Examples
///
/// ```
/// use fspath::path::Components;
///
/// let components = Components::parse("/usr//local/./bin/");
/// assert_eq!(components.len(), 4);
/// assert_eq!(components.leaf(), "bin");
/// # #[cfg(unix)]
/// assert_eq!(components.render(), "/usr/local/bin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Components {
    parts: Vec<String>,
}

impl Components {
    /// Parses an absolute path string into canonical components.
    ///
    /// Text without a recognizable root is treated as starting at the root.
    #[must_use]
    pub fn parse(absolute: &str) -> Self {
        let (root, rest) = split_root(absolute);
        let mut parts = vec![root];
        push_segments(&mut parts, rest.split(is_separator));
        Self { parts }
    }

    /// The root-only sequence.
    #[must_use]
    pub fn root() -> Self {
        Self::parse(MAIN_SEPARATOR_STR)
    }

    /// Splits `text` into relative segment names, dropping empty segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::path::Components;
    ///
    /// assert_eq!(Components::parse_relative("share//somelib/"), ["share", "somelib"]);
    /// assert!(Components::parse_relative("").is_empty());
    /// ```
    #[must_use]
    pub fn parse_relative(text: &str) -> Vec<String> {
        text.split(is_separator)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Joins the components back into a string.
    ///
    /// The root sentinel is emitted literally; the remaining components are
    /// joined by the platform separator.
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered = self.parts[0].clone();
        rendered.push_str(&self.parts[1..].join(MAIN_SEPARATOR_STR));
        rendered
    }

    /// Total number of components, root included. Always at least 1.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if only the root sentinel remains.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parts.len() == 1
    }

    /// The last segment name, or an empty string for the root-only path.
    #[must_use]
    pub fn leaf(&self) -> &str {
        if self.is_root() {
            ""
        } else {
            &self.parts[self.parts.len() - 1]
        }
    }

    /// All components, root sentinel first.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.parts
    }

    /// The component at `index` (negative indices count from the end).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an index outside the sequence.
    pub fn get(&self, index: isize) -> Result<&str> {
        let at = sequence::normalize_index(index, self.len())?;
        Ok(&self.parts[at])
    }

    /// The ancestor sequence made of components `0..=index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an index outside the sequence.
    pub fn prefix_through(&self, index: isize) -> Result<Self> {
        let at = sequence::normalize_index(index, self.len())?;
        Ok(Self {
            parts: self.parts[..=at].to_vec(),
        })
    }

    /// Appends the segments of `name` after the last component.
    pub fn push(&mut self, name: &str) {
        push_segments(&mut self.parts, name.split(is_separator));
    }

    /// Replaces the component at `index` with the segments of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an index outside the sequence and
    /// [`Error::InvalidOperation`] for the root sentinel.
    pub fn replace(&mut self, index: isize, value: &str) -> Result<()> {
        let slice = sequence::index_slice(index, self.len())?;
        self.replace_range(slice, value)
    }

    /// Splices the segments of `value` into the selected range.
    ///
    /// The replacement can hold more or fewer segments than the range it
    /// replaces. An empty range inserts at its start.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the range starts at the root
    /// sentinel.
    pub fn replace_range(&mut self, slice: Slice, value: &str) -> Result<()> {
        let (start, _) = slice.bounds(self.len());
        if start == 0 {
            return Err(Error::InvalidOperation {
                reason: format!("cannot replace the root component (range {slice})"),
            });
        }
        sequence::splice(&mut self.parts, slice, Self::parse_relative(value));
        self.canonicalize();
        Ok(())
    }

    /// Removes the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an index outside the sequence and
    /// [`Error::InvalidOperation`] for the root sentinel.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        let at = sequence::normalize_index(index, self.len())?;
        if at == 0 {
            return Err(Error::InvalidOperation {
                reason: "cannot delete the root component".to_string(),
            });
        }
        self.parts.remove(at);
        Ok(())
    }

    /// Removes the selected range.
    ///
    /// A non-empty range that covers the root sentinel collapses the
    /// sequence to the root-only path.
    pub fn delete_range(&mut self, slice: Slice) {
        if slice.is_empty_in(self.len()) {
            return;
        }
        if slice.bounds(self.len()).0 == 0 {
            self.parts.truncate(1);
        } else {
            sequence::delete(&mut self.parts, slice);
        }
    }

    /// Re-applies the canonical rules to the segments after a splice.
    fn canonicalize(&mut self) {
        let segments = self.parts.split_off(1);
        push_segments(&mut self.parts, segments.iter().map(String::as_str));
    }
}

fn is_separator(c: char) -> bool {
    std::path::is_separator(c)
}

/// Appends segments to `parts`, skipping `.` and empty names and letting `..`
/// consume the previous segment. The root at index 0 is never consumed.
fn push_segments<'a>(parts: &mut Vec<String>, segments: impl IntoIterator<Item = &'a str>) {
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.len() > 1 {
                    parts.pop();
                }
            }
            name => parts.push(name.to_string()),
        }
    }
}

#[cfg(windows)]
fn split_root(absolute: &str) -> (String, &str) {
    let bytes = absolute.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let root = format!("{}{MAIN_SEPARATOR_STR}", &absolute[..2]);
        (root, &absolute[2..])
    } else {
        (MAIN_SEPARATOR_STR.to_string(), absolute)
    }
}

#[cfg(not(windows))]
fn split_root(absolute: &str) -> (String, &str) {
    (MAIN_SEPARATOR_STR.to_string(), absolute)
}
