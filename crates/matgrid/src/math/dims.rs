use std::fmt;

use serde::{Deserialize, Serialize};

/// The (rows, columns) pair describing a matrix shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, `rows * columns`.
    ///
    /// Panics on overflow; shapes held by a `Matrix` never overflow.
    pub fn size(&self) -> usize {
        self.checked_size()
            .unwrap_or_else(|| panic!("shape {} overflows usize", self))
    }

    /// `rows * columns`, or `None` when the product does not fit in `usize`.
    pub fn checked_size(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// The shape with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        Self::new(self.columns, self.rows)
    }

    /// True when either side is zero.
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}

impl From<Dimensions> for (usize, usize) {
    fn from(value: Dimensions) -> Self {
        (value.rows, value.columns)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_json_object() {
        let dims: Dimensions = serde_json::from_str(r#"{"rows": 9, "columns": 15}"#).unwrap();
        assert_eq!(dims, Dimensions::new(9, 15));
        assert_eq!(dims.size(), 135);
        assert_eq!(dims.transposed().to_string(), "15x9");
    }

    #[test]
    fn checked_size_detects_overflow() {
        assert_eq!(Dimensions::new(9, 15).checked_size(), Some(135));
        assert_eq!(Dimensions::new(usize::MAX / 2 + 1, 2).checked_size(), None);
        assert_eq!(Dimensions::new(usize::MAX, 0).checked_size(), Some(0));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn size_panics_instead_of_wrapping() {
        let _ = Dimensions::new(usize::MAX / 2 + 1, 2).size();
    }

    #[test]
    fn degenerate_shapes() {
        assert!(Dimensions::new(0, 3).is_degenerate());
        assert!(Dimensions::new(3, 0).is_degenerate());
        assert!(!Dimensions::new(1, 1).is_degenerate());
    }
}
