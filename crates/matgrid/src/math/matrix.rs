use std::fmt;
use std::ops::{Add, Index, IndexMut};

use log::{debug, warn};
use num_traits::Zero;

use crate::error::{MatrixError, Result};
use crate::math::dims::Dimensions;
use crate::math::element::Element;

/// Dense row-major matrix.
///
/// `dims` is declared before `data` so the derived `PartialEq` rejects
/// differently shaped matrices before looking at any cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    dims: Dimensions,
    data: Vec<T>,
}

/// Outcome of a distribution call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    /// Values written into the matrix.
    pub placed: usize,
    /// Input values left over once every cell was filled.
    pub discarded: usize,
    /// Row candidates rejected for being empty or wider than the matrix.
    pub skipped_rows: Vec<usize>,
}

impl Distribution {
    /// True when every input value landed in the matrix.
    pub fn is_complete(&self) -> bool {
        self.discarded == 0 && self.skipped_rows.is_empty()
    }
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let dims = Dimensions::from(shape);
        if dims.checked_size() != Some(data.len()) {
            return Err(MatrixError::ShapeError {
                rows: dims.rows,
                cols: dims.columns,
                len: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Build a matrix from a row store and the shape it claims to have.
    pub fn with_store(store: Vec<Vec<T>>, dims: Dimensions) -> Result<Self> {
        let size = match dims.checked_size() {
            Some(size) if store.len() == dims.rows => size,
            _ => {
                return Err(MatrixError::ShapeError {
                    rows: dims.rows,
                    cols: dims.columns,
                    len: store.iter().map(Vec::len).sum(),
                })
            }
        };
        let mut data = Vec::with_capacity(size);
        for (row, values) in store.into_iter().enumerate() {
            if values.len() != dims.columns {
                return Err(MatrixError::InconsistentStore {
                    row,
                    expected: dims.columns,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { dims, data })
    }

    /// Build a matrix from rows; the column count is taken from the first row.
    pub fn from_rows(store: Vec<Vec<T>>) -> Result<Self> {
        let columns = store.first().map_or(0, Vec::len);
        let dims = Dimensions::new(store.len(), columns);
        Self::with_store(store, dims)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn nrows(&self) -> usize {
        self.dims.rows
    }

    pub fn ncols(&self) -> usize {
        self.dims.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.dims.rows, self.dims.columns)
    }

    /// Number of cells, always `rows * columns`.
    pub fn size(&self) -> usize {
        self.dims.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.dims.columns + col
    }

    /// Borrow one row. Panics when `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.dims.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.dims.columns]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.dims.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        let end = start + self.dims.columns;
        &mut self.data[start..end]
    }

    pub fn try_row(&self, row: usize) -> Result<&[T]> {
        if row >= self.dims.rows {
            return Err(MatrixError::RowOutOfBounds {
                row,
                rows: self.dims.rows,
            });
        }
        Ok(self.row(row))
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.dims.rows).map(move |r| self.row(r))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dims.rows && col < self.dims.columns {
            self.data.get(self.offset(row, col))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.dims.rows && col < self.dims.columns {
            let offset = self.offset(row, col);
            self.data.get_mut(offset)
        } else {
            None
        }
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            dims: self.dims,
            data: self.data.iter().map(|v| f(v)).collect(),
        }
    }

    /// Overwrite every cell, row by row, with values from `f`.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut() -> T,
    {
        for cell in self.data.iter_mut() {
            *cell = f();
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Matrix<T>
where
    T: Clone + Default,
{
    /// A `rows x columns` matrix with every cell at `T::default()`.
    ///
    /// Panics when `rows * columns` overflows; check untrusted shapes with
    /// [`Dimensions::checked_size`] first.
    pub fn new(rows: usize, columns: usize) -> Self {
        let dims = Dimensions::new(rows, columns);
        Self {
            dims,
            data: vec![T::default(); dims.size()],
        }
    }

    /// Reset every cell to `T::default()` while keeping the shape.
    pub fn clear(&mut self) {
        self.data.clear();
        self.data.resize(self.dims.size(), T::default());
    }

    /// Reshape in place.
    ///
    /// Cell (i, j) keeps its value while `i` and `j` fall inside both the old
    /// and the new shape; every other cell of the new shape is default.
    /// Values outside the new shape are dropped. Panics when the new shape
    /// overflows `usize`, like [`Matrix::new`].
    pub fn set_dimensions(&mut self, rows: usize, columns: usize) {
        let new_dims = Dimensions::new(rows, columns);
        if new_dims == self.dims {
            return;
        }
        debug!("reshaping matrix {} -> {}", self.dims, new_dims);

        let old_dims = self.dims;
        let mut old = std::mem::take(&mut self.data);
        let mut data = vec![T::default(); new_dims.size()];
        for r in 0..rows.min(old_dims.rows) {
            for c in 0..columns.min(old_dims.columns) {
                data[r * columns + c] = std::mem::take(&mut old[r * old_dims.columns + c]);
            }
        }

        self.dims = new_dims;
        self.data = data;
    }

    /// Fill row-major from one flat sequence.
    ///
    /// The matrix is cleared first. Filling stops when either the cells or
    /// the input run out; short input leaves trailing cells at default and
    /// surplus input is counted in [`Distribution::discarded`].
    pub fn distribute_mono<I>(&mut self, values: I) -> Distribution
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        let mut values = values.into_iter();
        let mut placed = 0;
        for (cell, value) in self.data.iter_mut().zip(values.by_ref()) {
            *cell = value;
            placed += 1;
        }
        let discarded = values.count();
        if discarded > 0 {
            warn!(
                "{} matrix is full; discarded {} input values",
                self.dims, discarded
            );
        }
        Distribution {
            placed,
            discarded,
            skipped_rows: Vec::new(),
        }
    }

    /// Fill from row candidates, one candidate per matrix row.
    ///
    /// Fails with [`MatrixError::ShapeOverflow`] without touching the matrix
    /// when there are more candidates than rows. Otherwise the matrix is
    /// cleared and each candidate is copied over the start of its row, so a
    /// short candidate leaves the tail of the row at default. Empty
    /// candidates and candidates wider than the matrix are skipped and their
    /// rows stay default.
    pub fn distribute_poly<S>(&mut self, value_sets: &[S]) -> Result<Distribution>
    where
        S: AsRef<[T]>,
    {
        if value_sets.len() > self.dims.rows {
            return Err(MatrixError::ShapeOverflow {
                candidates: value_sets.len(),
                rows: self.dims.rows,
            });
        }

        self.clear();
        let mut report = Distribution::default();
        for (row, set) in value_sets.iter().enumerate() {
            let set = set.as_ref();
            if set.is_empty() || set.len() > self.dims.columns {
                warn!(
                    "skipping row candidate {} of length {} for {} matrix",
                    row,
                    set.len(),
                    self.dims
                );
                report.skipped_rows.push(row);
                continue;
            }
            self.row_mut(row)[..set.len()].clone_from_slice(set);
            report.placed += set.len();
        }
        Ok(report)
    }

    /// Swap rows and columns in place: new (i, j) is old (j, i).
    pub fn transpose(&mut self) {
        let old_dims = self.dims;
        let mut old = std::mem::take(&mut self.data);
        self.dims = old_dims.transposed();
        self.clear();
        debug!("transposing matrix {} -> {}", old_dims, self.dims);

        for r in 0..old_dims.rows {
            for c in 0..old_dims.columns {
                self.data[c * old_dims.rows + r] =
                    std::mem::take(&mut old[r * old_dims.columns + c]);
            }
        }
    }

    pub fn transposed(&self) -> Self {
        let mut out = self.clone();
        out.transpose();
        out
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, columns: usize) -> Self {
        let dims = Dimensions::new(rows, columns);
        Self {
            dims,
            data: vec![T::zero(); dims.size()],
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Elementwise sum of two matrices of identical shape.
    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.dims != other.dims {
            return Err(MatrixError::dimension_mismatch(self.dims, other.dims));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Matrix {
            dims: self.dims,
            data,
        })
    }
}

impl<'a, 'b, T: Element> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.dims.rows && index.1 < self.dims.columns,
            "index {:?} out of bounds for {} matrix",
            index,
            self.dims
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.dims.rows && index.1 < self.dims.columns,
            "index {:?} out of bounds for {} matrix",
            index,
            self.dims
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// One line per row, cells separated by a single space.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
