use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{Axis, PieceError, ShapeError};

/// A falling-block piece stored as a rectangular grid of occupied cells.
///
/// # Coordinate System
///
/// - Column 0 is the leftmost column, row 0 is the **bottom** row
/// - Rows increase upward
/// - Shapes passed to [`Piece::new`] are column-major: the outer slice indexes
///   columns, each inner slice lists that column's cells bottom to top
///
/// Transformations mutate the piece in place. Rotations by 90° swap `width`
/// and `height`.
///
/// # Example
///
/// ```
/// use blockfall_engine::Piece;
///
/// let mut piece = Piece::new(&[[true, true], [false, true], [false, true]]).unwrap();
/// assert_eq!((piece.width(), piece.height()), (3, 2));
///
/// piece.rotate_clockwise();
/// assert_eq!((piece.width(), piece.height()), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    width: usize,
    height: usize,
    // Column-major: cell (col, row) lives at `col * height + row`.
    cells: Vec<bool>,
}

impl Piece {
    /// Builds a piece from a column-major shape.
    ///
    /// The shape is copied; the piece never aliases caller storage.
    ///
    /// Fails with [`PieceError::InvalidShape`] when there are no columns, when
    /// columns differ in length, or when the columns are empty.
    pub fn new<C>(shape: &[C]) -> Result<Self, PieceError>
    where
        C: AsRef<[bool]>,
    {
        let height = validate_shape(shape).inspect_err(|err| {
            log::debug!("rejected piece shape: {err}");
        })?;
        Ok(Self::collect(shape.len(), height, shape))
    }

    /// Builds a piece from a shape known to be valid at compile time.
    pub(crate) fn from_valid_shape(shape: &[&[bool]]) -> Self {
        debug_assert!(validate_shape(shape).is_ok());
        let height = shape.first().map_or(0, |column| column.len());
        Self::collect(shape.len(), height, shape)
    }

    fn collect<C>(width: usize, height: usize, shape: &[C]) -> Self
    where
        C: AsRef<[bool]>,
    {
        let mut cells = Vec::with_capacity(width * height);
        for column in shape {
            cells.extend_from_slice(column.as_ref());
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a `width`×`height` piece whose cell `(col, row)` is copied from
    /// `self` at the position returned by `source(col, row)`.
    fn remap<F>(&self, width: usize, height: usize, source: F) -> Self
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let cells = (0..width)
            .flat_map(|col| (0..height).map(move |row| (col, row)))
            .map(|(col, row)| {
                let (src_col, src_row) = source(col, row);
                self.cells[self.index(src_col, src_row)]
            })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    fn index(&self, col: usize, row: usize) -> usize {
        col * self.height + row
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether the cell at `(col, row)` is occupied.
    pub fn cell(&self, col: usize, row: usize) -> Result<bool, PieceError> {
        let column = self.column(col)?;
        column
            .get(row)
            .copied()
            .ok_or(PieceError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                len: self.height,
            })
    }

    /// Returns the cells of column `col`, bottom to top.
    pub fn column(&self, col: usize) -> Result<&[bool], PieceError> {
        if col >= self.width {
            return Err(PieceError::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
                len: self.width,
            });
        }
        Ok(&self.cells[self.index(col, 0)..][..self.height])
    }

    /// Returns an iterator over the columns, left to right.
    pub fn columns(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.height)
    }

    /// Returns an iterator of occupied `(col, row)` positions.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns().enumerate().flat_map(|(col, column)| {
            column
                .iter()
                .enumerate()
                .filter_map(move |(row, &occupied)| occupied.then_some((col, row)))
        })
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Returns a column-major copy of the grid, suitable for [`Piece::new`].
    #[must_use]
    pub fn to_shape(&self) -> Vec<Vec<bool>> {
        self.columns().map(<[bool]>::to_vec).collect()
    }

    /// Reverses the order of the columns.
    pub fn flip_horizontal(&mut self) {
        let height = self.height;
        for col in 0..self.width / 2 {
            let mirror = self.width - 1 - col;
            let (left, right) = self.cells.split_at_mut(mirror * height);
            left[col * height..][..height].swap_with_slice(&mut right[..height]);
        }
    }

    /// Reverses the order of the rows within every column.
    pub fn flip_vertical(&mut self) {
        for column in self.cells.chunks_exact_mut(self.height) {
            column.reverse();
        }
    }

    /// Rotates the piece 90° clockwise.
    ///
    /// The old leftmost column becomes the new top row.
    pub fn rotate_clockwise(&mut self) {
        let old_width = self.width;
        *self = self.remap(self.height, self.width, |col, row| {
            (old_width - 1 - row, col)
        });
    }

    /// Rotates the piece 90° counterclockwise.
    pub fn rotate_counter_clockwise(&mut self) {
        let old_height = self.height;
        *self = self.remap(self.height, self.width, |col, row| {
            (row, old_height - 1 - col)
        });
    }

    /// Rotates the piece 180° in place.
    pub fn rotate_180(&mut self) {
        // Point reflection maps column-major index k to len - 1 - k, so
        // reversing performs exactly floor(len / 2) swaps and leaves the
        // center cell of an odd grid untouched.
        self.cells.reverse();
    }

    /// Returns the lowest occupied row in column `col`, or `None` if the
    /// column has no blocks.
    pub fn lowest_block_in_column(&self, col: usize) -> Result<Option<usize>, PieceError> {
        Ok(self.column(col)?.iter().position(|&occupied| occupied))
    }

    /// Returns [`Piece::lowest_block_in_column`] for every column.
    #[must_use]
    pub fn skirt(&self) -> Vec<Option<usize>> {
        self.columns()
            .map(|column| column.iter().position(|&occupied| occupied))
            .collect()
    }

    /// Returns the distinct orientations reachable by rotation and
    /// horizontal mirroring.
    ///
    /// Orientations are listed as 0°, 90°, 180°, 270° clockwise, followed by
    /// the same four rotations of the mirrored piece. Duplicates keep their
    /// first occurrence, so the first entry is always `self`.
    #[must_use]
    pub fn orientations(&self) -> ArrayVec<Self, 8> {
        let mut mirrored = self.clone();
        mirrored.flip_horizontal();

        let mut orientations = ArrayVec::new();
        for mut piece in [self.clone(), mirrored] {
            for _ in 0..4 {
                if !orientations.contains(&piece) {
                    orientations.push(piece.clone());
                }
                piece.rotate_clockwise();
            }
        }
        orientations
    }
}

/// Checks the shape invariants and returns the uniform column height.
fn validate_shape<C>(shape: &[C]) -> Result<usize, ShapeError>
where
    C: AsRef<[bool]>,
{
    let Some(first) = shape.first() else {
        return Err(ShapeError::ZeroWidth);
    };
    let expected = first.as_ref().len();
    if let Some((column, actual)) = shape
        .iter()
        .map(|column| column.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(ShapeError::NonUniformHeight {
            column,
            expected,
            actual,
        });
    }
    if expected == 0 {
        return Err(ShapeError::ZeroHeight);
    }
    Ok(expected)
}

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Same column-major layout accepted by `Piece::new`.
        serializer.collect_seq(self.columns())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let shape = Vec::<Vec<bool>>::deserialize(deserializer)?;
        Piece::new(&shape).map_err(serde::de::Error::custom)
    }
}
