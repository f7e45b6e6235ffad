pub use self::core::*;

pub mod core;

/// Axis of a piece grid, used to report out-of-range accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    #[display("column")]
    Column,
    #[display("row")]
    Row,
}

/// Reason a column-major shape cannot become a [`Piece`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ShapeError {
    #[display("piece width must be greater than zero")]
    ZeroWidth,
    #[display("piece height must be greater than zero")]
    ZeroHeight,
    #[display(
        "piece must have uniform height: column {column} has {actual} cells, expected {expected}"
    )]
    NonUniformHeight {
        column: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PieceError {
    #[display("invalid shape: {_0}")]
    InvalidShape(ShapeError),
    #[display("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
    #[display("no piece factory registered for {_0:?}")]
    KeyNotFound(#[error(not(source))] char),
}

impl From<ShapeError> for PieceError {
    fn from(err: ShapeError) -> Self {
        PieceError::InvalidShape(err)
    }
}
