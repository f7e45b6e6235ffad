use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// A geometric transformation of a [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    RotateClockwise,
    RotateCounterClockwise,
    Rotate180,
}

impl Transform {
    pub const ALL: [Self; 5] = [
        Transform::FlipHorizontal,
        Transform::FlipVertical,
        Transform::RotateClockwise,
        Transform::RotateCounterClockwise,
        Transform::Rotate180,
    ];

    /// Returns the transform that undoes `self`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Transform::RotateClockwise => Transform::RotateCounterClockwise,
            Transform::RotateCounterClockwise => Transform::RotateClockwise,
            Transform::FlipHorizontal | Transform::FlipVertical | Transform::Rotate180 => self,
        }
    }

    /// Returns whether the transform swaps width and height.
    #[must_use]
    pub const fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Transform::RotateClockwise | Transform::RotateCounterClockwise
        )
    }
}

impl Piece {
    pub fn apply(&mut self, transform: Transform) {
        log::trace!(
            "applying {transform:?} to {}x{} piece",
            self.width(),
            self.height()
        );
        match transform {
            Transform::FlipHorizontal => self.flip_horizontal(),
            Transform::FlipVertical => self.flip_vertical(),
            Transform::RotateClockwise => self.rotate_clockwise(),
            Transform::RotateCounterClockwise => self.rotate_counter_clockwise(),
            Transform::Rotate180 => self.rotate_180(),
        }
    }

    /// Returns a transformed copy, leaving `self` untouched.
    #[must_use]
    pub fn transformed(&self, transform: Transform) -> Self {
        let mut piece = self.clone();
        piece.apply(transform);
        piece
    }

    /// Applies each transform in order.
    pub fn apply_all<I>(&mut self, transforms: I)
    where
        I: IntoIterator<Item = Transform>,
    {
        for transform in transforms {
            self.apply(transform);
        }
    }
}
