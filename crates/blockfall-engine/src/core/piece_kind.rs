use std::{collections::BTreeMap, sync::LazyLock};

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use crate::PieceError;

use super::piece::Piece;

/// Factory producing a fresh canonical piece.
pub type PieceFactory = fn() -> Piece;

const X: bool = true;
const E: bool = false;

// Column-major, bottom row first.
const Q_SHAPE: &[&[bool]] = &[&[X, X], &[X, X]];
const Z_SHAPE: &[&[bool]] = &[&[E, X], &[X, X], &[X, E]];
const T_SHAPE: &[&[bool]] = &[&[E, X], &[X, X], &[E, X]];
const I_SHAPE: &[&[bool]] = &[&[X], &[X], &[X], &[X]];
const L_SHAPE: &[&[bool]] = &[&[X, X], &[E, X], &[E, X]];

impl Piece {
    /// Creates a "Q" piece (2×2 square):
    ///
    /// ```text
    /// XX
    /// XX
    /// ```
    #[must_use]
    pub fn q_piece() -> Self {
        Self::from_valid_shape(Q_SHAPE)
    }

    /// Creates a "Z" piece:
    ///
    /// ```text
    /// XX
    ///  XX
    /// ```
    #[must_use]
    pub fn z_piece() -> Self {
        Self::from_valid_shape(Z_SHAPE)
    }

    /// Creates a "T" piece:
    ///
    /// ```text
    /// XXX
    ///  X
    /// ```
    #[must_use]
    pub fn t_piece() -> Self {
        Self::from_valid_shape(T_SHAPE)
    }

    /// Creates an "I" piece:
    ///
    /// ```text
    /// XXXX
    /// ```
    #[must_use]
    pub fn i_piece() -> Self {
        Self::from_valid_shape(I_SHAPE)
    }

    /// Creates an "L" piece:
    ///
    /// ```text
    /// XXX
    /// X
    /// ```
    #[must_use]
    pub fn l_piece() -> Self {
        Self::from_valid_shape(L_SHAPE)
    }

    /// Creates the canonical piece registered under `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::Piece;
    ///
    /// assert_eq!(Piece::from_name('T').unwrap(), Piece::t_piece());
    /// assert!(Piece::from_name('S').unwrap_err().is_key_not_found());
    /// ```
    pub fn from_name(name: char) -> Result<Self, PieceError> {
        piece_factories()
            .get(&name)
            .map(|factory| factory())
            .ok_or(PieceError::KeyNotFound(name))
    }
}

static PIECE_FACTORIES: LazyLock<BTreeMap<char, PieceFactory>> = LazyLock::new(|| {
    let factories: BTreeMap<_, _> = PieceKind::ALL
        .into_iter()
        .map(|kind| (kind.as_char(), kind.factory()))
        .collect();
    log::debug!("registered {} piece factories", factories.len());
    factories
});

/// Returns the read-only table mapping piece names to their factories.
///
/// The table is built on first access and never modified afterward.
pub fn piece_factories() -> &'static BTreeMap<char, PieceFactory> {
    &PIECE_FACTORIES
}

/// Canonical piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// 2×2 square.
    Q = 0,
    /// Z-piece.
    Z = 1,
    /// T-piece.
    T = 2,
    /// 4×1 bar.
    I = 3,
    /// L-piece.
    L = 4,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..PieceKind::LEN) {
            0 => PieceKind::Q,
            1 => PieceKind::Z,
            2 => PieceKind::T,
            3 => PieceKind::I,
            _ => PieceKind::L,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (5).
    pub const LEN: usize = 5;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::Q,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::I,
        PieceKind::L,
    ];

    /// Returns the single character name of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::Q.as_char(), 'Q');
    /// assert_eq!(PieceKind::L.as_char(), 'L');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::Q => 'Q',
            PieceKind::Z => 'Z',
            PieceKind::T => 'T',
            PieceKind::I => 'I',
            PieceKind::L => 'L',
        }
    }

    /// Parses a piece kind from its single character name.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'Q' => Some(PieceKind::Q),
            'Z' => Some(PieceKind::Z),
            'T' => Some(PieceKind::T),
            'I' => Some(PieceKind::I),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    #[must_use]
    pub fn factory(self) -> PieceFactory {
        match self {
            PieceKind::Q => Piece::q_piece,
            PieceKind::Z => Piece::z_piece,
            PieceKind::T => Piece::t_piece,
            PieceKind::I => Piece::i_piece,
            PieceKind::L => Piece::l_piece,
        }
    }

    #[must_use]
    pub fn create(self) -> Piece {
        (self.factory())()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_canonical_shapes() {
        assert_eq!(Piece::q_piece().to_string(), "----\n|XX|\n|XX|\n----\n");
        assert_eq!(Piece::z_piece().to_string(), "-----\n|XX |\n| XX|\n-----\n");
        assert_eq!(Piece::t_piece().to_string(), "-----\n|XXX|\n| X |\n-----\n");
        assert_eq!(Piece::i_piece().to_string(), "------\n|XXXX|\n------\n");
        assert_eq!(Piece::l_piece().to_string(), "-----\n|XXX|\n|X  |\n-----\n");
    }

    #[test]
    fn test_canonical_shapes_are_valid() {
        for kind in PieceKind::ALL {
            let piece = kind.create();
            assert_eq!(Piece::new(&piece.to_shape()), Ok(piece));
        }
    }

    #[test]
    fn test_factories_are_independent() {
        let mut first = Piece::l_piece();
        first.rotate_clockwise();
        assert_eq!(Piece::l_piece().width(), 3);
        assert_ne!(first, Piece::l_piece());
    }

    #[test]
    fn test_factories_differ() {
        for (i, a) in PieceKind::ALL.into_iter().enumerate() {
            for b in PieceKind::ALL.into_iter().skip(i + 1) {
                assert_ne!(a.create(), b.create(), "{a:?} and {b:?} should differ");
            }
        }
    }

    #[test]
    fn test_factory_table() {
        let factories = piece_factories();
        assert_eq!(factories.len(), PieceKind::LEN);
        for kind in PieceKind::ALL {
            let factory = factories[&kind.as_char()];
            assert_eq!(factory(), kind.create());
            assert_eq!(Piece::from_name(kind.as_char()), Ok(kind.create()));
        }
    }

    #[test]
    fn test_factory_table_unknown_key() {
        assert_eq!(Piece::from_name('S'), Err(PieceError::KeyNotFound('S')));
        assert_eq!(Piece::from_name('q'), Err(PieceError::KeyNotFound('q')));
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('O'), None);
        assert_eq!(PieceKind::from_char('l'), None);
    }

    #[test]
    fn test_piece_kind_serialization() {
        assert_eq!(serde_json::to_string(&PieceKind::T).unwrap(), "\"T\"");
        let kind: PieceKind = serde_json::from_str("\"I\"").unwrap();
        assert_eq!(kind, PieceKind::I);
    }

    #[test]
    fn test_random_piece_kind_covers_all_kinds() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..200 {
            let kind: PieceKind = rng.random();
            seen[kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_orientation_counts() {
        let counts: Vec<_> = PieceKind::ALL
            .into_iter()
            .map(|kind| kind.create().orientations().len())
            .collect();
        // Q, Z, T, I, L
        assert_eq!(counts, vec![1, 4, 4, 2, 8]);
    }
}
