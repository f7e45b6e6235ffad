pub use self::{piece::*, piece_kind::*, transform::*};

pub(crate) mod piece;
pub(crate) mod piece_kind;
mod render;
pub(crate) mod transform;
