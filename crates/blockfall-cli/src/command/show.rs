use super::{PieceOutputArg, TransformsArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowArg {
    /// Piece kind (Q, Z, T, I or L)
    kind: char,
    #[clap(flatten)]
    pub(super) transforms: TransformsArg,
    #[clap(flatten)]
    output: PieceOutputArg,
}

pub(crate) fn run(arg: &ShowArg) -> anyhow::Result<()> {
    let ShowArg {
        kind,
        transforms,
        output,
    } = arg;

    let mut piece = super::canonical_piece(*kind)?;
    transforms.apply(&mut piece);
    output.write(&piece)
}
