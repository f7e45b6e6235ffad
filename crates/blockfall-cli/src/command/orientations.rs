use crate::util::Output;

use super::TransformsArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OrientationsArg {
    /// Piece kind (Q, Z, T, I or L)
    kind: char,
    /// Transforms applied before enumerating
    #[clap(flatten)]
    transforms: TransformsArg,
}

pub(crate) fn run(arg: &OrientationsArg) -> anyhow::Result<()> {
    let OrientationsArg { kind, transforms } = arg;

    let mut piece = super::canonical_piece(*kind)?;
    transforms.apply(&mut piece);

    let orientations = piece.orientations();
    log::debug!("{kind}: {} distinct orientations", orientations.len());

    let mut output = Output::stdout();
    for (i, orientation) in orientations.iter().enumerate() {
        output.write_line(&format!(
            "#{} ({}x{})",
            i + 1,
            orientation.width(),
            orientation.height()
        ))?;
        output.write_piece(orientation)?;
    }
    output.finish()
}
