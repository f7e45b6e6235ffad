use std::path::PathBuf;

use crate::util;

use super::{PieceOutputArg, TransformsArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RenderArg {
    /// Path to a column-major JSON shape, e.g. `[[true, true], [false, true]]`
    shape_file: PathBuf,
    #[clap(flatten)]
    transforms: TransformsArg,
    #[clap(flatten)]
    output: PieceOutputArg,
}

pub(crate) fn run(arg: &RenderArg) -> anyhow::Result<()> {
    let RenderArg {
        shape_file,
        transforms,
        output,
    } = arg;

    eprintln!("Loading shape from {}", shape_file.display());
    let mut piece = util::read_shape_file(shape_file)?;
    eprintln!("Loaded {}x{} piece", piece.width(), piece.height());

    transforms.apply(&mut piece);
    output.write(&piece)
}
