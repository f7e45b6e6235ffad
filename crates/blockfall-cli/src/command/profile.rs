use blockfall_engine::Piece;

use crate::util::Output;

use super::TransformsArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ProfileArg {
    /// Piece kind (Q, Z, T, I or L)
    kind: char,
    #[clap(flatten)]
    transforms: TransformsArg,
}

pub(crate) fn run(arg: &ProfileArg) -> anyhow::Result<()> {
    let ProfileArg { kind, transforms } = arg;

    let mut piece = super::canonical_piece(*kind)?;
    transforms.apply(&mut piece);

    let mut output = Output::stdout();
    output.write_piece(&piece)?;
    output.write_line(&format_profile(&piece))?;
    output.finish()
}

/// Formats the lowest block of each column, `-` marking an empty column.
fn format_profile(piece: &Piece) -> String {
    let cells: Vec<String> = piece
        .skirt()
        .into_iter()
        .map(|lowest| lowest.map_or_else(|| "-".to_string(), |row| row.to_string()))
        .collect();
    format!("lowest: {}", cells.join(" "))
}
