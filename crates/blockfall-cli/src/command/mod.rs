use std::path::PathBuf;

use anyhow::Context as _;
use blockfall_engine::{Piece, Transform};
use clap::{Parser, Subcommand, ValueEnum};

use crate::util::Output;

use self::{
    orientations::OrientationsArg, profile::ProfileArg, random::RandomArg, render::RenderArg,
    show::ShowArg,
};

mod orientations;
mod profile;
mod random;
mod render;
mod show;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Enable debug logging (overrides `RUST_LOG`)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Render a canonical piece after applying transforms
    Show(#[clap(flatten)] ShowArg),
    /// Render a piece read from a JSON shape file after applying transforms
    Render(#[clap(flatten)] RenderArg),
    /// List every distinct orientation of a canonical piece
    Orientations(#[clap(flatten)] OrientationsArg),
    /// Show the lowest block of every column of a piece
    Profile(#[clap(flatten)] ProfileArg),
    /// Render random canonical pieces in random orientations
    Random(#[clap(flatten)] RandomArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose);
    match &args.mode {
        Mode::Show(arg) => show::run(arg)?,
        Mode::Render(arg) => render::run(arg)?,
        Mode::Orientations(arg) => orientations::run(arg)?,
        Mode::Profile(arg) => profile::run(arg)?,
        Mode::Random(arg) => random::run(arg)?,
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Transform names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TransformArg {
    #[value(alias = "h")]
    FlipHorizontal,
    #[value(alias = "v")]
    FlipVertical,
    #[value(alias = "cw")]
    RotateClockwise,
    #[value(alias = "ccw")]
    RotateCounterClockwise,
    #[value(name = "rotate180", alias = "180")]
    Rotate180,
}

impl From<TransformArg> for Transform {
    fn from(arg: TransformArg) -> Self {
        match arg {
            TransformArg::FlipHorizontal => Transform::FlipHorizontal,
            TransformArg::FlipVertical => Transform::FlipVertical,
            TransformArg::RotateClockwise => Transform::RotateClockwise,
            TransformArg::RotateCounterClockwise => Transform::RotateCounterClockwise,
            TransformArg::Rotate180 => Transform::Rotate180,
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TransformsArg {
    /// Transform to apply; repeat to apply several in order
    #[arg(long = "transform", short = 't', value_enum)]
    transforms: Vec<TransformArg>,
}

impl TransformsArg {
    pub(crate) fn apply(&self, piece: &mut Piece) {
        piece.apply_all(self.transforms.iter().copied().map(Transform::from));
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PieceOutputArg {
    /// Print the column-major JSON shape instead of the text rendering
    #[arg(long)]
    json: bool,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl PieceOutputArg {
    pub(crate) fn write(&self, piece: &Piece) -> anyhow::Result<()> {
        let mut output = Output::from_output_path(self.output.clone())?;
        if self.json {
            output.write_json(piece)
        } else {
            output.write_piece(piece)?;
            output.finish()
        }
    }
}

/// Builds the canonical piece named `kind` (case-insensitive).
pub(crate) fn canonical_piece(kind: char) -> anyhow::Result<Piece> {
    Piece::from_name(kind.to_ascii_uppercase())
        .with_context(|| format!("Unknown piece kind '{kind}' (expected one of Q, Z, T, I, L)"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_args() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_transforms() {
        let args = CommandArgs::try_parse_from([
            "blockfall", "show", "L", "-t", "cw", "--transform", "flip-vertical", "-t", "180",
        ])
        .unwrap();
        let Mode::Show(arg) = args.mode else {
            panic!("expected show command");
        };
        let mut piece = canonical_piece('L').unwrap();
        arg.transforms.apply(&mut piece);

        let mut expected = Piece::l_piece();
        expected.rotate_clockwise();
        expected.flip_vertical();
        expected.rotate_180();
        assert_eq!(piece, expected);
    }

    #[test]
    fn test_canonical_piece() {
        assert_eq!(canonical_piece('t').unwrap(), Piece::t_piece());
        assert!(canonical_piece('x').is_err());
    }
}
