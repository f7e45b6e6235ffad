use blockfall_engine::PieceKind;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RandomArg {
    /// Random seed; a fresh seed is drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Number of pieces to generate
    #[arg(long, default_value_t = 1)]
    count: usize,
}

pub(crate) fn run(arg: &RandomArg) -> anyhow::Result<()> {
    let RandomArg { seed, count } = arg;

    let mut rng = match seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(*seed),
        None => Pcg64Mcg::from_os_rng(),
    };

    let mut output = Output::stdout();
    for _ in 0..*count {
        let kind: PieceKind = rng.random();
        let orientations = kind.create().orientations();
        let index = rng.random_range(0..orientations.len());
        log::debug!("{kind:?}: orientation {index} of {}", orientations.len());

        output.write_line(&kind.as_char().to_string())?;
        output.write_piece(&orientations[index])?;
    }
    output.finish()
}
