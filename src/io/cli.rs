//! Command-line interface for growing, printing and exporting walks

use crate::io::colormap::Colormap;
use crate::io::configuration::{
    DEFAULT_FRAME_DELAY_MS, DEFAULT_GRID_SIZE, DEFAULT_HEX_GRID_SIZE, DEFAULT_HEX_RADIUS,
    DEFAULT_LOWER_BOUND, DEFAULT_OUTPUT,
};
use crate::io::error::Result;
use crate::io::image::{canvas_dimensions, export_walk_as_png};
use crate::io::progress::GrowthProgress;
use crate::io::visualization::WalkAnimation;
use crate::lattice::topology::{Lattice, LatticeConfig, LatticeKind};
use crate::walk::engine::StartPosition;
use crate::walk::growth::{GrowthConfig, GrowthPolicy, GrownWalk};
use crate::walk::random::RandomSelector;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Lattice choices accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LatticeArg {
    /// Square grid, four neighbors
    Square,
    /// Honeycomb grid, six neighbors via parity diagonals
    Honeycomb,
    /// Vertices of a hexagon tiling, three neighbors
    Hex,
}

impl From<LatticeArg> for LatticeKind {
    fn from(arg: LatticeArg) -> Self {
        match arg {
            LatticeArg::Square => Self::SquareGrid,
            LatticeArg::Honeycomb => Self::HoneycombGrid,
            LatticeArg::Hex => Self::HexVertexGraph,
        }
    }
}

#[derive(Parser)]
#[command(name = "saw")]
#[command(author, version, about = "Grow self-avoiding random walks on lattices")]
/// Command-line arguments for the walk generator
pub struct Cli {
    /// Type of lattice
    #[arg(short = 't', long = "type", value_enum, default_value_t = LatticeArg::Square)]
    pub lattice: LatticeArg,

    /// Width/height of the lattice (hexagons per side for hex)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Hexagon radius for the hex lattice
    #[arg(long, default_value_t = DEFAULT_HEX_RADIUS)]
    pub radius: f64,

    /// Lower bound on the length of the walk
    #[arg(short, long, default_value_t = DEFAULT_LOWER_BOUND)]
    pub lower: usize,

    /// Give up after this many attempts
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Give up after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Random seed for reproducible walks
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Milliseconds between animation frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub ms: u32,

    /// Colormap used to shade the walk
    #[arg(short, long, value_enum, default_value_t = Colormap::Jet)]
    pub cmap: Colormap,

    /// PNG snapshot of the final walk
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also export the walk as an animated GIF
    #[arg(short, long, value_name = "GIF")]
    pub animate: Option<PathBuf>,

    /// Print the move count and the sequence of moves
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Lattice described by the arguments, with per-kind default sizes
    pub fn lattice_config(&self) -> LatticeConfig {
        let kind = LatticeKind::from(self.lattice);
        let default_size = match kind {
            LatticeKind::HexVertexGraph => DEFAULT_HEX_GRID_SIZE,
            LatticeKind::SquareGrid | LatticeKind::HoneycombGrid => DEFAULT_GRID_SIZE,
        };
        let size = self.size.unwrap_or(default_size);

        LatticeConfig {
            kind,
            rows: size,
            cols: size,
            hex_radius: self.radius,
        }
    }

    /// Growth bounds and start rule described by the arguments
    ///
    /// Grids start at their center, the hex lattice at a random vertex.
    pub fn growth_config(&self) -> GrowthConfig {
        let start = match self.lattice {
            LatticeArg::Hex => StartPosition::Random,
            LatticeArg::Square | LatticeArg::Honeycomb => StartPosition::Center,
        };

        GrowthConfig {
            start,
            max_attempts: self.max_attempts,
            deadline: self.timeout_ms.map(Duration::from_millis),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Grows one walk per invocation and writes the requested outputs
pub struct WalkRunner {
    cli: Cli,
}

impl WalkRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the lattice, grow a walk and export it
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the lattice is too
    /// large to render, growth is exhausted or an export fails
    pub fn run(&self) -> Result<GrownWalk> {
        let started = Instant::now();
        let lattice = Lattice::build(&self.cli.lattice_config())?;
        let (width, height) = canvas_dimensions(&lattice)?;
        let selector = self
            .cli
            .seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::new);

        info!(
            lattice = %lattice.kind(),
            capacity = lattice.capacity(),
            seed = selector.seed(),
            min_length = self.cli.lower,
            image = %format_args!("{width}x{height}"),
            "growing walk"
        );

        let mut progress = if self.cli.should_show_progress() {
            GrowthProgress::new(self.cli.lower)
        } else {
            GrowthProgress::hidden(self.cli.lower)
        };

        let mut policy = GrowthPolicy::new(&lattice, self.cli.growth_config(), selector)?;
        let grown = policy.grow_observed(self.cli.lower, |report| progress.record(report));
        progress.finish();
        let walk = grown?;

        info!(
            attempts = walk.attempts,
            length = walk.len(),
            elapsed = ?started.elapsed(),
            "walk accepted"
        );
        self.report(&walk);

        export_walk_as_png(&lattice, &walk, self.cli.cmap, &self.cli.output)?;
        info!(path = %self.cli.output.display(), "wrote snapshot");

        if let Some(gif_path) = &self.cli.animate {
            WalkAnimation::new(&lattice, self.cli.cmap, self.cli.ms).export_gif(&walk, gif_path)?;
            info!(path = %gif_path.display(), "wrote animation");
        }

        Ok(walk)
    }

    // Allow print for the user-facing summary
    #[allow(clippy::print_stdout)]
    fn report(&self, walk: &GrownWalk) {
        if self.cli.verbose {
            println!("Number of moves: {}", walk.moves.step_count());
            println!("Sequence of moves: {}", walk.moves);
        }
        println!("Final path length = {}", walk.len());
    }
}
