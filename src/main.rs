//! Maze Escape entry point
//!
//! The browser build is driven through `WebGame` in the library. Natively this
//! binary generates a maze and prints it, either as ASCII art or as the body
//! list a physics host would load.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::{Parser, ValueEnum};
    use rand::Rng;

    use maze_escape::{Game, Settings};

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum Output {
        /// Maze as text
        Ascii,
        /// Host body list as JSON
        Bodies,
    }

    /// Generate a Maze Escape level
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    struct Args {
        /// Settings JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Cells across
        #[arg(long)]
        cells_horizontal: Option<u32>,

        /// Cells down
        #[arg(long)]
        cells_vertical: Option<u32>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Viewport width
        #[arg(long, default_value_t = 960.0)]
        width: f32,

        /// Viewport height
        #[arg(long, default_value_t = 600.0)]
        height: f32,

        #[arg(long, value_enum, default_value_t = Output::Ascii)]
        output: Output,

        /// Write the effective settings to this file
        #[arg(long)]
        save_config: Option<PathBuf>,
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();

        let mut settings = match &args.config {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(cells) = args.cells_horizontal {
            settings.cells_horizontal = cells;
        }
        if let Some(cells) = args.cells_vertical {
            settings.cells_vertical = cells;
        }
        if args.seed.is_some() {
            settings.seed = args.seed;
        }

        settings.validate()?;
        if let Some(path) = &args.save_config {
            settings
                .save_to(path)
                .with_context(|| format!("saving {}", path.display()))?;
        }

        let fallback_seed = rand::rng().random::<u64>();
        let game = Game::new(settings, args.width, args.height, fallback_seed)?;

        match args.output {
            Output::Ascii => {
                println!("seed: {}", game.seed);
                print!("{}", game.maze().to_ascii());
            }
            Output::Bodies => println!("{}", game.host_bodies_json()?),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Maze Escape (native) starting...");
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_start in the library, this is just to satisfy the compiler
}
