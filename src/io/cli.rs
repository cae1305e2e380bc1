//! Command-line interface for batch texture synthesis from source images

use crate::algorithm::synthesizer::{ImageSynthesizer, SynthesisConfig};
use crate::analysis::AdjacencyModel;
use crate::io::configuration::{
    DEFAULT_CHANNELS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED,
    MAX_GRID_DIMENSION, OUTPUT_SUFFIX, PROGRESS_UPDATE_INTERVAL,
};
use crate::io::error::{PixelChainError, Result, invalid_parameter};
use crate::io::image::{load_grid, save_grid};
use crate::io::progress::ProgressManager;
use crate::io::source::collect_sources;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pixelchain")]
#[command(
    author,
    version,
    about = "Generate textures by growing pixels from a learned color adjacency model"
)]
/// Command-line arguments for the texture synthesis tool
pub struct Cli {
    /// Source image file or directory of source images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: usize,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: usize,

    /// Bytes per color: 1 luma, 2 luma+alpha, 3 RGB, 4 RGBA
    #[arg(short, long, default_value_t = DEFAULT_CHANNELS)]
    pub channels: usize,

    /// Directory for generated images (defaults to next to each source)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate output dimensions and build the synthesis configuration
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero or above the grid limit
    pub fn synthesis_config(&self) -> Result<SynthesisConfig> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(SynthesisConfig::new(self.width, self.height))
    }

    /// Output path for a source image
    ///
    /// `<stem>_result.<ext>` next to the source, or inside the output
    /// directory when one is given.
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        match (&self.output, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}

/// Orchestrates batch processing of source images with progress tracking
///
/// Each source runs an independent decode, train, generate and encode
/// pipeline with its own model and random generator.
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the paths of the images written.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, source enumeration, decoding
    /// or encoding fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.synthesis_config()?;
        let files: Vec<PathBuf> = collect_sources(&self.cli.target)?
            .into_iter()
            .filter(|path| self.should_process_file(path))
            .collect();

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut written = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            written.push(self.process_channels(file, index, config)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.cli.output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_channels(
        &mut self,
        input_path: &Path,
        index: usize,
        config: SynthesisConfig,
    ) -> Result<PathBuf> {
        match self.cli.channels {
            1 => self.process_file::<1>(input_path, index, config),
            2 => self.process_file::<2>(input_path, index, config),
            3 => self.process_file::<3>(input_path, index, config),
            4 => self.process_file::<4>(input_path, index, config),
            channels => Err(PixelChainError::UnsupportedChannels { channels }),
        }
    }

    fn process_file<const N: usize>(
        &mut self,
        input_path: &Path,
        index: usize,
        config: SynthesisConfig,
    ) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.cli.output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, config.area());
        }

        let source = load_grid::<N>(input_path)?;
        let model = AdjacencyModel::train(&source);

        let mut synthesizer = ImageSynthesizer::new(&model, config, self.cli.seed);
        synthesizer.seed();

        let mut last_reported = 0;
        while synthesizer.step() {
            let drawn = synthesizer.drawn().len();
            if drawn >= last_reported + PROGRESS_UPDATE_INTERVAL {
                last_reported = drawn;
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_drawn(index, drawn);
                }
            }
        }

        let unreached = synthesizer.unreached();
        let grid = synthesizer.into_grid();
        save_grid(&grid, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, unreached, start_time.elapsed());
        }

        Ok(output_path)
    }
}
