//! Command-line interface for encoding, sharing and rendering charts

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{ArgAction, Parser, Subcommand};
use log::{error, info, warn};

use crate::chart::palette::HexColor;
use crate::chart::symbol::StitchSymbol;
use crate::codec::link::{decode_or_default, encode};
use crate::io::configuration::{DEFAULT_CELL_SIZE, OUTPUT_EXTENSION, PATTERN_EXTENSION};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::{RenderOptions, export_chart_as_png};
use crate::io::progress::ProgressManager;
use crate::state::link::{LinkState, parse_link};
use crate::state::pattern::PatternState;

#[derive(Parser)]
#[command(name = "stitchlink")]
#[command(
    author,
    version,
    about = "Turn plain-text colour-work charts into shareable links and images"
)]
/// Command-line arguments for the chart tool
pub struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Chart operations
#[derive(Subcommand)]
pub enum Command {
    /// Print the link encoding of a pattern file (stdin when omitted)
    Encode {
        /// Pattern text file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the pattern held by an encoded or literal link value
    Decode {
        /// Link value; the default pattern is printed when omitted
        #[arg(value_name = "ENCODED")]
        encoded: Option<String>,
    },

    /// Print a share link for a pattern file (stdin when omitted)
    Link {
        /// Page the link points at
        #[arg(value_name = "BASE_URL")]
        base: String,

        /// Pattern text file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Colour override such as `A=#ff0000` (repeatable)
        #[arg(short, long = "color", value_name = "SYMBOL=#RRGGBB", value_parser = parse_color_override)]
        colors: Vec<ColorOverride>,
    },

    /// Render a pattern file, or every pattern file in a directory, as PNG
    Render {
        /// Pattern `.txt` file or directory to process
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Side length of one stitch in pixels
        #[arg(short = 's', long, default_value_t = DEFAULT_CELL_SIZE)]
        cell_size: u32,

        /// Number of chart repeats across
        #[arg(short = 'x', long, default_value_t = 1)]
        repeat_x: u32,

        /// Number of chart repeats down
        #[arg(short = 'y', long, default_value_t = 1)]
        repeat_y: u32,

        /// Colour override such as `A=#ff0000` (repeatable)
        #[arg(short, long = "color", value_name = "SYMBOL=#RRGGBB", value_parser = parse_color_override)]
        colors: Vec<ColorOverride>,

        /// Process files even if output exists
        #[arg(short, long)]
        no_skip: bool,
    },

    /// Print the chart and colours held by a share link
    Show {
        /// Share link to inspect
        #[arg(value_name = "URL")]
        link: String,
    },
}

/// One `SYMBOL=#RRGGBB` colour override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOverride {
    /// Symbol to recolour
    pub symbol: StitchSymbol,
    /// Colour to use
    pub color: HexColor,
}

/// Parse a `SYMBOL=#RRGGBB` argument
///
/// # Errors
///
/// Returns a message if the symbol is not a single character or the colour is invalid
pub fn parse_color_override(arg: &str) -> std::result::Result<ColorOverride, String> {
    let (symbol, color) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected SYMBOL=#RRGGBB, got '{arg}'"))?;
    let symbol = StitchSymbol::from_single(symbol)
        .ok_or_else(|| format!("'{symbol}' is not a single stitch symbol"))?;
    let color = HexColor::from_str(color).map_err(|e| e.to_string())?;
    Ok(ColorOverride { symbol, color })
}

fn apply_overrides(state: &mut PatternState, overrides: &[ColorOverride]) {
    for entry in overrides {
        state.set_color(entry.symbol, entry.color);
    }
}

fn read_pattern(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read pattern", e)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| file_system_error("<stdin>", "read pattern", e))?;
            Ok(text)
        }
    }
}

fn write_output(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .map_err(|e| file_system_error("<stdout>", "write output", e))
}

/// Log a failed command in its readable form and pick the process exit code
pub fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the parsed command, writing results to `out`
///
/// # Errors
///
/// Returns an error if input cannot be read, a link is invalid, or rendering fails
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Encode { input } => {
            let text = read_pattern(input.as_deref())?;
            write_output(out, &format!("{}\n", encode(&text)?))
        }
        Command::Decode { encoded } => write_output(out, &decode_or_default(encoded.as_deref())),
        Command::Link {
            base,
            input,
            colors,
        } => {
            let base = parse_link(&base)?;
            let mut state = PatternState::new(read_pattern(input.as_deref())?);
            apply_overrides(&mut state, &colors);
            let url = LinkState::capture(&state)?.to_url(&base);
            write_output(out, &format!("{url}\n"))
        }
        Command::Render {
            target,
            cell_size,
            repeat_x,
            repeat_y,
            colors,
            no_skip,
        } => {
            let options = RenderOptions {
                cell_size,
                repeat_x,
                repeat_y,
            };
            options.validate()?;
            let mut processor = FileProcessor::new(target, options, colors, no_skip);
            processor.process()
        }
        Command::Show { link } => {
            let url = parse_link(&link)?;
            let state = PatternState::from_link(&LinkState::from_url(&url));
            write_output(out, &describe_state(&state))
        }
    }
}

/// Plain-text listing of a chart and its effective colours
pub fn describe_state(state: &PatternState) -> String {
    let mut text = String::new();
    for row in state.matrix().rows() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        text.push_str(&cells.join(" "));
        text.push('\n');
    }
    for (symbol, color) in state.effective_colors() {
        let marker = if state.custom_colors().contains_key(&symbol) {
            " (custom)"
        } else {
            ""
        };
        text.push_str(&format!("{symbol}: {color}{marker}\n"));
    }
    text
}

/// Renders every pattern file under a target with progress tracking
pub struct FileProcessor {
    target: PathBuf,
    options: RenderOptions,
    colors: Vec<ColorOverride>,
    no_skip: bool,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a processor for a `.txt` file or a directory of them
    pub const fn new(
        target: PathBuf,
        options: RenderOptions,
        colors: Vec<ColorOverride>,
        no_skip: bool,
    ) -> Self {
        Self {
            target,
            options,
            colors,
            no_skip,
            progress_manager: ProgressManager::new(),
        }
    }

    /// Render all pending pattern files
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any file's rendering fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to render under {}", self.target.display());
            return Ok(());
        }

        self.progress_manager.initialize(files.len());
        for file in &files {
            self.process_file(file)?;
        }
        self.progress_manager.finish();

        Ok(())
    }

    /// Pattern files under the target that still need rendering
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a `.txt` file nor a readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.target.is_file() {
            if !is_pattern_file(&self.target) {
                return Err(invalid_parameter(
                    "target",
                    &self.target.display(),
                    &format!("must be a .{PATTERN_EXTENSION} file"),
                ));
            }
            Ok(if self.should_process_file(&self.target) {
                vec![self.target.clone()]
            } else {
                vec![]
            })
        } else if self.target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(&self.target)
                .map_err(|e| file_system_error(&self.target, "read directory", e))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(&self.target, "read directory", e))?
                    .path();
                if is_pattern_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.target.display(),
                &format!("must be a .{PATTERN_EXTENSION} file or directory"),
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if self.no_skip {
            return true;
        }
        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        self.progress_manager.start_file(input_path);

        let text = std::fs::read_to_string(input_path)
            .map_err(|e| file_system_error(input_path, "read pattern", e))?;
        let mut state = PatternState::new(text);
        apply_overrides(&mut state, &self.colors);

        export_chart_as_png(&state, &self.options, &Self::get_output_path(input_path))?;

        self.progress_manager.complete_file();
        Ok(())
    }

    /// Output image path for a pattern file: same directory and stem, `.png`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        input_path.with_extension(OUTPUT_EXTENSION)
    }
}

fn is_pattern_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(PATTERN_EXTENSION)
}
