mod output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use siti_core::io::{FrameSource, PixelFormat, Y4mReader, YuvReader};
use siti_core::pipeline::{
    CalculationDomain, ColorRange, EotfFunction, HdrMode, PipelineConfig, Pu21Mode, SitiCalculator,
    SitiOptions,
};

use output::OutputFormat;

#[derive(Clone, Copy, ValueEnum)]
enum HdrModeArg {
    Sdr,
    Hdr10,
    Hlg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorRangeArg {
    Limited,
    Full,
}

#[derive(Clone, Copy, ValueEnum)]
enum EotfArg {
    Bt1886,
    InvSrgb,
}

#[derive(Clone, Copy, ValueEnum)]
enum DomainArg {
    Pq,
    Pu21,
}

#[derive(Clone, Copy, ValueEnum)]
enum Pu21ModeArg {
    Banding,
    BandingGlare,
    Peaks,
    PeaksGlare,
}

#[derive(Clone, Copy, ValueEnum)]
enum PixelFormatArg {
    Mono,
    Yuv420,
    Yuv422,
    Yuv444,
}

impl From<HdrModeArg> for HdrMode {
    fn from(v: HdrModeArg) -> Self {
        match v {
            HdrModeArg::Sdr => Self::Sdr,
            HdrModeArg::Hdr10 => Self::Hdr10,
            HdrModeArg::Hlg => Self::Hlg,
        }
    }
}

impl From<ColorRangeArg> for ColorRange {
    fn from(v: ColorRangeArg) -> Self {
        match v {
            ColorRangeArg::Limited => Self::Limited,
            ColorRangeArg::Full => Self::Full,
        }
    }
}

impl From<EotfArg> for EotfFunction {
    fn from(v: EotfArg) -> Self {
        match v {
            EotfArg::Bt1886 => Self::Bt1886,
            EotfArg::InvSrgb => Self::InvSrgb,
        }
    }
}

impl From<DomainArg> for CalculationDomain {
    fn from(v: DomainArg) -> Self {
        match v {
            DomainArg::Pq => Self::Pq,
            DomainArg::Pu21 => Self::Pu21,
        }
    }
}

impl From<Pu21ModeArg> for Pu21Mode {
    fn from(v: Pu21ModeArg) -> Self {
        match v {
            Pu21ModeArg::Banding => Self::Banding,
            Pu21ModeArg::BandingGlare => Self::BandingGlare,
            Pu21ModeArg::Peaks => Self::Peaks,
            Pu21ModeArg::PeaksGlare => Self::PeaksGlare,
        }
    }
}

impl From<PixelFormatArg> for PixelFormat {
    fn from(v: PixelFormatArg) -> Self {
        match v {
            PixelFormatArg::Mono => Self::Mono,
            PixelFormatArg::Yuv420 => Self::Yuv420,
            PixelFormatArg::Yuv422 => Self::Yuv422,
            PixelFormatArg::Yuv444 => Self::Yuv444,
        }
    }
}

#[derive(Parser)]
#[command(name = "siti", about = "Calculate SI/TI video complexity metrics (ITU-T P.910)")]
#[command(version)]
struct Cli {
    /// Input file: .y4m, or raw planar YUV (requires --width/--height)
    input: PathBuf,

    /// Number of frames to calculate (default: all)
    #[arg(short, long)]
    num_frames: Option<usize>,

    /// HDR mode of the input
    #[arg(short = 'm', long, value_enum)]
    hdr_mode: Option<HdrModeArg>,

    /// Limited or full signal range
    #[arg(short = 'r', long, value_enum)]
    color_range: Option<ColorRangeArg>,

    /// Bit depth of the input (8, 10 or 12)
    #[arg(long)]
    bit_depth: Option<u8>,

    /// EOTF for converting SDR to display luminance
    #[arg(short, long, value_enum)]
    eotf_function: Option<EotfArg>,

    /// Gamma for the BT.1886 EOTF
    #[arg(short, long)]
    gamma: Option<f64>,

    /// Display luminance for black in cd/m2 (default: 0.1 SDR, 0.01 HDR)
    #[arg(long)]
    l_min: Option<f64>,

    /// Nominal peak display luminance in cd/m2 (default: 300 SDR, 1000 HDR)
    #[arg(long)]
    l_max: Option<f64>,

    /// Perceptual domain the metrics are computed in
    #[arg(short, long, value_enum)]
    calculation_domain: Option<DomainArg>,

    /// PU21 coefficient preset
    #[arg(long, value_enum)]
    pu21_mode: Option<Pu21ModeArg>,

    /// Legacy mode: raw range adjustment only, no transfer functions
    #[arg(long)]
    legacy: bool,

    /// Luma width for raw YUV input
    #[arg(long)]
    width: Option<usize>,

    /// Luma height for raw YUV input
    #[arg(long)]
    height: Option<usize>,

    /// Chroma subsampling for raw YUV input
    #[arg(long, value_enum, default_value = "yuv420")]
    pixel_format: PixelFormatArg,

    /// Calculation settings file (TOML); explicit flags take precedence
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Settings-file values overridden by whatever was given on the command
/// line.
fn build_options(cli: &Cli) -> Result<SitiOptions> {
    let mut options = match &cli.settings {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings {}", path.display()))?;
            toml::from_str(&contents).context("Invalid settings file")?
        }
        None => SitiOptions::default(),
    };

    if let Some(v) = cli.hdr_mode {
        options.hdr_mode = v.into();
    }
    if let Some(v) = cli.color_range {
        options.color_range = v.into();
    }
    if let Some(v) = cli.bit_depth {
        options.bit_depth = v;
    }
    if let Some(v) = cli.eotf_function {
        options.eotf_function = v.into();
    }
    if let Some(v) = cli.gamma {
        options.gamma = v;
    }
    if let Some(v) = cli.l_min {
        options.l_min = Some(v);
    }
    if let Some(v) = cli.l_max {
        options.l_max = Some(v);
    }
    if let Some(v) = cli.calculation_domain {
        options.calculation_domain = v.into();
    }
    if let Some(v) = cli.pu21_mode {
        options.pu21_mode = v.into();
    }
    if cli.legacy {
        options.legacy = true;
    }

    Ok(options)
}

fn open_source(cli: &Cli, config: &PipelineConfig) -> Result<(Box<dyn FrameSource>, Option<usize>)> {
    let is_y4m = cli
        .input
        .extension()
        .map(|e| e.eq_ignore_ascii_case("y4m"))
        .unwrap_or(false);

    if is_y4m {
        let reader = Y4mReader::open(&cli.input, config.bit_depth)?;
        return Ok((Box::new(reader), None));
    }

    let (Some(width), Some(height)) = (cli.width, cli.height) else {
        bail!("raw YUV input requires --width and --height");
    };
    let reader = YuvReader::open(
        &cli.input,
        width,
        height,
        config.bit_depth,
        cli.pixel_format.into(),
    )?;
    let total = reader.frame_count();
    Ok((Box::new(reader), Some(total)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = build_options(&cli)?;
    let config = PipelineConfig::resolve(options)?;
    let (mut source, total) = open_source(&cli, &config)?;

    let mut calculator = SitiCalculator::new(config);

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        match total.or(cli.num_frames) {
            Some(total) => {
                let pb = ProgressBar::new(total as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{msg} [{bar:40}] {pos}/{len}")?
                        .progress_chars("=> "),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        }
    };
    pb.set_message("Calculating SI/TI");
    let pb_frames = pb.clone();
    calculator.add_callback(move |m| {
        pb_frames.set_position(m.frame_index as u64 + 1);
    });

    let mut results = calculator.calculate(source.as_mut(), cli.num_frames)?;
    results.input_file = Some(cli.input.display().to_string());
    pb.finish_and_clear();

    let rendered = output::render(&results, cli.format)?;
    output::write(&rendered, cli.output.as_ref())?;

    if !cli.quiet {
        let mean_si = results.si.iter().sum::<f64>() / results.si.len().max(1) as f64;
        let mean_ti = results.ti.iter().sum::<f64>() / results.ti.len().max(1) as f64;
        eprintln!(
            "{} {} frames, mean SI {:.2}, mean TI {:.2}",
            style("Done:").green().bold(),
            results.num_frames,
            mean_si,
            mean_ti
        );
    }

    Ok(())
}
