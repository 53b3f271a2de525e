use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "pdfb",
    about = "Impose a PDF as a folded booklet, two pages per landscape sheet",
    version
)]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Output PDF file (split mode derives <stem>_part1.pdf and <stem>_part2.pdf from it)
    output: PathBuf,

    /// Write averse and reverse sheets to two separate files for manual duplex
    #[arg(long)]
    separate: bool,

    /// JSON options file; command line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size (sheets are always landscape)
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// How each page is scaled into its half of the sheet
    #[arg(long, value_enum)]
    scaling: Option<ScalingArg>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScalingArg {
    Stretch,
    Fit,
    Fill,
    None,
}

impl From<PaperArg> for pdf_booklet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<ScalingArg> for pdf_booklet::ScalingMode {
    fn from(arg: ScalingArg) -> Self {
        match arg {
            ScalingArg::Stretch => Self::Stretch,
            ScalingArg::Fit => Self::Fit,
            ScalingArg::Fill => Self::Fill,
            ScalingArg::None => Self::None,
        }
    }
}

/// Accept the historical `-separate` marker and the `/?` help switch.
fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-separate") => OsString::from("--separate"),
            Some("/?") => OsString::from("--help"),
            _ => arg,
        })
        .collect()
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn build_options(cli: &Cli) -> Result<pdf_booklet::BookletOptions> {
    let mut options = match &cli.config {
        Some(path) => pdf_booklet::BookletOptions::load(path)
            .await
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => pdf_booklet::BookletOptions::default(),
    };

    if let Some(paper) = cli.paper {
        options.paper_size = paper.into();
    }
    if let Some(scaling) = cli.scaling {
        options.scaling_mode = scaling.into();
    }
    if cli.separate {
        options.output_mode = pdf_booklet::OutputMode::Split;
    }

    Ok(options)
}

fn print_statistics(stats: &pdf_booklet::BookletStatistics) {
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Padded pages: {}", stats.padded_pages);
    println!("  Output sheets: {}", stats.sheets);
    println!("  Averse sheets: {}", stats.averse_sheets);
    println!("  Reverse sheets: {}", stats.reverse_sheets);
    println!("  Blank halves: {}", stats.blank_halves);
}

async fn show_statistics(input: &Path) -> Result<()> {
    let doc = pdf_booklet::load_pdf(input)
        .await
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let stats = pdf_booklet::statistics_for_pages(doc.get_pages().len());
    print_statistics(&stats);
    Ok(())
}

fn failure_message(err: impl std::fmt::Display) -> String {
    format!(
        "Something went wrong. An error message is hereunder.\nERROR: {}",
        err
    )
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse_from(normalize_legacy_args(std::env::args_os()));
    init_logging(cli.verbose);

    let options = build_options(&cli).await?;
    log::debug!("Options: {:?}", options);

    println!("Processing {} file started...", cli.input.display());

    if cli.stats_only {
        return match show_statistics(&cli.input).await {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(err) => {
                println!("{}", failure_message(format_args!("{:#}", err)));
                Ok(ExitCode::FAILURE)
            }
        };
    }

    match pdf_booklet::run_booklet(&cli.input, &cli.output, &options).await {
        Ok(report) => {
            print_statistics(&report.statistics);
            for path in &report.written {
                println!("Imposed → {}", path.display());
            }
            println!("File successfully processed.");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            log::debug!("{:?}", err);
            println!("{}", failure_message(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_legacy_separate_marker() {
        let normalized = normalize_legacy_args(args(&["pdfb", "in.pdf", "out.pdf", "-separate"]));
        let cli = Cli::try_parse_from(normalized).unwrap();
        assert!(cli.separate);
        assert_eq!(cli.input, PathBuf::from("in.pdf"));
        assert_eq!(cli.output, PathBuf::from("out.pdf"));
    }

    #[test]
    fn test_legacy_help_switch() {
        let normalized = normalize_legacy_args(args(&["pdfb", "/?"]));
        let err = Cli::try_parse_from(normalized).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_combined_is_default() {
        let cli = Cli::try_parse_from(args(&["pdfb", "in.pdf", "out.pdf"])).unwrap();
        assert!(!cli.separate);
        assert!(cli.paper.is_none());
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(Cli::try_parse_from(args(&["pdfb", "in.pdf"])).is_err());
    }

    #[tokio::test]
    async fn test_stats_failure_uses_error_line() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.pdf");

        let err = show_statistics(&missing).await.unwrap_err();
        let message = failure_message(format_args!("{:#}", err));
        assert!(message.starts_with("Something went wrong. An error message is hereunder.\nERROR: "));
        assert!(message.contains("missing.pdf"));
    }

    #[tokio::test]
    async fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(args(&[
            "pdfb",
            "in.pdf",
            "out.pdf",
            "--separate",
            "--paper",
            "letter",
            "--scaling",
            "fit",
        ]))
        .unwrap();
        let options = build_options(&cli).await.unwrap();
        assert_eq!(options.output_mode, pdf_booklet::OutputMode::Split);
        assert_eq!(options.paper_size, pdf_booklet::PaperSize::Letter);
        assert_eq!(options.scaling_mode, pdf_booklet::ScalingMode::Fit);
    }
}
