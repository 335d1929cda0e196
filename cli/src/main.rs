//! resumekit CLI - resume parsing, diffing and export tool

mod print;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumekit::diff::DiffEngine;
use resumekit::render::{render, to_html_document, to_json};
use resumekit::{
    parse_file_with_options, CleanupPreset, DiffLine, DiffOptions, DiffSummary, ExportFormat,
    ExportOptions, ExporterRegistry, JsonFormat, PageSize, ParseOptions, PdfExport,
    RenderOptions, ResumeKit, TemplateKey, TokenChange, WordToken,
};

use crate::print::SystemPrintHost;

#[derive(Parser)]
#[command(name = "resumekit")]
#[command(version)]
#[command(about = "Parse, compare and export resumes", long_about = None)]
struct Cli {
    /// Input resume text file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Visual template (defaults to $RESUMEKIT_TEMPLATE, then modern)
    #[arg(short, long, value_enum)]
    template: Option<TemplateArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume into JSON
    Parse {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Compare an original resume with an optimized one
    Diff {
        /// Original resume text file
        #[arg(value_name = "ORIGINAL")]
        original: PathBuf,

        /// Optimized resume text file
        #[arg(value_name = "OPTIMIZED")]
        optimized: PathBuf,

        /// Output the diff records as JSON
        #[arg(long)]
        json: bool,

        /// Disable word-level highlighting of modified lines
        #[arg(long)]
        no_words: bool,
    },

    /// Render a resume to a standalone HTML document
    Render {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Visual template
        #[arg(short, long, value_enum, env = "RESUMEKIT_TEMPLATE", default_value = "modern")]
        template: TemplateArg,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Printed page size
        #[arg(long, value_enum, default_value = "a4")]
        page_size: PageSizeArg,
    },

    /// Export a resume as HTML, DOC or PDF
    Export {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Export format
        #[arg(short, long, value_enum)]
        format: ExportKind,

        /// Visual template
        #[arg(short, long, value_enum, env = "RESUMEKIT_TEMPLATE", default_value = "modern")]
        template: TemplateArg,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Printed page size
        #[arg(long, value_enum, default_value = "a4")]
        page_size: PageSizeArg,

        /// Program used to open the printable document (pdf only)
        #[arg(long, env = "RESUMEKIT_OPENER")]
        opener: Option<String>,
    },

    /// Export a resume to all formats (HTML, DOC, JSON)
    Convert {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Visual template
        #[arg(short, long, value_enum, env = "RESUMEKIT_TEMPLATE", default_value = "modern")]
        template: TemplateArg,
    },

    /// Show resume structure and statistics
    Info {
        /// Input resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List available templates
    Templates,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup (bullets, ligatures, trailing whitespace)
    Standard,
    /// Aggressive cleanup (also collapses repeated spaces)
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TemplateArg {
    /// Single column, left-aligned banner
    Modern,
    /// Single column, centered banner, serif
    Classic,
    /// Colored sidebar with name and contacts
    Accent,
}

const TEMPLATE_ENV: &str = "RESUMEKIT_TEMPLATE";

/// Pick the template for the bare `resumekit <FILE>` form: the flag wins,
/// then the environment, then `modern`.
fn resolve_template(
    arg: Option<TemplateArg>,
    env_value: Option<String>,
) -> Result<TemplateKey, Box<dyn std::error::Error>> {
    match (arg, env_value) {
        (Some(arg), _) => Ok(arg.into()),
        (None, Some(value)) => Ok(value.parse::<TemplateKey>()?),
        (None, None) => Ok(TemplateKey::default()),
    }
}

impl From<TemplateArg> for TemplateKey {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Modern => TemplateKey::Modern,
            TemplateArg::Classic => TemplateKey::Classic,
            TemplateArg::Accent => TemplateKey::Accent,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSizeArg {
    /// ISO A4
    A4,
    /// US Letter
    Letter,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => PageSize::A4,
            PageSizeArg::Letter => PageSize::Letter,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ExportKind {
    /// Standalone HTML document
    Html,
    /// Word-compatible document
    Doc,
    /// Print to PDF through the system browser
    Pdf,
}

impl From<ExportKind> for ExportFormat {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Html => ExportFormat::Html,
            ExportKind::Doc => ExportFormat::Doc,
            ExportKind::Pdf => ExportFormat::Pdf,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            compact,
            cleanup,
        }) => cmd_parse(&input, output.as_deref(), compact, cleanup),
        Some(Commands::Diff {
            original,
            optimized,
            json,
            no_words,
        }) => cmd_diff(&original, &optimized, json, !no_words),
        Some(Commands::Render {
            input,
            template,
            output,
            page_size,
        }) => cmd_render(&input, template.into(), output.as_deref(), page_size.into()),
        Some(Commands::Export {
            input,
            format,
            template,
            output,
            page_size,
            opener,
        }) => cmd_export(
            &input,
            format.into(),
            template.into(),
            output.as_deref(),
            page_size.into(),
            opener,
        ),
        Some(Commands::Convert {
            input,
            output,
            template,
        }) => cmd_convert(&input, output.as_deref(), template.into()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Templates) => {
            cmd_templates();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                resolve_template(cli.template, std::env::var(TEMPLATE_ENV).ok()).and_then(
                    |template| cmd_convert(&input, cli.output.as_deref(), template),
                )
            } else {
                println!("{}", "Usage: resumekit <FILE> [OUTPUT]".yellow());
                println!("       resumekit --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ParseOptions::new();
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }
    let resume = parse_file_with_options(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&resume, format)?;
    write_or_print(output, &json)
}

fn cmd_diff(
    original: &Path,
    optimized: &Path,
    json: bool,
    highlight_words: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let original_text = fs::read_to_string(original)?;
    let optimized_text = fs::read_to_string(optimized)?;

    let engine = DiffEngine::new(DiffOptions::new().with_word_highlighting(highlight_words));
    let lines = engine.diff(&original_text, &optimized_text);

    if json {
        println!("{}", to_json(&lines, JsonFormat::Pretty)?);
        return Ok(());
    }

    for line in &lines {
        print_diff_line(line);
    }

    let summary = DiffSummary::from_lines(&lines);
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "{} unchanged, {} added, {} removed, {} modified",
        summary.unchanged,
        summary.added.to_string().green(),
        summary.removed.to_string().red(),
        summary.modified.to_string().yellow()
    );

    Ok(())
}

fn print_diff_line(line: &DiffLine) {
    match line {
        DiffLine::Unchanged {
            original_line,
            original_line_number,
            optimized_line_number,
            ..
        } => {
            println!(
                "{}   {}",
                gutter(Some(*original_line_number), Some(*optimized_line_number)).dimmed(),
                original_line
            );
        }
        DiffLine::Added {
            optimized_line,
            optimized_line_number,
        } => {
            println!(
                "{} {} {}",
                gutter(None, Some(*optimized_line_number)).dimmed(),
                "+".green().bold(),
                optimized_line.green()
            );
        }
        DiffLine::Removed {
            original_line,
            original_line_number,
        } => {
            println!(
                "{} {} {}",
                gutter(Some(*original_line_number), None).dimmed(),
                "-".red().bold(),
                original_line.red()
            );
        }
        DiffLine::Modified {
            original_line,
            optimized_line,
            original_line_number,
            optimized_line_number,
            words,
        } => {
            let (before, after) = if words.is_empty() {
                (original_line.red().to_string(), optimized_line.green().to_string())
            } else {
                (highlight(&words.original), highlight(&words.optimized))
            };
            println!(
                "{} {} {}",
                gutter(Some(*original_line_number), None).dimmed(),
                "~".yellow().bold(),
                before
            );
            println!(
                "{} {} {}",
                gutter(None, Some(*optimized_line_number)).dimmed(),
                "~".yellow().bold(),
                after
            );
        }
    }
}

fn gutter(original: Option<u32>, optimized: Option<u32>) -> String {
    let column = |n: Option<u32>| n.map(|n| n.to_string()).unwrap_or_default();
    format!("{:>4} {:>4}", column(original), column(optimized))
}

fn highlight(tokens: &[WordToken]) -> String {
    tokens
        .iter()
        .map(|token| match token.change {
            TokenChange::Unchanged => token.text.normal().to_string(),
            TokenChange::Removed => token.text.red().strikethrough().to_string(),
            TokenChange::Added => token.text.green().bold().to_string(),
        })
        .collect()
}

fn cmd_render(
    input: &Path,
    template: TemplateKey,
    output: Option<&Path>,
    page_size: PageSize,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let resume = resumekit::parse(&text);

    let rendered = render(&resume, &text, template);
    let options = RenderOptions::new().with_page_size(page_size);
    let html = to_html_document(&rendered, &options);

    write_or_print(output, &html)
}

fn cmd_export(
    input: &Path,
    format: ExportFormat,
    template: TemplateKey,
    output: Option<&Path>,
    page_size: PageSize,
    opener: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());

    let result = ResumeKit::new()
        .with_template(template)
        .with_page_size(page_size)
        .with_file_stem(stem)
        .parse_file(input)?;

    let artifact = match format {
        ExportFormat::Pdf => {
            let mut host = SystemPrintHost::new();
            if let Some(opener) = opener {
                host = host.with_opener(opener);
            }
            match result.print(&mut host) {
                PdfExport::Printing => {
                    println!(
                        "{} opened in browser, use \"Save as PDF\" in the print dialog",
                        "Printable document".green()
                    );
                    if let Some(staged) = host.last_document() {
                        println!("{} {}", "Staged at".dimmed(), staged.display());
                    }
                    return Ok(());
                }
                PdfExport::Downloaded(artifact) => {
                    println!(
                        "{}",
                        "Could not open the print dialog, saving HTML instead".yellow()
                    );
                    artifact
                }
            }
        }
        _ => result.export(format)?,
    };

    let path = artifact.write_to(output_dir)?;
    println!(
        "{} {} ({})",
        "Saved to".green(),
        path.display(),
        artifact.mime_type.dimmed()
    );

    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    template: TemplateKey,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading resume...");
    let text = fs::read_to_string(input)?;
    let options = ExportOptions::new().with_template(template);
    let registry = ExporterRegistry::with_defaults();
    pb.inc(1);

    let mut written = Vec::new();
    for (ext, message) in [
        ("html", "Generating HTML..."),
        ("doc", "Generating DOC..."),
        ("json", "Generating JSON..."),
    ] {
        pb.set_message(message);
        let artifact = registry.export(&text, ext, &options)?;
        artifact.write_to(&output_dir)?;
        written.push(artifact.file_name);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, name) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), name);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let resume = resumekit::parse(&text);
    let stats = resume.stats();

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    match resume.header {
        Some(ref header) => {
            println!("{}: {}", "Name".bold(), header.name);
            for line in &header.contact_lines {
                println!("{}: {}", "Contact".bold(), line);
            }
        }
        None => println!("{}: {}", "Header".bold(), "not detected".dimmed()),
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if resume.is_empty() {
        println!("{}", "No sections recognized, templates show the raw text".yellow());
    }
    for section in &resume.sections {
        println!(
            "{} {}",
            section.title.bold(),
            format!(
                "({} paragraphs, {} bullets)",
                section.paragraphs.len(),
                section.bullets.len()
            )
            .dimmed()
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

fn cmd_templates() {
    println!("{}", "Available Templates".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for key in TemplateKey::ALL {
        let style = key.style();
        let layout = match key.layout() {
            resumekit::render::Layout::SingleColumn { banner } => {
                format!("single column, {} banner", banner.as_css())
            }
            resumekit::render::Layout::Sidebar => "sidebar".to_string(),
        };
        println!(
            "{:<10} {} {}",
            key.as_str().bold(),
            layout,
            format!("(accent {})", style.accent_color).dimmed()
        );
    }
}

fn cmd_version() {
    println!("{} {}", "resumekit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume parsing, diffing and export tool");
    println!();
    println!("License: MIT");
}
