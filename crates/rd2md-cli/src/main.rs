//! rd2md: CLI tool to convert Rd files to Markdown

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use config::{CONFIG_FILE_NAME, Config};
use rd_scan::ParseOptions;

#[derive(Parser, Debug)]
#[command(name = "rd2md")]
#[command(about = "Convert Rd files to Markdown")]
#[command(version)]
#[command(after_help = "Examples:
  rd2md file.Rd                     # Convert single file to file.md
  rd2md file.Rd -o output.md        # Convert to specific output file
  rd2md man/ -o docs/               # Convert directory
  rd2md man/ -o docs/ -r -j4        # Recurse, use 4 parallel jobs
  rd2md init                        # Write a sample _rd2md.toml")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Input Rd file or directory
    input: Option<PathBuf>,

    /// Output file or directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of parallel jobs (defaults to number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a sample configuration file
    Init {
        /// Where to write the configuration (defaults to ./_rd2md.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the configuration JSON schema instead
        #[arg(long)]
        schema: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Init { output, schema }) = cli.command {
        return init_config(output.as_deref(), schema);
    }

    let input = cli
        .input
        .context("No input path given, see --help for usage")?;

    if input.is_file() {
        convert_file(
            &input,
            cli.output.as_deref(),
            cli.verbose,
            cli.quiet,
        )?;
    } else if input.is_dir() {
        convert_directory(
            &input,
            cli.output.as_deref(),
            cli.recursive,
            cli.verbose,
            cli.quiet,
            cli.jobs,
        )?;
    } else {
        anyhow::bail!("Input path does not exist: {}", input.display());
    }

    Ok(())
}

/// Handle the `init` subcommand
fn init_config(output: Option<&Path>, schema: bool) -> Result<()> {
    if schema {
        println!("{}", Config::json_schema_string()?);
        return Ok(());
    }

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }

    fs::write(&path, Config::sample().to_toml_with_schema()?)
        .with_context(|| format!("Failed to write: {}", path.display()))?;

    println!("{}", path.display());

    Ok(())
}

/// Convert a single Rd file to Markdown
fn convert_file(input: &Path, output: Option<&Path>, verbose: bool, quiet: bool) -> Result<()> {
    let config = load_config_for(input)?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => output_name(input, config.output_extension())?,
    };

    if verbose {
        eprintln!(
            "Converting: {} -> {}",
            input.display(),
            output_path.display()
        );
    }

    convert_file_inner(input, &output_path, &config, verbose)?;

    if !quiet {
        println!("{}", output_path.display());
    }

    Ok(())
}

/// Convert a directory of Rd files
fn convert_directory(
    input: &Path,
    output: Option<&Path>,
    recursive: bool,
    verbose: bool,
    quiet: bool,
    jobs: Option<usize>,
) -> Result<()> {
    let output_dir = output.unwrap_or(input);

    let config = Config::load_from_dir(input)?.unwrap_or_default();

    let files = collect_rd_files(input, recursive)?;

    if files.is_empty() {
        if !quiet {
            eprintln!("No .Rd files found in {}", input.display());
        }
        return Ok(());
    }

    if verbose {
        eprintln!("Found {} .Rd files", files.len());
    }

    // Configure thread pool if jobs specified
    if let Some(n) = jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Atomic counters for thread-safe progress tracking
    let success = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    // Parallel conversion
    let errors: Vec<_> = files
        .par_iter()
        .filter_map(|file| {
            let run = || -> Result<PathBuf> {
                let relative = file.strip_prefix(input).unwrap_or(file);
                let output_file =
                    output_name(&output_dir.join(relative), config.output_extension())?;
                convert_file_inner(file, &output_file, &config, verbose)?;
                Ok(output_file)
            };

            match run() {
                Ok(output_file) => {
                    success.fetch_add(1, Ordering::Relaxed);
                    if !quiet {
                        println!("{}", output_file.display());
                    }
                    None
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    Some((file.clone(), e))
                }
            }
        })
        .collect();

    // Report errors
    for (file, e) in &errors {
        eprintln!("Error converting {}: {:#}", file.display(), e);
    }

    let success_count = success.load(Ordering::Relaxed);
    let failed_count = failed.load(Ordering::Relaxed);

    if !quiet {
        eprintln!("Converted {} files, {} failed", success_count, failed_count);
    }

    if failed_count > 0 {
        anyhow::bail!("{} files failed to convert", failed_count);
    }

    Ok(())
}

/// Inner conversion function that doesn't print results (for parallel use)
fn convert_file_inner(input: &Path, output: &Path, config: &Config, verbose: bool) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;

    let is_class = config.is_class(file_stem(input)?);
    let options = ParseOptions { verbose };

    let doc = rd_scan::parse_with_options(&content, is_class, options)
        .with_context(|| format!("Failed to parse: {}", input.display()))?;

    let markdown = rd2md_render::render(&doc);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(output, &markdown)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    Ok(())
}

/// Load configuration from the directory next to the input file
fn load_config_for(input: &Path) -> Result<Config> {
    let dir = input.parent().filter(|p| !p.as_os_str().is_empty());
    match dir {
        Some(dir) => Ok(Config::load_from_dir(dir)?.unwrap_or_default()),
        None => Ok(Config::default()),
    }
}

/// Output path for a file: same directory, stem plus the configured extension
fn output_name(input: &Path, extension: &str) -> Result<PathBuf> {
    Ok(input.with_file_name(format!("{}{}", file_stem(input)?, extension)))
}

fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))
}

/// Collect all .Rd files in a directory, sorted for stable output order
fn collect_rd_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension()
                && ext.eq_ignore_ascii_case("rd")
            {
                files.push(path);
            }
        } else if path.is_dir() && recursive {
            files.extend(collect_rd_files(&path, recursive)?);
        }
    }

    files.sort();

    Ok(files)
}
