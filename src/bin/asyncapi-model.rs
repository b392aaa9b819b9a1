//! AsyncAPI model CLI
//!
//! Command-line interface for loading, bundling, validating and linting
//! AsyncAPI 2.3.0 documents.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use asyncapi_model::{
    bundle, lint_with, load_with, shape_by_name, shapes, FileStatus, LoadError, LoadOptions,
    Severity, DEFAULT_MAX_DEPTH,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "asyncapi-model")]
#[command(about = "Load, bundle and validate AsyncAPI 2.3.0 documents")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum nesting depth of referenced files
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// File suffix treated as an external document (repeatable, replaces yaml/yml/json)
    #[arg(long = "extension", global = true)]
    extensions: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a document and print the validated model as JSON
    Load {
        /// Root AsyncAPI document
        file: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Inline external references and print the bundled document
    Bundle {
        /// Root AsyncAPI document
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = BundleFormat::Yaml)]
        format: BundleFormat,
    },

    /// Check that a document loads and conforms to the AsyncAPI shapes
    Validate {
        /// Root AsyncAPI document
        file: PathBuf,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Lint documents for errors (syntax, broken refs, structure, examples)
    Lint {
        /// File or directory to lint
        path: PathBuf,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,
    },

    /// List the registered shapes, or the fields of one shape
    Shapes {
        /// Shape name (e.g. Info, AmqpExchange)
        name: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BundleFormat {
    Yaml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = LoadOptions::new().max_depth(cli.max_depth);
    if !cli.extensions.is_empty() {
        options = options.extensions(cli.extensions);
    }

    let result = match cli.command {
        Commands::Load {
            file,
            pretty,
            output,
        } => run_load(&file, &options, pretty, output),
        Commands::Bundle { file, format } => run_bundle(&file, &options, format),
        Commands::Validate { file, json } => run_validate(&file, &options, json),
        Commands::Lint {
            path,
            format,
            strict,
            quiet,
        } => run_lint(&path, &options, &format, strict, quiet),
        Commands::Shapes { name } => run_shapes(name.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

/// Install a stderr subscriber so stdout stays machine-readable.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(e: &LoadError) -> u8 {
    eprintln!("Error: {}", e);
    e.exit_code() as u8
}

fn run_load(
    file: &Path,
    options: &LoadOptions,
    pretty: bool,
    output: Option<PathBuf>,
) -> Result<(), u8> {
    let model = load_with(file, options).map_err(|e| fail(&e))?;

    let json_output = if pretty {
        serde_json::to_string_pretty(&model)
    } else {
        serde_json::to_string(&model)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    write_output(&json_output, output.as_deref())
}

fn run_bundle(file: &Path, options: &LoadOptions, format: BundleFormat) -> Result<(), u8> {
    let tree = bundle(file, options).map_err(|e| fail(&e))?;

    let rendered = match format {
        BundleFormat::Yaml => serde_yaml::to_string(&tree).map_err(|e| e.to_string()),
        BundleFormat::Json => serde_json::to_string_pretty(&tree).map_err(|e| e.to_string()),
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), u8> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| {
            eprintln!("Error writing to {}: {}", path.display(), e);
            3u8
        }),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn run_validate(file: &Path, options: &LoadOptions, json_output: bool) -> Result<(), u8> {
    match load_with(file, options) {
        Ok(model) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": true,
                    "channels": model.channels.len(),
                });
                println!("{}", output);
            } else {
                println!("Valid ({} channels)", model.channels.len());
            }
            Ok(())
        }
        Err(e) => {
            if json_output {
                let mut output = serde_json::json!({
                    "valid": false,
                    "kind": e.kind(),
                    "error": e.to_string(),
                });
                if let Some(violation) = e.validation() {
                    output["path"] = violation.path().into();
                }
                println!("{}", output);
            } else {
                eprintln!("Validation failed:");
                eprintln!("  {}", e);
            }
            Err(e.exit_code() as u8)
        }
    }
}

fn run_lint(
    path: &Path,
    options: &LoadOptions,
    format: &str,
    strict: bool,
    quiet: bool,
) -> Result<(), u8> {
    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(2);
    }

    let result = lint_with(path, strict, options);

    if format == "json" {
        let rendered = serde_json::to_string_pretty(&result).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?;
        println!("{}", rendered);
    } else {
        if !quiet {
            println!("Linting {} ...\n", path.display());
        }

        for file_result in &result.results {
            let status_icon = match file_result.status {
                FileStatus::Ok => "\x1b[32m✓\x1b[0m",
                FileStatus::Warning => "\x1b[33m⚠\x1b[0m",
                FileStatus::Error => "\x1b[31m✗\x1b[0m",
            };

            if !quiet || file_result.status != FileStatus::Ok {
                println!("  {} {}", status_icon, file_result.file.display());
            }

            for diag in &file_result.diagnostics {
                let (color, label) = match diag.severity {
                    Severity::Error => ("\x1b[31m", "error"),
                    Severity::Warning => ("\x1b[33m", "warning"),
                };
                if !quiet || diag.severity == Severity::Error {
                    println!(
                        "    {}{}[{}]\x1b[0m: {} - {}",
                        color, label, diag.code, diag.path, diag.message
                    );
                }
            }
        }

        println!();
        if result.is_ok() && (!strict || result.warnings == 0) {
            println!(
                "\x1b[32m✓ {} files checked, all passed\x1b[0m",
                result.files_checked
            );
        } else {
            println!(
                "\x1b[31m✗ {} files checked: {} passed, {} failed ({} errors, {} warnings)\x1b[0m",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            );
        }
    }

    if result.is_ok() && (!strict || result.warnings == 0) {
        Ok(())
    } else {
        Err(1)
    }
}

fn run_shapes(name: Option<&str>) -> Result<(), u8> {
    let Some(name) = name else {
        for shape in shapes() {
            println!("{} ({} fields)", shape.name, shape.fields.len());
        }
        return Ok(());
    };

    let Some(shape) = shape_by_name(name) else {
        eprintln!("Error: unknown shape: {}", name);
        return Err(2);
    };

    println!("{}", shape.name);
    for field in shape.fields {
        let alias = if field.name != field.wire {
            format!(" (as {})", field.name)
        } else {
            String::new()
        };
        let required = if field.required { "required" } else { "optional" };
        println!(
            "  {}{}: {}, {}",
            field.wire,
            alias,
            (field.kind)(),
            required
        );
    }
    Ok(())
}
