//! Clay CLI - Command line interface for the Clay compiler

mod driver;
mod error;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use clay_ast::ToClay;
use clay_lexer::tokenize;
use clay_parser::parse;

pub use error::CliError;
use report::{report, ReportStyle};

#[derive(Parser)]
#[command(name = "clay")]
#[command(about = "Clay to C compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// How errors are reported
    #[arg(long, value_enum, default_value_t = ReportStyle::Plain, global = true)]
    report: ReportStyle,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a Clay file to C
    Compile {
        /// Input file
        input: PathBuf,
        /// Output file, replaced only if compilation succeeds
        output: PathBuf,
    },
    /// Parse a file and output the AST as JSON
    Parse {
        /// Input file
        file: PathBuf,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print the token stream of a file
    Tokens {
        /// Input file
        file: PathBuf,
    },
    /// Print a file in canonical form
    Fmt {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let style = cli.report;
    let outcome = match &cli.command {
        Commands::Compile { input, output } => cmd_compile(input, output, style),
        Commands::Parse { file, pretty } => cmd_parse(file, *pretty, style),
        Commands::Tokens { file } => cmd_tokens(file, style),
        Commands::Fmt { file } => cmd_fmt(file, style),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(Reported) => ExitCode::FAILURE,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// The error has already been printed
struct Reported;

fn load(file: &Path, style: ReportStyle) -> Result<String, Reported> {
    driver::read_source(file).map_err(|err| {
        report(&err, style, file, None);
        Reported
    })
}

fn cmd_compile(input: &Path, output: &Path, style: ReportStyle) -> Result<(), Reported> {
    let source = load(input, style)?;

    let c_source = driver::translate(&source).map_err(|err| {
        report(&err, style, input, Some(&source));
        Reported
    })?;

    driver::write_output(output, &c_source).map_err(|err| {
        report(&err, style, output, None);
        Reported
    })?;

    println!(
        "Compilation successful: {} -> {}",
        input.display(),
        output.display()
    );
    Ok(())
}

fn cmd_parse(file: &Path, pretty: bool, style: ReportStyle) -> Result<(), Reported> {
    let source = load(file, style)?;
    let fail = |err: CliError| {
        report(&err, style, file, Some(&source));
        Reported
    };

    let program = parse(&source).map_err(|e| fail(e.into()))?;
    let json = if pretty {
        serde_json::to_string_pretty(&program)
    } else {
        serde_json::to_string(&program)
    }
    .map_err(|e| fail(e.into()))?;

    println!("{}", json);
    Ok(())
}

fn cmd_tokens(file: &Path, style: ReportStyle) -> Result<(), Reported> {
    let source = load(file, style)?;
    let tokens = tokenize(&source).map_err(|e| {
        report(&CliError::Parse(e.into()), style, file, Some(&source));
        Reported
    })?;

    for token in tokens {
        println!(
            "{}\t{}\t{:?}",
            token.location,
            token.kind.describe(),
            token.lexeme
        );
    }
    Ok(())
}

fn cmd_fmt(file: &Path, style: ReportStyle) -> Result<(), Reported> {
    let source = load(file, style)?;
    let program = parse(&source).map_err(|e| {
        report(&CliError::Parse(e), style, file, Some(&source));
        Reported
    })?;

    print!("{}", program.to_clay());
    Ok(())
}
