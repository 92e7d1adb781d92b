use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use declgraph::core::converter::DEFAULT_FALLBACK_DESCRIPTION;
use declgraph::core::{BuildOptions, DeclarationAnalyzer, IdScheme};
use declgraph::formatters::{GraphJsonFormatter, JsonStyle};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "declgraph",
    version = "0.1.0",
    author = "declgraph developers",
    about = "Convert exported interface declarations into a force-graph JSON document"
)]
struct Cli {
    /// Declaration file to read
    #[arg(short, long, value_name = "FILE", default_value = "r4b.d.ts")]
    input: PathBuf,

    /// Graph file to write
    #[arg(short, long, value_name = "FILE", default_value = "output.json")]
    output: PathBuf,

    /// Property id scheme: legacy (concatenated) or composite (dotted)
    #[arg(long, value_name = "SCHEME", value_enum, default_value_t = IdScheme::Legacy)]
    id_scheme: IdScheme,

    /// JSON layout: pretty or compact
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = JsonStyle::Pretty)]
    format: JsonStyle,

    /// Description used for interfaces without a doc comment
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_FALLBACK_DESCRIPTION)]
    fallback_description: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        id_scheme,
        format,
        fallback_description,
    } = cli;

    let start_time = Instant::now();

    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!("Id scheme: {}", id_scheme.as_str());
    println!("Format: {}", format.as_str());

    let analyzer = DeclarationAnalyzer::new(BuildOptions {
        id_scheme,
        fallback_description,
    })?;
    let (graph, stats) = analyzer.analyze_file(&input)?;

    println!(
        "Extracted {} interfaces with {} properties",
        stats.interfaces, stats.properties
    );
    if stats.unresolved_parents > 0 {
        println!(
            "{} interfaces extend a type not declared before them",
            stats.unresolved_parents
        );
    }

    GraphJsonFormatter::new()
        .with_style(format)
        .format_to_file(&graph, &output)?;

    println!("JSON file generated successfully at: {}", output.display());
    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
