use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medclaim::config::{CUSTOM_OUTPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_REQUIREMENT_PATH};
use medclaim::console::{collect_membership, describe_membership, preview, PREVIEW_LINES};
use medclaim::models::{sample_membership, FieldMap};
use medclaim::services::{id_source_for, ClaimGenerator};

/// Medicare claim XML generator - demo run followed by interactive entry
#[derive(Parser, Debug)]
#[command(name = "claims-cli")]
#[command(about = "Generate Medicare claim XML from a requirement document", long_about = None)]
struct Args {
    /// Requirement document read for every claim
    #[arg(short, long, default_value = DEFAULT_REQUIREMENT_PATH)]
    requirement: PathBuf,

    /// Output path for the demo claim
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    demo_output: PathBuf,

    /// Output path for the interactively entered claim
    #[arg(long, default_value = CUSTOM_OUTPUT_PATH)]
    custom_output: PathBuf,

    /// Seed for reproducible transaction, batch and claim numbers
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after the demo run
    #[arg(long)]
    skip_interactive: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medclaim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let generator = ClaimGenerator::medicare(id_source_for(args.seed));

    println!("==============================================");
    println!("Medicare Claims XML Generator");
    println!("==============================================\n");

    if let Err(e) = run(&args, &generator) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, generator: &ClaimGenerator) -> Result<(), Box<dyn std::error::Error>> {
    println!("1. DEMONSTRATION WITH SAMPLE DATA");
    println!("{}", "-".repeat(40));

    let membership = sample_membership();
    println!("Sample Membership Input:");
    for line in describe_membership(&membership) {
        println!("{}", line);
    }

    generate(args, generator, &membership, &args.demo_output)?;

    if args.skip_interactive {
        return Ok(());
    }

    println!("\n{}", "=".repeat(50));
    println!("INTERACTIVE MODE");
    println!("{}", "=".repeat(50));
    println!("Enter membership information (press Enter for defaults):\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let membership = collect_membership(&mut input, &mut output)?;
    output.flush()?;

    println!("\nProcessing your input...");
    generate(args, generator, &membership, &args.custom_output)
}

fn generate(
    args: &Args,
    generator: &ClaimGenerator,
    membership: &FieldMap,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nProcessing requirement document: {}", args.requirement.display());

    let claim = generator.generate_and_save(&args.requirement, membership, output_path)?;

    println!("\nXML Validation Result: {}", claim.report.label());
    println!("XML saved to: {}", output_path.display());

    println!("\nGenerated XML Preview:");
    println!("{}", "-".repeat(40));
    println!("{}", preview(&claim.xml, PREVIEW_LINES));

    Ok(())
}
