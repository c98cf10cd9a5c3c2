//! Small CLI wrapper around the table generator

use std::path::PathBuf;

use clap::Parser;
use fwbt::{generate_to_file, GenerateConfig};

#[derive(Parser)]
#[command(about = "Generate an FWBT table filled with random records")]
struct Args {
    /// Bytes per key
    #[arg(long, default_value_t = 4)]
    key_width: u32,

    /// Bytes per value
    #[arg(long, default_value_t = 8)]
    value_width: u32,

    /// Number of records
    #[arg(long, default_value_t = 10)]
    entry_count: u32,

    /// Output path
    #[arg(long, default_value = "example_table.fwbt")]
    output: PathBuf,
}

fn main() -> fwbt::Result<()> {
    let args = Args::parse();
    let config = GenerateConfig::new(args.key_width, args.value_width, args.entry_count);

    generate_to_file(config, &args.output)?;

    match config.total_size() {
        Some(total) => println!("wrote {total} bytes to {}", args.output.display()),
        None => println!("wrote table to {}", args.output.display()),
    }
    Ok(())
}
