//! thumbvec - converts Thumb disassembly listings into encoder test vectors
//!
//! Usage:
//!   thumbvec <object>                  Disassemble and print test vectors
//!   thumbvec <object> --objdump <bin>  Use a specific disassembler binary
//!   thumbvec --listing <file>          Convert an existing listing file

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use thumbvec::{objdump, vectors, Objdump};

#[derive(Parser)]
#[command(name = "thumbvec")]
#[command(about = "Converts Thumb disassembly listings into encoder test vectors", long_about = None)]
struct Cli {
    /// Object file to disassemble
    #[arg(required_unless_present = "listing")]
    object: Option<PathBuf>,

    /// Convert an existing listing file instead of running the disassembler
    #[arg(long, conflicts_with = "object")]
    listing: Option<PathBuf>,

    /// Disassembler binary to invoke
    #[arg(long, default_value = objdump::DEFAULT_OBJDUMP)]
    objdump: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let listing = if let Some(path) = &cli.listing {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing: {}", path.display()))?
    } else if let Some(object) = &cli.object {
        Objdump::with_tool(&cli.objdump)
            .disassemble(object)
            .with_context(|| format!("Failed to disassemble {}", object.display()))?
    } else {
        bail!("an object file or --listing <file> is required");
    };

    for vector in vectors(&listing) {
        println!("{}", vector);
    }

    Ok(())
}
