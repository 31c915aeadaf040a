//! stackvm command-line front-end
//!
//! Two thin pass-throughs: `asm` feeds source text to the assembler and
//! writes the binary, `run` feeds a binary to the VM and writes the JSON
//! memory dump. All the actual logic lives in the library crates.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use stackvm_runtime::dump;
use stackvm_spec::Program;

#[derive(Parser)]
#[command(name = "stackvm", version, about = "Assembler and interpreter for stackvm programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble source text into a binary program
    Asm {
        /// Assembly source file
        input: PathBuf,

        /// Binary output file
        output: PathBuf,

        /// Print the intermediate instructions and their encoded bytes
        #[arg(long)]
        listing: bool,
    },

    /// Execute a binary program and dump a memory range
    Run {
        /// Binary program file
        binary: PathBuf,

        /// JSON memory dump output file
        dump: PathBuf,

        /// First address of the dump range (inclusive)
        #[arg(long)]
        start: u32,

        /// Last address of the dump range (inclusive)
        #[arg(long)]
        end: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Asm {
            input,
            output,
            listing,
        } => cmd_asm(&input, &output, listing),
        Command::Run {
            binary,
            dump,
            start,
            end,
        } => cmd_run(&binary, &dump, start, end),
    }
}

fn cmd_asm(input: &Path, output: &Path, listing: bool) -> anyhow::Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let instructions = stackvm_assembler::parse_source(&source)?;
    let program = Program::from_instructions(&instructions);

    fs::write(output, program.to_bytes())
        .with_context(|| format!("failed to write {}", output.display()))?;

    if listing {
        print!("{}", stackvm_assembler::listing(&instructions));
    }
    println!("Assembled {} instructions", instructions.len());

    Ok(())
}

fn cmd_run(binary: &Path, dump_path: &Path, start: u32, end: u32) -> anyhow::Result<()> {
    let bytes =
        fs::read(binary).with_context(|| format!("failed to read {}", binary.display()))?;
    let program = Program::from_bytes(&bytes)?;

    let vm = stackvm_runtime::run(program)?;

    dump::write_json(dump_path, vm.memory(), start, end)
        .with_context(|| format!("failed to write {}", dump_path.display()))?;
    println!("Memory dump saved to {}", dump_path.display());

    Ok(())
}
