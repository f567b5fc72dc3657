use anyhow::{Context, Result};
use clap::Parser;
use romscan::{write_reports, DirectoryScanner};
use std::io::{self, Write};
use std::path::PathBuf;

/// Print a CRC32 checksum and power-of-2 byte sample for every file in a
/// directory of ROM images.
#[derive(Parser)]
#[command(name = "romscan", version, about)]
struct Cli {
    /// Directory containing the ROM images (defaults to the current one)
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut scanner = DirectoryScanner::new(&cli.dir);

    // Skip the running executable when it sits inside the scanned
    // directory.
    if let Some(exe_name) = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    {
        scanner = scanner.exclude(exe_name);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_reports(&scanner, &mut out)
        .with_context(|| format!("Scan of {} failed", cli.dir.display()))?;
    out.flush().context("Failed to flush report output")?;

    Ok(())
}
