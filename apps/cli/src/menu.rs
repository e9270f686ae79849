//! Interactive session menu.
//!
//! Four fixed choices, one line of input, re-prompt without limit on
//! anything else. All failures are terminal for the chosen selection; the
//! program exits rather than looping back here.

use crate::commands;
use anyhow::Result;
use colored::Colorize;
use roadwatch_pipeline::{probe_gpu, GpuStatus, PipelineConfig};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FreshStart,
    Resume,
    DownloadOnly,
    Exit,
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("{}", "        Roadwatch - Vehicle Detection Training".bold());
    println!("{}", "=".repeat(60));
    println!();
}

async fn report_gpu() {
    println!("Checking GPU...");
    match probe_gpu().await {
        GpuStatus::Available { name, driver } => {
            println!("  {} GPU ready: {name} (driver {driver})", "✓".green());
        }
        GpuStatus::NotDetected => {
            println!("  {} No GPU detected - training will use the CPU (much slower)", "!".yellow());
        }
        GpuStatus::ProbeUnavailable => {
            println!("  {} GPU probe unavailable (nvidia-smi not found)", "!".yellow());
        }
    }
    println!();
}

fn print_menu() {
    println!("Select a mode:");
    println!();
    println!("  [1] Start fresh");
    println!("      - download the dataset, then train from scratch");
    println!("  [2] Resume training");
    println!("      - continue from the latest checkpoint");
    println!("  [3] Download dataset only");
    println!("  [4] Exit");
    println!();
}

/// Read a menu choice, re-prompting until the input is one of 1-4.
fn read_choice(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<MenuChoice> {
    loop {
        write!(output, "Enter choice [1-4]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed before a choice was made",
            ));
        }

        match line.trim() {
            "1" => return Ok(MenuChoice::FreshStart),
            "2" => return Ok(MenuChoice::Resume),
            "3" => return Ok(MenuChoice::DownloadOnly),
            "4" => return Ok(MenuChoice::Exit),
            _ => writeln!(output, "Invalid choice, please enter 1, 2, 3 or 4")?,
        }
    }
}

pub async fn run(config: &PipelineConfig) -> Result<()> {
    clear_screen();
    print_banner();
    report_gpu().await;
    print_menu();

    let choice = {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        read_choice(&mut stdin.lock(), &mut stdout)?
    };
    println!();

    match choice {
        MenuChoice::FreshStart => {
            println!("{}", "Starting fresh...".bold());
            match commands::dataset::execute(config, false).await {
                Ok(path) => {
                    commands::train::launch(config, &path, false).await?;
                }
                Err(e) => {
                    eprintln!("{} Dataset download failed: {e:#}", "✗".red());
                    std::process::exit(1);
                }
            }
        }
        MenuChoice::Resume => {
            println!("{}", "Resuming from the latest checkpoint...".bold());
            commands::resume::execute(config, None, false).await?;
        }
        MenuChoice::DownloadOnly => {
            match commands::dataset::execute(config, false).await {
                Ok(path) => println!("Dataset available at: {}", path.display()),
                Err(e) => eprintln!("{} Dataset download failed: {e:#}", "✗".red()),
            }
        }
        MenuChoice::Exit => {
            println!("Goodbye!");
        }
    }

    Ok(())
}
