//! Checkpoint listing command.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use roadwatch_pipeline::{list_weight_files, PipelineConfig};

pub fn execute(config: &PipelineConfig, json: bool) -> Result<()> {
    let files = list_weight_files(&config.train.runs_root, &config.train.run_name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    if files.is_empty() {
        println!("No checkpoints found under {}.", config.train.runs_root.display());
        return Ok(());
    }

    println!("{}", format!("Checkpoints ({})", files.len()).bold().cyan());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Run", "File", "Size (MB)", "Modified", "Path"]);
    for file in &files {
        table.add_row([
            file.run.clone(),
            file.file.clone(),
            format!("{:.1}", file.size_mb),
            file.modified.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            file.path.display().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
