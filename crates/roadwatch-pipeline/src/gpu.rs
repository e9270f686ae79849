//! Best-effort GPU availability probe.

use tokio::process::Command;

/// Result of the probe shown before the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuStatus {
    Available { name: String, driver: String },
    /// The probe ran but reported no usable device.
    NotDetected,
    /// The probing tool itself is missing; training may still run on CPU.
    ProbeUnavailable,
}

/// Ask `nvidia-smi` for the first GPU's name and driver version.
///
/// Informational only: every failure collapses into a status, never an
/// error, and the caller proceeds regardless.
pub async fn probe_gpu() -> GpuStatus {
    let output = match Command::new("nvidia-smi")
        .args(["--query-gpu=name,driver_version", "--format=csv,noheader"])
        .output()
        .await
    {
        Ok(output) => output,
        Err(_) => return GpuStatus::ProbeUnavailable,
    };

    if !output.status.success() {
        return GpuStatus::NotDetected;
    }

    match parse_query_output(&String::from_utf8_lossy(&output.stdout)) {
        Some((name, driver)) => GpuStatus::Available { name, driver },
        None => GpuStatus::NotDetected,
    }
}

fn parse_query_output(stdout: &str) -> Option<(String, String)> {
    let line = stdout.lines().find(|l| !l.trim().is_empty())?;
    let (name, driver) = line.split_once(',')?;
    let (name, driver) = (name.trim(), driver.trim());
    if name.is_empty() || driver.is_empty() {
        return None;
    }
    Some((name.to_string(), driver.to_string()))
}
