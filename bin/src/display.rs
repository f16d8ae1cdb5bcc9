//! Display utilities and output formatting for the cantina CLI.

use anyhow::Result;
use cantina_lib::prelude::*;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render the peak windows of a profile, e.g. "11:00-13:59, 16:00-18:59".
pub(crate) fn format_peak_windows(windows: &[PeakWindow]) -> String {
    if windows.is_empty() {
        return "none".to_string();
    }
    windows
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print vendor profiles as a table.
pub(crate) fn print_profiles_table(profiles: &VendorProfiles) {
    println!(
        "{:<16} {:>8} {:>10} {:>8}  {}",
        "VENDOR", "CAPACITY", "PARALLEL", "BUFFER", "PEAK WINDOWS"
    );
    println!("{}", "-".repeat(72));

    for (vendor, config) in profiles.iter() {
        println!(
            "{:<16} {:>8} {:>10.2} {:>7}m  {}",
            vendor,
            config.capacity(),
            config.parallel_efficiency(),
            config.acceptance_buffer_minutes(),
            format_peak_windows(config.peak_windows()),
        );
    }

    println!("\nTotal: {} profiles", profiles.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_peak_windows() {
        assert_eq!(format_peak_windows(&[]), "none");
        assert_eq!(
            format_peak_windows(&[PeakWindow::LUNCH, PeakWindow::EVENING]),
            "11:00-13:59, 16:00-18:59"
        );
    }
}
