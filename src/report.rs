use chrono::DateTime;

use crate::lookup::Pass;

/// One human-readable line per pass. Rise times outside chrono's range are
/// shown as raw epoch seconds instead of panicking.
pub fn format_pass(pass: &Pass) -> String {
    let risetime = DateTime::from_timestamp(pass.risetime, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("epoch {}", pass.risetime));
    format!("Next pass at {} for {} seconds!", risetime, pass.duration)
}

/// Print the listing, one line per pass, to stdout. An empty list prints
/// nothing.
pub fn print_passes(passes: &[Pass]) {
    for pass in passes {
        println!("{}", format_pass(pass));
    }
}
