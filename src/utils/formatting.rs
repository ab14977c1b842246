//! Formatting utilities used for CLI and export outputs.

/// Round to two decimals, the precision `Dauer` is kept at.
/// Exact halves go to the even neighbour, so `0.125` becomes `0.12`.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

/// Hours with two decimals, e.g. `7.50`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", round2(hours))
}

pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p)
}

/// Horizontal bar proportional to `share` (0..=100) over `width` cells.
pub fn bar(share: f64, width: usize) -> String {
    let cells = ((share.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    "█".repeat(cells)
}
