//! Shared helper functions for CLI commands
//!
//! Formatting utilities used by several command modules.

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an integer with comma thousands separators
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Format a mileage reading with its unit, e.g. "45,000 mi"
pub fn format_mileage(mileage: i64, unit: &str) -> String {
    format!("{} {}", group_thousands(mileage), unit)
}

/// Format a cost with two decimals, e.g. "$89.99"
pub fn format_cost(cost: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, cost)
}
