//! Duration Code Formatting
//!
//! Renders the catalog's ISO 8601 duration codes (`PT[nH][nM][nS]`) into the
//! human-readable form the descriptors carry.

/// Format an ISO 8601 duration code as `M:SS`, or `H:MM:SS` when an hour
/// component is present. Any code that cannot be parsed renders as `"0:00"`.
///
/// Pure function, no I/O.
pub fn format_duration(code: &str) -> String {
    match parse_duration_code(code) {
        Some((hours, minutes, seconds)) => {
            if hours > 0 {
                format!("{}:{:02}:{:02}", hours, minutes, seconds)
            } else {
                format!("{}:{:02}", minutes, seconds)
            }
        }
        None => String::from("0:00"),
    }
}

/// Decompose a `PT[nH][nM][nS]` code; absent segments default to 0.
fn parse_duration_code(code: &str) -> Option<(u64, u64, u64)> {
    let rest = code.strip_prefix("PT")?;

    let (mut hours, mut minutes, mut seconds) = (0u64, 0u64, 0u64);
    let mut digits = String::new();

    for ch in rest.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }

        if digits.is_empty() {
            return None;
        }
        let value: u64 = digits.parse().ok()?;
        match ch {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return None,
        }
        digits.clear();
    }

    // Trailing digits with no designator make the code unparseable.
    if !digits.is_empty() {
        return None;
    }

    Some((hours, minutes, seconds))
}
