//! Small display helpers.

/// Thousands-separated count, e.g. 1234567 -> "1,234,567".
pub(crate) fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed thousands-separated count; non-negative values get a leading `+`.
pub(crate) fn format_signed(n: i64) -> String {
    if n < 0 {
        format!("-{}", format_count(n.unsigned_abs()))
    } else {
        format!("+{}", format_count(n as u64))
    }
}

/// Diff cell text, e.g. "+12 (+50.0%)".
pub(crate) fn format_diff(value: i64, percent: f64) -> String {
    let psign = if percent >= 0.0 { "+" } else { "" };
    format!("{} ({psign}{percent:.1}%)", format_signed(value))
}
