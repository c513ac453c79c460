//! Number formatting for displayed metrics.
//!
//! Brazilian convention: `.` groups thousands and `,` separates decimals.
//! The original page grouped thousands with `.` but kept `.` as the decimal
//! point too, so `145.2` km read like a thousands group. Showing `145,2`
//! is an intentional change from that output.

/// Format kilometres with one decimal, e.g. `1.234,5`.
pub fn format_km(km: f64) -> String {
    let fixed = format!("{:.1}", km);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    format!("{sign}{},{frac_part}", group_thousands(digits))
}

/// Format whole minutes, e.g. `1.020`.
pub fn format_minutes(mins: u64) -> String {
    group_thousands(&mins.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
