/// Compact row-count rendering for the stdout report lines.
pub fn format_count(n: usize) -> String {
    match n {
        n if n >= 1_000_000_000 => format!("{:0.1}B", n as f64 / 1_000_000_000.0),
        n if n >= 1_000_000 => format!("{:0.1}M", n as f64 / 1_000_000.0),
        n if n >= 10_000 => format!("{:0.1}K", n as f64 / 1_000.0),
        _ => n.to_string(),
    }
}
