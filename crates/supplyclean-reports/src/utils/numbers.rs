use std::time::Duration;

/// Humanize a row count: `4_536` becomes `4.5K`.
pub fn format_numbers(n: usize) -> String {
    match n {
        n if n >= 1_000_000_000 => format!("{:0.1}B", n as f64 / 1_000_000_000.0),
        n if n >= 1_000_000 => format!("{:0.1}M", n as f64 / 1_000_000.0),
        n if n >= 1_000 => format!("{:0.1}K", n as f64 / 1_000.0),
        _ => n.to_string(),
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms >= 60_000 {
        format!("{:.1}min", elapsed.as_secs_f64() / 60.0)
    } else if ms >= 1_000 {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        format!("{}ms", ms)
    }
}
