//! Compact human-readable durations: `850ns`, `12.5µs`, `123.456ms`, `2m3.5s`.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Formats a duration in the largest unit that keeps the value readable.
/// Below one second a single unit with a decimal fraction is used; from one
/// second up the value is split into hours, minutes and fractional seconds.
pub fn format_duration(d: Duration) -> String {
    let ns = d.as_nanos();
    if ns == 0 {
        return "0s".to_string();
    }
    if ns < NANOS_PER_MICRO {
        return format!("{}ns", ns);
    }
    if ns < NANOS_PER_MILLI {
        return format!("{}µs", decimal(ns / NANOS_PER_MICRO, ns % NANOS_PER_MICRO, 3));
    }
    if ns < NANOS_PER_SEC {
        return format!("{}ms", decimal(ns / NANOS_PER_MILLI, ns % NANOS_PER_MILLI, 6));
    }

    let secs = ns / NANOS_PER_SEC;
    let frac = ns % NANOS_PER_SEC;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h{}m", hours, minutes));
    } else if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&decimal(seconds, frac, 9));
    out.push('s');
    out
}

/// `whole.frac` with `frac` zero-padded to `digits` and trailing zeros trimmed.
fn decimal(whole: u128, frac: u128, digits: usize) -> String {
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = digits);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
