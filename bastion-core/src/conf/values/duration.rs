use crate::conf::values::kind_of;
use hcl::Value;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A signed duration with nanosecond precision.
///
/// Listener timeouts are allowed to be negative (they are soft tuning knobs
/// and are only rejected by the transport), so `std::time::Duration` cannot
/// hold every value the config layer accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoDuration(i64);

impl GoDuration {
    pub const ZERO: GoDuration = GoDuration(0);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub fn from_secs(secs: i64) -> Option<Self> {
        secs.checked_mul(NANOS_PER_SEC as i64).map(Self)
    }

    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts to a std duration. Negative durations have no std equivalent.
    pub fn as_std(&self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_nanos)
    }
}

impl From<Duration> for GoDuration {
    fn from(d: Duration) -> Self {
        Self(i64::try_from(d.as_nanos()).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for GoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        let nanos = self.0.unsigned_abs();

        if nanos < NANOS_PER_SEC {
            let (scale, unit) = if nanos < NANOS_PER_MICRO {
                (1, "ns")
            } else if nanos < NANOS_PER_MILLI {
                (NANOS_PER_MICRO, "µs")
            } else {
                (NANOS_PER_MILLI, "ms")
            };
            return write!(f, "{sign}{}{unit}", fractional(nanos, scale));
        }

        let secs = nanos / NANOS_PER_SEC;
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        let seconds = fractional(seconds * NANOS_PER_SEC + nanos % NANOS_PER_SEC, NANOS_PER_SEC);

        f.write_str(sign)?;
        if hours > 0 {
            write!(f, "{hours}h{minutes}m")?;
        } else if minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        write!(f, "{seconds}s")
    }
}

/// Renders `value / scale` with trailing fractional zeros trimmed.
fn fractional(value: u64, scale: u64) -> String {
    let whole = value / scale;
    let rem = value % scale;
    if rem == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{rem:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

impl Serialize for GoDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration {input:?}")]
    InvalidLiteral { input: String },

    #[error("missing unit in duration {input:?}")]
    MissingUnit { input: String },

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("invalid number of seconds {input:?}")]
    InvalidSeconds { input: String },

    #[error("could not parse duration from {kind} input")]
    UnsupportedType { kind: &'static str },
}

/// Parses a duration that is either a number of seconds or a unit-suffixed
/// duration literal.
///
/// * numbers are whole seconds (floats are truncated)
/// * strings ending in `s`, `m` or `h` are duration literals (`30s`, `1h30m`, `250ms`)
/// * any other string must be an integer number of seconds
/// * the empty string is zero
pub fn parse_duration_second(value: &Value) -> Result<GoDuration, DurationError> {
    match value {
        Value::Null => Ok(GoDuration::ZERO),
        Value::Number(n) => {
            let secs = if let Some(i) = n.as_i64() {
                i
            } else if let Some(f) = n.as_f64() {
                // `as` saturates, the range check below catches the rest
                f.trunc() as i64
            } else {
                return Err(DurationError::InvalidSeconds {
                    input: n.to_string(),
                });
            };
            GoDuration::from_secs(secs).ok_or_else(|| DurationError::InvalidSeconds {
                input: n.to_string(),
            })
        }
        Value::String(s) => parse_duration_str(s),
        other => Err(DurationError::UnsupportedType {
            kind: kind_of(other),
        }),
    }
}

fn parse_duration_str(input: &str) -> Result<GoDuration, DurationError> {
    if input.is_empty() {
        return Ok(GoDuration::ZERO);
    }

    if input.ends_with(['s', 'm', 'h']) {
        return parse_duration(input);
    }

    input
        .parse::<i64>()
        .ok()
        .and_then(GoDuration::from_secs)
        .ok_or_else(|| DurationError::InvalidSeconds {
            input: input.to_owned(),
        })
}

/// Parses a duration literal such as `300ms`, `-1.5h` or `2h45m`.
///
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
pub fn parse_duration(input: &str) -> Result<GoDuration, DurationError> {
    let invalid = || DurationError::InvalidLiteral {
        input: input.to_owned(),
    };

    let (negative, mut s) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if s == "0" {
        return Ok(GoDuration::ZERO);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let limit: u128 = if negative {
        1 << 63
    } else {
        i64::MAX as u128
    };
    let mut total: u128 = 0;

    while !s.is_empty() {
        let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
        let (int_part, rest) = s.split_at(int_len);
        s = rest;

        let mut frac_part = "";
        if let Some(rest) = s.strip_prefix('.') {
            let frac_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            frac_part = &rest[..frac_len];
            s = &rest[frac_len..];
        } else if int_part.is_empty() {
            return Err(invalid());
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit {
                input: input.to_owned(),
            });
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;

        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_owned(),
            input: input.to_owned(),
        })?;

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(invalid)?;

        if !frac_part.is_empty() {
            let mut numerator: u128 = 0;
            let mut denominator: u128 = 1;
            // digits past nanosecond precision of the largest unit do not matter
            for digit in frac_part.bytes().take(24) {
                numerator = numerator * 10 + u128::from(digit - b'0');
                denominator *= 10;
            }
            nanos = nanos
                .checked_add(numerator * scale / denominator)
                .ok_or_else(invalid)?;
        }

        total = total.checked_add(nanos).ok_or_else(invalid)?;
        if total > limit {
            return Err(invalid());
        }
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    Ok(GoDuration(signed as i64))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3600 * NANOS_PER_SEC,
        _ => return None,
    };
    Some(u128::from(nanos))
}
