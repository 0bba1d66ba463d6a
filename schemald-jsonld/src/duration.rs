//! ISO 8601 duration text (`PnDTnHnMnS`) for [`TimeDelta`].
//!
//! Years and months are read at fixed lengths of 365 and 30 days, and weeks
//! as seven days. Writing only ever uses the `D`, `H`, `M` and `S`
//! designators. Only the seconds component may carry a fraction.

use chrono::TimeDelta;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Formats a duration. With `fold_days` whole days are written with the
/// `D` designator; without it hours grow unbounded (`PT26H`).
pub(crate) fn format(value: &TimeDelta, fold_days: bool) -> String {
    if value.is_zero() {
        return "PT0S".to_owned();
    }

    let mut out = String::new();
    if *value < TimeDelta::zero() {
        out.push('-');
    }
    let magnitude = value.abs();
    let total = magnitude.num_seconds();
    let nanos = magnitude.subsec_nanos();

    let (days, rest) = if fold_days {
        (total / SECONDS_PER_DAY, total % SECONDS_PER_DAY)
    } else {
        (0, total)
    };
    let hours = rest / SECONDS_PER_HOUR;
    let minutes = rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let seconds = rest % SECONDS_PER_MINUTE;

    out.push('P');
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if seconds > 0 || nanos > 0 {
            out.push_str(&seconds.to_string());
            if nanos > 0 {
                let fraction = format!("{nanos:09}");
                out.push('.');
                out.push_str(fraction.trim_end_matches('0'));
            }
            out.push('S');
        }
    }
    out
}

/// Parses a duration, returning `None` for anything that is not a
/// well-formed ISO 8601 duration.
pub(crate) fn parse(text: &str) -> Option<TimeDelta> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let rest = rest.strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => {
            if time.is_empty() {
                return None;
            }
            (date, Some(time))
        }
        None => (rest, None),
    };
    if date_part.is_empty() && time_part.is_none() {
        return None;
    }

    let mut seconds: i64 = 0;
    let mut nanos: u32 = 0;

    // Date part: years, months, weeks, days; each at most once and in order.
    let mut rank = 0;
    for (number, designator) in components(date_part)? {
        let (unit, next_rank) = match designator {
            'Y' => (SECONDS_PER_YEAR, 1),
            'M' => (SECONDS_PER_MONTH, 2),
            'W' => (SECONDS_PER_WEEK, 3),
            'D' => (SECONDS_PER_DAY, 4),
            _ => return None,
        };
        if next_rank <= rank {
            return None;
        }
        rank = next_rank;
        seconds = seconds.checked_add(whole(number)?.checked_mul(unit)?)?;
    }

    if let Some(time_part) = time_part {
        let mut rank = 0;
        for (number, designator) in components(time_part)? {
            let next_rank = match designator {
                'H' => 1,
                'M' => 2,
                'S' => 3,
                _ => return None,
            };
            if next_rank <= rank {
                return None;
            }
            rank = next_rank;
            match designator {
                'H' => seconds = seconds.checked_add(whole(number)?.checked_mul(SECONDS_PER_HOUR)?)?,
                'M' => seconds = seconds.checked_add(whole(number)?.checked_mul(SECONDS_PER_MINUTE)?)?,
                _ => {
                    let (secs, fraction) = fractional(number)?;
                    seconds = seconds.checked_add(secs)?;
                    nanos = fraction;
                }
            }
        }
    }

    let magnitude = TimeDelta::new(seconds, nanos)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Splits `"1DT"`-style text into `(number, designator)` pairs.
fn components(part: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }
        let number = &part[start..i];
        if number.is_empty() {
            return None;
        }
        out.push((number, c));
        start = i + c.len_utf8();
    }
    // Trailing digits without a designator.
    if start != part.len() {
        return None;
    }
    Some(out)
}

fn whole(number: &str) -> Option<i64> {
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

/// Parses `"12"`, `"1.5"` or `"1,5"` into whole seconds and nanoseconds.
fn fractional(number: &str) -> Option<(i64, u32)> {
    let (int, frac) = match number.find(['.', ',']) {
        Some(at) => (&number[..at], &number[at + 1..]),
        None => (number, ""),
    };
    let secs = whole(int)?;
    if frac.is_empty() {
        return if number.len() == int.len() { Some((secs, 0)) } else { None };
    }
    if frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let nanos: u32 = format!("{frac:0<9}").parse().ok()?;
    Some((secs, nanos))
}
