//! Compact duration strings (`PT1H2M30S`)

/// Parses a compact duration into whole seconds
///
/// Only the time portion after `T` is read: hours, minutes and seconds, each
/// a run of digits followed by `H`, `M` or `S`, in that order. The date
/// portion between `P` and `T` is ignored.
///
/// Returns `None` when the value has no `P` prefix, no time portion, or is
/// otherwise malformed. A well-formed zero duration (`PT0S`) is `Some(0)`.
///
/// # Examples
///
/// ```
/// use yt_harvest::youtube::parse_duration;
///
/// assert_eq!(parse_duration("PT1H2M30S"), Some(3750));
/// assert_eq!(parse_duration("PT45S"), Some(45));
/// assert_eq!(parse_duration("P1D"), None);
/// assert_eq!(parse_duration(""), None);
/// ```
pub fn parse_duration(input: &str) -> Option<u64> {
    let rest = input.trim().strip_prefix('P')?;
    let (_date, time) = rest.split_once('T')?;
    if time.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let mut number: u64 = 0;
    let mut pending_digits = false;
    let mut last_rank = 0;

    for c in time.chars() {
        if let Some(digit) = c.to_digit(10) {
            number = number.checked_mul(10)?.checked_add(u64::from(digit))?;
            pending_digits = true;
            continue;
        }

        let (rank, unit) = match c {
            'H' => (1, 3600),
            'M' => (2, 60),
            'S' => (3, 1),
            _ => return None,
        };
        if rank <= last_rank {
            return None;
        }
        last_rank = rank;

        total = total.checked_add(number.checked_mul(unit)?)?;
        number = 0;
        pending_digits = false;
    }

    if pending_digits {
        return None;
    }

    Some(total)
}
