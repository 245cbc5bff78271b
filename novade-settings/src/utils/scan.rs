//! `scanf`-style numeric scanning used by string round-tripping.
//!
//! Each scanner skips leading whitespace, consumes the longest prefix that
//! forms a number and ignores whatever follows. `None` means no number was
//! found; callers leave their target untouched in that case.

fn skip_whitespace(input: &str) -> &str {
    input.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Splits an optional sign off the front. Returns `(negative, rest)`.
fn split_sign(input: &str) -> (bool, &str) {
    match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    }
}

fn leading_digits(input: &str) -> &str {
    let end = input
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(input.len());
    &input[..end]
}

/// Accumulates decimal digits, saturating at `u64::MAX`.
fn accumulate(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    })
}

/// Scans a signed decimal integer (`%d`). Out-of-range input saturates.
pub fn scan_i32(input: &str) -> Option<i32> {
    let (negative, rest) = split_sign(skip_whitespace(input));
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    let magnitude = accumulate(digits);
    let value = if negative {
        i64::try_from(magnitude).map(|m| -m).unwrap_or(i64::MIN)
    } else {
        i64::try_from(magnitude).unwrap_or(i64::MAX)
    };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Scans an unsigned decimal integer (`%u`).
///
/// A leading minus sign negates modulo 2^32, the way `strtoul` does.
/// Magnitudes above `u32::MAX` saturate.
pub fn scan_u32(input: &str) -> Option<u32> {
    let (negative, rest) = split_sign(skip_whitespace(input));
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    let value = u32::try_from(accumulate(digits)).unwrap_or(u32::MAX);
    Some(if negative { value.wrapping_neg() } else { value })
}

/// Scans a decimal floating point number (`%f`), including `inf`,
/// `infinity` and `nan` in any case.
pub fn scan_f32(input: &str) -> Option<f32> {
    let trimmed = skip_whitespace(input);
    let (_, unsigned) = split_sign(trimmed);
    let sign_len = trimmed.len() - unsigned.len();

    for word in ["infinity", "inf", "nan"] {
        let matched = unsigned
            .as_bytes()
            .get(..word.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(word.as_bytes()));
        if matched {
            return trimmed[..sign_len + word.len()].parse::<f32>().ok();
        }
    }

    let bytes = unsigned.as_bytes();
    let mut end = leading_digits(unsigned).len();
    let mut mantissa_digits = end;
    if bytes.get(end) == Some(&b'.') {
        let fraction = leading_digits(&unsigned[end + 1..]).len();
        mantissa_digits += fraction;
        end += 1 + fraction;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let (_, exponent) = split_sign(&unsigned[end + 1..]);
        let exponent_sign_len = unsigned.len() - end - 1 - exponent.len();
        let exponent_digits = leading_digits(exponent).len();
        if exponent_digits > 0 {
            end += 1 + exponent_sign_len + exponent_digits;
        }
    }

    trimmed[..sign_len + end].parse::<f32>().ok()
}
