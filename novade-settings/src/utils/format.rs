//! printf-style rendering of a single floating point value.
//!
//! Float settings carry their display format as a C-style format string
//! (`"%.1f"`, `"%5.2f dB"`, `"%g"`). [`format_float`] understands the
//! floating point conversions `f F e E g G` with the `- + space 0 #` flags,
//! a width and a precision. `%%` prints a percent sign. Any other `%`
//! sequence is copied through unchanged.

/// Upper bound for width and precision; larger requests are clamped.
const MAX_FIELD: usize = 1024;

/// Parsed conversion specification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Conversion {
    left_align: bool,
    plus_sign: bool,
    space_sign: bool,
    zero_pad: bool,
    alternate: bool,
    width: usize,
    precision: Option<usize>,
    kind: u8,
}

/// Formats `value` through `format`, substituting every floating point
/// conversion with the value.
pub fn format_float(format: &str, value: f64) -> String {
    let mut out = String::with_capacity(format.len() + 8);
    let mut rest = format;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if let Some(stripped) = after.strip_prefix('%') {
            out.push('%');
            rest = stripped;
            continue;
        }
        match parse_conversion(after) {
            Some((conversion, used)) => {
                out.push_str(&render(&conversion, value));
                rest = &after[used..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn parse_conversion(spec: &str) -> Option<(Conversion, usize)> {
    let bytes = spec.as_bytes();
    let mut conversion = Conversion::default();
    let mut i = 0;

    while let Some(&flag) = bytes.get(i) {
        match flag {
            b'-' => conversion.left_align = true,
            b'+' => conversion.plus_sign = true,
            b' ' => conversion.space_sign = true,
            b'0' => conversion.zero_pad = true,
            b'#' => conversion.alternate = true,
            _ => break,
        }
        i += 1;
    }

    while let Some(digit) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        conversion.width = (conversion.width * 10 + usize::from(digit - b'0')).min(MAX_FIELD);
        i += 1;
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let mut precision = 0usize;
        while let Some(digit) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
            precision = (precision * 10 + usize::from(digit - b'0')).min(MAX_FIELD);
            i += 1;
        }
        conversion.precision = Some(precision);
    }

    // Length modifiers carry no meaning for a value that is already a double.
    while matches!(bytes.get(i), Some(b'l') | Some(b'L')) {
        i += 1;
    }

    match bytes.get(i) {
        Some(&kind) if b"fFeEgG".contains(&kind) => {
            conversion.kind = kind;
            Some((conversion, i + 1))
        }
        _ => None,
    }
}

fn render(conversion: &Conversion, value: f64) -> String {
    let upper = conversion.kind.is_ascii_uppercase();
    let precision = conversion.precision.unwrap_or(6);
    let magnitude = value.abs();
    let finite = magnitude.is_finite();

    let body = if !finite {
        let word = if magnitude.is_nan() { "nan" } else { "inf" };
        if upper {
            word.to_ascii_uppercase()
        } else {
            word.to_string()
        }
    } else {
        match conversion.kind.to_ascii_lowercase() {
            b'f' => fixed(magnitude, precision, conversion.alternate),
            b'e' => exponential(magnitude, precision, conversion.alternate, upper),
            _ => general(magnitude, precision, conversion.alternate, upper),
        }
    };

    let sign = if value.is_sign_negative() && !value.is_nan() {
        "-"
    } else if conversion.plus_sign {
        "+"
    } else if conversion.space_sign {
        " "
    } else {
        ""
    };

    let len = sign.len() + body.len();
    if len >= conversion.width {
        return format!("{sign}{body}");
    }
    let fill = conversion.width - len;
    if conversion.left_align {
        format!("{sign}{body}{}", " ".repeat(fill))
    } else if conversion.zero_pad && finite {
        format!("{sign}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{sign}{body}", " ".repeat(fill))
    }
}

fn fixed(magnitude: f64, precision: usize, alternate: bool) -> String {
    let mut out = format!("{:.*}", precision, magnitude);
    if alternate && precision == 0 {
        out.push('.');
    }
    out
}

/// Splits Rust's `1.5e3` notation into mantissa and decimal exponent.
fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

fn exponential(magnitude: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let formatted = format!("{:.*e}", precision, magnitude);
    let (mantissa, exponent) = split_exponent(&formatted);
    let dot = if alternate && precision == 0 { "." } else { "" };
    let marker = if upper { 'E' } else { 'e' };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{dot}{marker}{exponent_sign}{:02}", exponent.unsigned_abs())
}

fn general(magnitude: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let significant = precision.max(1);
    let scientific = format!("{:.*e}", significant - 1, magnitude);
    let (_, exponent) = split_exponent(&scientific);

    let out = if exponent >= -4 && i64::from(exponent) < significant as i64 {
        let decimals = (significant as i64 - 1 - i64::from(exponent)).max(0) as usize;
        fixed(magnitude, decimals, alternate)
    } else {
        exponential(magnitude, significant - 1, alternate, upper)
    };

    if alternate {
        out
    } else {
        strip_trailing_zeros(out)
    }
}

fn strip_trailing_zeros(formatted: String) -> String {
    let (mantissa, suffix) = match formatted.find(['e', 'E']) {
        Some(pos) => formatted.split_at(pos),
        None => (formatted.as_str(), ""),
    };
    if !mantissa.contains('.') {
        return formatted;
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{suffix}")
}
