//! Number parsing and printing with the loose rules GASM source expects.

/// Parses a whole token as a number. Anything that is not entirely a
/// number gives NaN. Blank text is zero, `Infinity` is accepted, as are
/// `0x`, `0o` and `0b` integers.
pub fn parse(token: &str) -> f64 {
    let s = token.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(n) = parse_radix(s) {
        return n;
    }
    // f64::from_str also takes "inf" and "nan"; those are not numbers here.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || c == '+' || c == '-')
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(s: &str) -> Option<f64> {
    let mut chars = s.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next() {
        Some('x') | Some('X') => 16,
        Some('o') | Some('O') => 8,
        Some('b') | Some('B') => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut n = 0.0;
    for ch in digits.chars() {
        match ch.to_digit(radix) {
            Some(d) => n = n * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(n)
}

/// Wraps to a signed 32-bit integer the way bitwise operators see numbers.
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let modulus = 4_294_967_296.0;
    let m = n.trunc().rem_euclid(modulus);
    if m >= 2_147_483_648.0 {
        (m - modulus) as i32
    } else {
        m as i32
    }
}

pub fn format(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
