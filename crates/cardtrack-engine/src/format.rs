use cardtrack_types::parse_timestamp;
use chrono::TimeZone;
use std::fmt::Display;

/// Decimal places for hours on card badges
pub const BADGE_PRECISION: usize = 1;
/// Decimal places for hours in the metrics panel
pub const PANEL_PRECISION: usize = 2;

/// Digits inspected past the requested precision when rounding. A double
/// near enough to a tie to be printed differently from it is always told
/// apart within this many places.
const GUARD_DIGITS: usize = 30;

/// Seconds as hours with a fixed number of decimals: `7200` → `"2.0"`.
///
/// Exact ties round away from zero, so 900 s is `"0.3"` on a badge.
pub fn format_hours(seconds: f64, precision: usize) -> String {
    round_half_up(seconds / 3600.0, precision)
}

/// Fixed-point text rounded half away from zero.
///
/// `{:.N}` breaks exact ties toward even (`0.25` → `"0.2"`), so the value is
/// expanded past `precision` and the digits are rounded as text.
fn round_half_up(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", precision, value);
    }

    let wide = format!("{:.*}", precision + GUARD_DIGITS, value.abs());
    let (kept, dropped) = wide.split_at(wide.len() - GUARD_DIGITS);
    let mut digits: Vec<char> = kept.chars().collect();
    if dropped.chars().next().is_some_and(|d| d >= '5') {
        carry(&mut digits);
    }
    if digits.last() == Some(&'.') {
        digits.pop();
    }

    let text: String = digits.into_iter().collect();
    if value < 0.0 { format!("-{}", text) } else { text }
}

/// Add one unit in the last place of a decimal digit string.
fn carry(digits: &mut Vec<char>) {
    for d in digits.iter_mut().rev() {
        match *d {
            '.' => continue,
            '9' => *d = '0',
            _ => {
                *d = char::from(*d as u8 + 1);
                return;
            }
        }
    }
    digits.insert(0, '1');
}

/// Render a wire timestamp in `tz` as `M/D/YYYY, h:mm:ss AM`.
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => raw.to_string(),
    }
}
