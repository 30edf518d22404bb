//! Digit formatting

use heapless::String;

/// Two ASCII digits
pub type TwoDigits = String<2>;

/// Format a value as two zero-padded digits
///
/// Hours (0-23) and minutes (0-59) always fit; larger values keep their
/// last two digits.
pub fn two_digit(value: u8) -> TwoDigits {
    let value = value % 100;
    let mut out = String::new();
    // Capacity is exactly two, both pushes fit
    let _ = out.push(char::from(b'0' + value / 10));
    let _ = out.push(char::from(b'0' + value % 10));
    out
}
