//! Parsing typed move input into coordinates.

use super::action::CoordinatesFormatError;
use super::Coordinates;
use tracing::instrument;

impl Coordinates {
    /// Parses `x,y` the forgiving way.
    ///
    /// The line is split on commas with trailing empty fields dropped, and
    /// exactly two fields must remain. Each field is read as a leading integer
    /// (whitespace skipped, optional sign); a field with no leading digits
    /// reads as `0` and values too large for `i32` saturate. Bounds are left
    /// to the board.
    #[instrument]
    pub fn parse_lenient(line: &str) -> Result<Self, CoordinatesFormatError> {
        let mut fields: Vec<&str> = line.trim().split(',').collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        match fields.as_slice() {
            [x, y] => Ok(Coordinates::new(leading_integer(x), leading_integer(y))),
            other => Err(CoordinatesFormatError {
                fields: other.len(),
            }),
        }
    }
}

/// Reads the integer prefix of `field`, or `0` when there is none.
fn leading_integer(field: &str) -> i32 {
    let field = field.trim_start();
    let (negative, rest) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };

    let magnitude = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d)));
    let value = if negative { -magnitude } else { magnitude };

    i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}
