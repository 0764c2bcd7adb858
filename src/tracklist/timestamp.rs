use std::fmt;

/// Parse a colon-separated, most-significant-first timestamp into milliseconds.
///
/// Each field is worth 60 times the field to its right, so `"1:02:03"` is one
/// hour, two minutes and three seconds. Any number of fields is accepted:
/// `"45"` is seconds, `"1:00:00:00"` is sixty hours.
pub fn parse_timestamp(value: &str) -> Result<u64, TimestampError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Empty);
    }

    let fields: Vec<&str> = trimmed.split(':').map(str::trim).collect();
    let mut total_ms: u64 = 0;
    // `None` once the unit no longer fits in a u64; only zeros may sit there.
    let mut unit_ms: Option<u64> = Some(1_000);

    for (index, field) in fields.iter().enumerate().rev() {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimestampError::InvalidField {
                index,
                field: field.to_string(),
            });
        }

        let amount: u64 = field.parse().map_err(|_| TimestampError::Overflow)?;
        if amount != 0 {
            let component = unit_ms
                .and_then(|unit| amount.checked_mul(unit))
                .ok_or(TimestampError::Overflow)?;
            total_ms = total_ms
                .checked_add(component)
                .ok_or(TimestampError::Overflow)?;
        }

        unit_ms = unit_ms.and_then(|unit| unit.checked_mul(60));
    }

    Ok(total_ms)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    Empty,
    InvalidField { index: usize, field: String },
    Overflow,
}

impl std::error::Error for TimestampError {}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::Empty => write!(f, "timestamp cannot be empty"),
            TimestampError::InvalidField { index, field } => write!(
                f,
                "field {} ('{}') is not a non-negative integer",
                index + 1,
                field
            ),
            TimestampError::Overflow => write!(f, "timestamp is too large"),
        }
    }
}
