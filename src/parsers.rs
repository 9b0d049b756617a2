use std::{fmt::Display, str::FromStr};

/// Largest indentation width accepted by `--indent`.
pub const MAX_INDENT: usize = 16;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse an indentation width in the inclusive range [0, 16].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is above 16.
pub fn parse_indent(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, Some(MAX_INDENT))
}
