//! CSV export of a [`Trajectory`].
//!
//! The format is fixed:
//!
//! ```text
//! t (s), x (m), v (m/s), a (m/s^2)
//! 0.000000,0.000000,5.000000,2.000000
//! 0.100000,0.510000,5.200000,2.000000
//! ```
//!
//! The header separates its columns with `, `; data rows use a bare `,`.
//! Every value has exactly six fractional digits and every record, including
//! the last, ends with `\n`.

use std::{io, string::FromUtf8Error};

use thiserror::Error;

use crate::Trajectory;

/// Header line, without its terminator.
pub const HEADER: &str = "t (s), x (m), v (m/s), a (m/s^2)";

const DECIMALS: usize = 6;

/// Magnitude from which browsers switch fixed-point output to exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write CSV record")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output")]
    Io(#[from] io::Error),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// Writes the trajectory as CSV to `writer`.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_csv<W: io::Write>(trajectory: &Trajectory, mut writer: W) -> Result<(), Error> {
    // The csv writer cannot emit the spaced header, so it goes out raw.
    writer.write_all(HEADER.as_bytes())?;
    writer.write_all(b"\n")?;

    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for sample in trajectory.samples() {
        csv.write_record([sample.t, sample.x, sample.v, sample.a].map(format_fixed))?;
    }
    csv.flush()?;

    Ok(())
}

/// Renders the trajectory as a CSV string.
///
/// # Errors
///
/// Returns an error if the CSV writer fails, which does not happen for an
/// in-memory buffer in practice.
pub fn to_csv(trajectory: &Trajectory) -> Result<String, Error> {
    let mut buffer = Vec::new();
    write_csv(trajectory, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Formats a value with six fractional digits the way a browser's
/// `toFixed(6)` does.
///
/// Exact decimal ties round away from zero, negative zero prints without a
/// sign, and non-finite values are spelled `NaN`, `Infinity`, `-Infinity`.
/// Magnitudes of `1e21` and above use the shortest exponent form, such as
/// `1e+21` or `-1.5e+22`.
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= EXPONENT_THRESHOLD {
        let exponent_form = format!("{magnitude:e}").replacen('e', "e+", 1);
        return format!("{sign}{exponent_form}");
    }

    format!("{sign}{}", round_half_up(magnitude))
}

/// Formats a non-negative finite value, breaking exact ties upward.
fn round_half_up(magnitude: f64) -> String {
    // A tie has a terminating expansion with exactly one more digit, so 40
    // digits is always enough to see it.
    let exact = format!("{magnitude:.40}");
    let Some(dot) = exact.find('.') else {
        return format!("{:.*}", DECIMALS, magnitude);
    };

    let (kept, dropped) = exact.split_at(dot + 1 + DECIMALS);
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');

    if is_tie {
        increment_last_digit(kept)
    } else {
        format!("{:.*}", DECIMALS, magnitude)
    }
}

/// Adds one unit in the last place to a plain decimal string.
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();

    for c in chars.iter_mut().rev() {
        match *c {
            '.' => {}
            '9' => *c = '0',
            _ => {
                *c = char::from(*c as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }

    // Every digit carried.
    std::iter::once('1').chain(chars).collect()
}
