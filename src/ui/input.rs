//! Parsing of the free-form values typed into the shell.

use phf::phf_map;

use crate::error::{Error, ErrorKind, Result};

static MONTHS: phf::Map<&'static str, u32> = phf_map! {
    "january" => 1, "jan" => 1,
    "february" => 2, "feb" => 2,
    "march" => 3, "mar" => 3,
    "april" => 4, "apr" => 4,
    "may" => 5,
    "june" => 6, "jun" => 6,
    "july" => 7, "jul" => 7,
    "august" => 8, "aug" => 8,
    "september" => 9, "sep" => 9,
    "october" => 10, "oct" => 10,
    "november" => 11, "nov" => 11,
    "december" => 12, "dec" => 12,
};

fn parse_number(input: &str, what: &str) -> Result<i32> {
    input.trim().parse::<i32>().map_err(|_| {
        Error::new(
            ErrorKind::MalformedNumericInput,
            &format!("Please enter a valid numeric {}.", what),
        )
    })
}

pub fn parse_day(input: &str) -> Result<i32> {
    parse_number(input, "day")
}

pub fn parse_year(input: &str) -> Result<i32> {
    parse_number(input, "year")
}

/// Accepts English month names, three letter abbreviations or 1-12.
pub fn parse_month(input: &str) -> Result<u32> {
    let trimmed = input.trim();

    if let Some(&month) = MONTHS.get(trimmed.to_lowercase().as_str()) {
        return Ok(month);
    }

    match trimmed.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(Error::new(
            ErrorKind::UnknownMonth,
            &format!("'{}' is not a month.", trimmed),
        )),
    }
}
