use miette::{Diagnostic, SourceSpan};
use nom::{branch::alt, bytes::complete::tag, combinator::value, IResult};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Digit {
    #[strum(to_string = "zero", serialize = "0")]
    Zero = 0,
    #[strum(to_string = "one", serialize = "1")]
    One,
    #[strum(to_string = "two", serialize = "2")]
    Two,
    #[strum(to_string = "three", serialize = "3")]
    Three,
    #[strum(to_string = "four", serialize = "4")]
    Four,
    #[strum(to_string = "five", serialize = "5")]
    Five,
    #[strum(to_string = "six", serialize = "6")]
    Six,
    #[strum(to_string = "seven", serialize = "7")]
    Seven,
    #[strum(to_string = "eight", serialize = "8")]
    Eight,
    #[strum(to_string = "nine", serialize = "9")]
    Nine,
}

impl Digit {
    pub fn value(self) -> u32 {
        self as u32
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum CalibrationError {
    #[error("no digit found in line {line_number}")]
    NoDigitFound {
        #[source_code]
        line: String,

        #[label("no digit in here")]
        bad_bit: SourceSpan,

        line_number: usize,
    },
}

fn numeral(i: &str) -> IResult<&str, Digit> {
    alt((
        value(Digit::Zero, tag("0")),
        value(Digit::One, tag("1")),
        value(Digit::Two, tag("2")),
        value(Digit::Three, tag("3")),
        value(Digit::Four, tag("4")),
        value(Digit::Five, tag("5")),
        value(Digit::Six, tag("6")),
        value(Digit::Seven, tag("7")),
        value(Digit::Eight, tag("8")),
        value(Digit::Nine, tag("9")),
    ))(i)
}

fn word(i: &str) -> IResult<&str, Digit> {
    alt((
        value(Digit::Zero, tag("zero")),
        value(Digit::One, tag("one")),
        value(Digit::Two, tag("two")),
        value(Digit::Three, tag("three")),
        value(Digit::Four, tag("four")),
        value(Digit::Five, tag("five")),
        value(Digit::Six, tag("six")),
        value(Digit::Seven, tag("seven")),
        value(Digit::Eight, tag("eight")),
        value(Digit::Nine, tag("nine")),
    ))(i)
}

fn numeral_or_word(i: &str) -> IResult<&str, Digit> {
    alt((numeral, word))(i)
}

// Every start position is tried on its own, so "eightwo" yields both 8 and 2.
fn digit_at<F>(line: &str, pos: usize, token: &F) -> Option<Digit>
where
    F: Fn(&str) -> IResult<&str, Digit>,
{
    token(&line[pos..]).ok().map(|(_, digit)| digit)
}

fn first_digit<F>(line: &str, token: &F) -> Option<Digit>
where
    F: Fn(&str) -> IResult<&str, Digit>,
{
    line
        .char_indices()
        .find_map(|(pos, _)| digit_at(line, pos, token))
}

fn last_digit<F>(line: &str, token: &F) -> Option<Digit>
where
    F: Fn(&str) -> IResult<&str, Digit>,
{
    line
        .char_indices()
        .rev()
        .find_map(|(pos, _)| digit_at(line, pos, token))
}

fn line_value<F>(line: &str, line_number: usize, token: &F) -> Result<u32, CalibrationError>
where
    F: Fn(&str) -> IResult<&str, Digit>,
{
    match (first_digit(line, token), last_digit(line, token)) {
        (Some(first), Some(last)) => {
            let value = first.value() * 10 + last.value();
            log::debug!("line {line_number}: {first} .. {last} -> {value}");
            Ok(value)
        }
        _ => Err(CalibrationError::NoDigitFound {
            line: line.to_string(),
            bad_bit: (0, line.len()).into(),
            line_number,
        }),
    }
}

fn calibration_sum_with<F>(input: &str, token: F) -> Result<u64, CalibrationError>
where
    F: Fn(&str) -> IResult<&str, Digit>,
{
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(i, line)| line_value(line, i + 1, &token).map(u64::from))
        .sum()
}

/// Value of a single line when only the numerals `0`..`9` count as digits.
pub fn calibration_value_numerals(line: &str) -> Result<u32, CalibrationError> {
    line_value(line, 1, &numeral)
}

/// Value of a single line, counting both numerals and spelled-out digits.
/// Tokens may overlap, `"eightwo"` scores 82.
pub fn calibration_value(line: &str) -> Result<u32, CalibrationError> {
    line_value(line, 1, &numeral_or_word)
}

pub fn calibration_sum_numerals(input: &str) -> Result<u64, CalibrationError> {
    calibration_sum_with(input, numeral)
}

pub fn calibration_sum(input: &str) -> Result<u64, CalibrationError> {
    calibration_sum_with(input, numeral_or_word)
}
