use day1::calibration_sum_numerals;
use util::{check_example, solve_input};

use anyhow::Result;

const EXAMPLE: &str = include_str!("../../data/example_part1");

fn main() -> Result<()> {
    env_logger::init();

    check_example(1, EXAMPLE, 142, calibration_sum_numerals)?;
    solve_input(1, calibration_sum_numerals)?;

    Ok(())
}
