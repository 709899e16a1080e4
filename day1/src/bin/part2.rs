use day1::calibration_sum;
use util::{check_example, solve_input};

use anyhow::Result;

const EXAMPLE: &str = include_str!("../../data/example_part2");

fn main() -> Result<()> {
    env_logger::init();

    check_example(2, EXAMPLE, 281, calibration_sum)?;
    solve_input(1, calibration_sum)?;

    Ok(())
}
