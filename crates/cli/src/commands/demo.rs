//! `q16 exp`: convert one decimal to Q16.16 and print `e^x`.

use anyhow::{bail, Context, Result};
use q16_math::{Kernel, Q16};
use std::io::{self, BufRead};

/// Execute the demo with an argument, or a line from standard input.
pub fn execute(kernel: &Kernel, value: Option<&str>) -> Result<()> {
    let text = match value {
        Some(text) => text.to_string(),
        None => read_line(io::stdin().lock())?,
    };
    let input = super::parse_input(&text)?;
    let typed: f64 = text.trim().parse().unwrap_or_else(|_| input.to_f64());
    let result = kernel.exp_signed(input);

    print!("{}", render(typed, input, result));

    if result == Q16::MAX {
        log::warn!("e^{} exceeds the Q16.16 range, result saturated", input);
    } else if result == Q16::ZERO {
        log::warn!("e^{} is below the Q16.16 resolution, result clamped to zero", input);
    }
    Ok(())
}

fn read_line(mut reader: impl BufRead) -> Result<String> {
    eprint!("Enter a value: ");
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        bail!("No input value given");
    }
    Ok(line)
}

fn render(typed: f64, input: Q16, result: Q16) -> String {
    format!(
        "Input (float): {:.6}\n\
         Input (Q16.16): 0x{:08X}\n\
         Result (Q16.16): 0x{:08X}\n\
         Result (float): {:.6}\n\
         Expected (f64): {:.6}\n",
        typed,
        input,
        result,
        result,
        typed.exp()
    )
}
