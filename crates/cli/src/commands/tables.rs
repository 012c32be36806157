//! `q16 tables`: regenerate the exponential lookup tables.
//!
//! Entries are computed in `f64` and rounded to nearest Q16.16, then printed
//! in the layout of `q16_math::table`.

use anyhow::Result;
use q16_math::table::{EXP_FRAC_TABLE_SIZE, INV_EXP_TABLE_SIZE};
use std::fmt::Write as _;

const SCALE: f64 = 65536.0;

/// `round(e^(2^-i) * 65536)`; entry 0 is the unused placeholder.
pub fn exp_frac_entries() -> Vec<i32> {
    (0..EXP_FRAC_TABLE_SIZE)
        .map(|i| match i {
            0 => 0,
            _ => (2f64.powi(-(i as i32)).exp() * SCALE).round() as i32,
        })
        .collect()
}

/// `round(e^(-i / 8) * 65536)`.
pub fn inv_exp_entries() -> Vec<i32> {
    (0..INV_EXP_TABLE_SIZE)
        .map(|i| ((-(i as f64) / 8.0).exp() * SCALE).round() as i32)
        .collect()
}

/// Execute the table dump.
pub fn execute() -> Result<()> {
    print!("{}", render(&exp_frac_entries(), &inv_exp_entries()));
    Ok(())
}

fn render(exp_frac: &[i32], inv_exp: &[i32]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "pub static EXP_FRAC_TABLE: [Q16; EXP_FRAC_TABLE_SIZE] = ["
    );
    for (i, entry) in exp_frac.iter().enumerate() {
        if i == 0 {
            let _ = writeln!(out, "    Q16::from_bits({}),", entry);
        } else {
            let _ = writeln!(out, "    Q16::from_bits({}), // e^(1/{})", entry, 1u32 << i);
        }
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "pub static INV_EXP_TABLE: [Q16; INV_EXP_TABLE_SIZE] = q16_table!["
    );
    for row in inv_exp.chunks(10) {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>5}", v)).collect();
        let _ = writeln!(out, "    {},", cells.join(", "));
    }
    let _ = writeln!(out, "];");
    out
}
