//! `q16 report`: accuracy table over fixed input vectors.

use anyhow::Result;
use q16_math::{Kernel, Q16};
use std::fmt::Write as _;

use super::eval::evaluate;
use super::{Function, ReportFunction};

/// Logarithm inputs of the reference harness.
pub const LOG_VECTORS: [f64; 15] = [
    0.1, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 2.718, 3.0, 5.0, 7.5, 10.0, 20.0, 50.0, 100.0,
];

/// Exponential inputs, both table regimes and the integer-power loop.
pub const EXP_VECTORS: [f64; 14] = [
    -9.5, -5.0, -2.5, -1.0, -0.5, -0.125, 0.0, 0.5, 1.0, 2.0, 2.718, 5.0, 7.5, 10.0,
];

/// One evaluated input.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub input: Q16,
    pub result: Q16,
    pub reference: f64,
}

impl Row {
    pub fn abs_error(&self) -> f64 {
        (self.result.to_f64() - self.reference).abs()
    }

    pub fn rel_error(&self) -> f64 {
        if self.reference == 0.0 {
            self.abs_error()
        } else {
            self.abs_error() / self.reference.abs()
        }
    }
}

/// Execute a report.
pub fn execute(kernel: &Kernel, function: ReportFunction) -> Result<()> {
    let function = Function::from(function);
    log::info!("reporting {} with {:?}", function.name(), kernel.config());

    let rows = collect(kernel, function)?;
    print!("{}", render(function, &rows));
    Ok(())
}

/// Evaluate `function` over its input vectors.
pub fn collect(kernel: &Kernel, function: Function) -> Result<Vec<Row>> {
    let vectors: &[f64] = match function {
        Function::Exp | Function::ExpSigned => &EXP_VECTORS,
        _ => &LOG_VECTORS,
    };

    vectors
        .iter()
        .map(|&value| {
            let input = Q16::from_f64(value);
            let result = evaluate(kernel, function, input)?;
            Ok(Row {
                input,
                result,
                reference: function.reference(input.to_f64()),
            })
        })
        .collect()
}

/// Format rows as a table followed by the worst-case summary.
pub fn render(function: Function, rows: &[Row]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10}  {:>12}  {:>12}  {:>10}  {:>10}",
        "input",
        function.name(),
        "reference",
        "abs err",
        "rel err"
    );
    let _ = writeln!(out, "{}", "-".repeat(62));

    for row in rows {
        let _ = writeln!(
            out,
            "{:>10.3}  {:>12.6}  {:>12.6}  {:>10.2e}  {:>10.2e}",
            row.input,
            row.result,
            row.reference,
            row.abs_error(),
            row.rel_error()
        );
    }

    let worst_abs = rows.iter().max_by(|a, b| a.abs_error().total_cmp(&b.abs_error()));
    let worst_rel = rows.iter().max_by(|a, b| a.rel_error().total_cmp(&b.rel_error()));
    if let (Some(abs), Some(rel)) = (worst_abs, worst_rel) {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "worst abs err: {:.2e} at {:.3}",
            abs.abs_error(),
            abs.input
        );
        let _ = writeln!(
            out,
            "worst rel err: {:.2e} at {:.3}",
            rel.rel_error(),
            rel.input
        );
    }
    out
}
