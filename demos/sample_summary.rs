//! Summarises a small sample and compares it with a fitted uniform model.
//!
//! Run with: `cargo run --example sample_summary`

use kstats::prelude::*;
use kstats::sample::{geometric_mean, mean, standard_error, std_dev, z_score};

fn main() -> Result<()> {
    let waits = [1.2, 3.4, 0.8, 2.2, 4.9, 3.1, 2.7, 0.4];

    let m = mean(&waits)?;
    let s = std_dev(&waits, Estimator::Sample)?;
    println!("mean            {m:.4}");
    println!("std dev         {s:.4}");
    println!("geometric mean  {:.4}", geometric_mean(&waits)?);
    println!("standard error  {:.4}", standard_error(&waits)?);

    let model = Uniform::new(0.0, 5.0)?;
    println!(
        "uniform model   mean {:.4}, std dev {:.4}",
        model.expected_value(),
        model.std_dev()
    );

    for &x in &waits {
        println!("{x:>4.1}  z = {:>6.3}  F(x) = {:.3}", z_score(x, m, s)?, model.cdf(x)?);
    }
    Ok(())
}
