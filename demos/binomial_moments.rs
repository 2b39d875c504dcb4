//! Cross-checks closed-form binomial moments against truncated summation.
//!
//! Run with: `cargo run --example binomial_moments`

use kstats::prelude::*;

fn main() -> Result<()> {
    let dist = Binomial::new(10, 0.3)?;

    println!("k   P(X = k)   P(X <= k)");
    for k in 0..=10 {
        println!("{k:<3} {:.6}   {:.6}", dist.probability(k)?, dist.cdf(k)?);
    }

    let mean = discrete_expected_value(0, 10, |k| dist.probability(k))?;
    let var = discrete_variance(0, 10, |k| dist.probability(k))?;

    println!();
    println!("expected value  closed form {:.6}  summed {mean:.6}", dist.expected_value());
    println!("variance        closed form {:.6}  summed {var:.6}", dist.variance());
    Ok(())
}
