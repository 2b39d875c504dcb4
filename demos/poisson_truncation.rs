//! Shows how the choice of support bounds the error of truncated moments
//! for a distribution with unbounded support.
//!
//! Run with: `cargo run --example poisson_truncation`

use kstats::prelude::*;

fn main() -> Result<()> {
    let dist = Poisson::new(6.0)?;

    println!("high  captured mass   mean        variance");
    for high in [4, 8, 12, 20, 40] {
        let engine = MomentEngine::builder()
            .support(0, high)
            .summation(Summation::Compensated)
            .build()?;
        let mass = engine.total_probability(|k| dist.probability(k))?;
        let mean = engine.expected_value_of(&dist)?;
        let var = engine.variance_of(&dist)?;
        println!("{high:<5} {mass:<15.10} {mean:<11.6} {var:.6}");
    }

    println!(
        "closed form           {:<11.6} {:.6}",
        dist.expected_value(),
        dist.variance()
    );
    Ok(())
}
