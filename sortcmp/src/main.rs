mod data;

use anyhow::{Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

use sortlib::{
    builtin_sort, copy_array, heap_sort, is_sorted, merge_sort, quick_sort_iterative,
    quick_sort_recursive,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare sorting algorithms on generated inputs", long_about = None)]
struct Args {
    /// Number of elements per trial array
    #[arg(index = 1)]
    n: usize,

    /// Number of trials per algorithm
    #[arg(index = 2)]
    reps: usize,

    /// Input distribution: random, sorted, reversed, dups
    #[arg(long, default_value = "random")]
    pattern: String,

    /// Seed for input generation (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

const ALGORITHMS: [(&str, fn(&mut [i64])); 5] = [
    ("quick (recursive)", quick_sort_recursive),
    ("quick (iterative)", quick_sort_iterative),
    ("merge", merge_sort),
    ("heap", heap_sort),
    ("builtin", builtin_sort),
];

fn main() -> Result<()> {
    let args = Args::parse();

    if args.reps == 0 {
        bail!("reps must be at least 1");
    }

    let pattern = data::Pattern::from_name(&args.pattern)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    println!(
        "Comparing {} algorithms: n={}  reps={}  pattern={}  seed={}",
        ALGORITHMS.len(),
        args.n,
        args.reps,
        args.pattern,
        seed
    );

    let mut totals = vec![0.0f64; ALGORITHMS.len()];
    let mut rng = StdRng::seed_from_u64(seed);

    for rep in 0..args.reps {
        let base = data::generate(&mut rng, args.n, pattern);

        let mut expected = copy_array(&base);
        builtin_sort(&mut expected);

        for (k, (name, sort)) in ALGORITHMS.iter().enumerate() {
            let mut work = copy_array(&base);

            let start = Instant::now();
            sort(&mut work);
            totals[k] += start.elapsed().as_secs_f64();

            if !is_sorted(&work) {
                bail!("{} produced an unsorted result on rep {}", name, rep);
            }
            if work != expected {
                bail!("{} disagrees with the builtin sort on rep {}", name, rep);
            }
        }
    }

    println!();
    println!("{:<20} {:>12} {:>12}", "algorithm", "total (s)", "mean (ms)");
    for (k, (name, _)) in ALGORITHMS.iter().enumerate() {
        println!(
            "{:<20} {:>12.6} {:>12.4}",
            name,
            totals[k],
            1000.0 * totals[k] / args.reps as f64
        );
    }

    Ok(())
}
