use std::time::{Duration, Instant};

use mazegen::{Generator, RandomSource, generate};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&s| s > 0)
        .unwrap_or(u8::MAX as usize);
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1);

    tracing::info!("Profiling every generator on {size}x{size}, {num_iters} iteration(s) each");
    let mut rng = RandomSource::from_seed(0);
    for generator in Generator::ALL {
        let mut total = Duration::ZERO;
        for _ in 0..num_iters {
            let started = Instant::now();
            let maze = generate(generator, size, size, &mut rng);
            total += started.elapsed();
            std::hint::black_box(maze);
        }
        println!("{:<24} {:?}", generator.name(), total / num_iters);
    }
}
