use clap::Parser;
use hanoi_solver::engine::Puzzle;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of discs stacked on post 1
    #[clap(short, long, default_value_t = 3)]
    discs: u32,

    /// Print only the final arrangement instead of every move
    #[clap(short, long)]
    quiet: bool,

    /// Put the discs back on post 1 once solved
    #[clap(long)]
    reset_after_solve: bool,
}

fn main() {
    let args = Args::parse();

    let mut puzzle =
        Puzzle::new(args.discs, !args.quiet).with_reset_after_solve(args.reset_after_solve);
    println!("Initial state: {}\n", puzzle);
    println!("Solving {} disc(s)...\n", args.discs);

    puzzle.solve(None);

    println!("\nFinal state: {}", puzzle);
}
