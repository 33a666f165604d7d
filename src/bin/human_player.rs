use clap::Parser;
use hanoi_solver::engine::Puzzle;
use hanoi_solver::utils::parse_move;
use std::io::{self, Write}; // For input/output

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of discs stacked on post 1
    #[clap(short, long, default_value_t = 3)]
    discs: u32,
}

fn main() {
    let args = Args::parse();
    let mut puzzle = Puzzle::new(args.discs, false);
    let mut moves_made = 0u32;
    println!("Welcome to the Towers of Hanoi!");
    println!("Move all {} discs from post 1 to post 3.", args.discs);

    loop {
        println!("---------------------");
        println!("Moves: {}", moves_made);
        println!("{}", puzzle);

        if puzzle.is_solved() {
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Total Moves: {}", moves_made);
            println!("Fewest possible: {}", (1u64 << args.discs.min(63)) - 1);
            println!("---------------------");
            break;
        }

        print!("Enter your move (from to), 'r' to reset, 's' to solve, 'q' to quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "r" => {
                puzzle.reset();
                moves_made = 0;
                println!("Puzzle reset.");
            }
            "s" => {
                puzzle.solve(Some(true));
                println!("Solved by the computer. Thanks for playing!");
                break;
            }
            command => match parse_move(command) {
                Ok((source, dest)) => {
                    // move_disc prints the reason when a move is rejected
                    if puzzle.move_disc(source, dest, None) {
                        moves_made += 1;
                    }
                }
                Err(e) => println!("Invalid input: {}", e),
            },
        }
    }
}
