use crate::engine::{Post, Puzzle, StepCounter};
use std::io::Write;

impl<W: Write> Puzzle<W> {
    /// Solves the puzzle from its starting arrangement, moving every disc from
    /// post 1 to post 3 in the minimal `2^n - 1` moves.
    ///
    /// The puzzle is reset first and the step counter armed, so progress lines
    /// are numbered. When not verbose the per-move lines are suppressed and the
    /// final arrangement is written once instead. A summary line
    /// `solved in {steps} steps` is always written, then the counter is disarmed.
    ///
    /// If the puzzle was built `with_reset_after_solve(true)`, it is returned to
    /// its starting arrangement afterwards; otherwise it is left solved.
    ///
    /// # Arguments
    /// * `verbose`: Overrides the puzzle's default verbosity for this solve when `Some`.
    ///
    /// # Returns
    /// The number of moves made.
    ///
    /// # Examples
    /// ```
    /// use hanoi_solver::engine::Puzzle;
    ///
    /// let mut puzzle = Puzzle::with_writer(3, false, Vec::new());
    /// assert_eq!(puzzle.solve(None), 7);
    /// assert!(puzzle.is_solved());
    /// ```
    pub fn solve(&mut self, verbose: Option<bool>) -> u64 {
        self.reset();
        let verbose = verbose.unwrap_or(self.verbose());
        self.steps = StepCounter::Armed(0);

        self.n_move(self.disc_count(), Post::First, Post::Third, verbose);
        if !verbose {
            let state = self.to_string();
            self.emit(&state);
        }
        let total = self.steps.count().unwrap_or(0);
        self.emit(&format!("solved in {total} steps"));

        self.steps = StepCounter::Disarmed;
        if self.reset_after_solve() {
            self.reset();
        }
        total
    }

    /// Moves the top `n` discs from `a` to `b`, using the remaining post as scratch.
    ///
    /// Recursion depth is `n`, which stays small for any `n` whose `2^n - 1`
    /// moves are feasible at all.
    fn n_move(&mut self, n: u32, a: Post, b: Post, verbose: bool) {
        let c = Post::spare(a, b);
        match n {
            0 => {}
            1 => self.single_move(a, b, verbose),
            2 => self.two_move(a, b, verbose),
            _ => {
                self.n_move(n - 1, a, c, verbose);
                self.single_move(a, b, verbose);
                self.n_move(n - 1, c, b, verbose);
            }
        }
    }

    /// Moves a stack of two discs from `a` to `b` through the spare post.
    fn two_move(&mut self, a: Post, b: Post, verbose: bool) {
        let c = Post::spare(a, b);
        self.single_move(a, c, verbose);
        self.single_move(a, b, verbose);
        self.single_move(c, b, verbose);
    }

    fn single_move(&mut self, a: Post, b: Post, verbose: bool) {
        // Moves generated by the recursion are legal by construction.
        let moved = self.move_disc(a, b, Some(verbose));
        debug_assert!(moved, "solver produced an illegal move ({a},{b})");
    }
}
