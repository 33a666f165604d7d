//! Core state machine for the Towers of Hanoi puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Post`: Identifies one of the three posts (pegs), numbered 1 to 3.
//! - `StepCounter`: Tracks whether a solve is in progress and how many moves it has made.
//! - `Puzzle`: Holds the disc arrangement, validates and executes single moves,
//!   and reports progress to its writer.
//!
//! The recursive solver lives in `crate::solver` and drives `Puzzle::move_disc`.
use std::fmt;
use std::io::{self, Stdout, Write};

use crate::error::MoveError;

/// Identifies one of the three posts of the puzzle.
///
/// Posts are numbered 1 to 3 in text and output; `First` is where every disc
/// starts and `Third` is where `solve` moves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Post {
    First,
    Second,
    Third,
}

impl Post {
    /// All posts in order.
    pub const ALL: [Post; 3] = [Post::First, Post::Second, Post::Third];

    /// Returns the 1-based number of the post.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_solver::engine::Post;
    /// assert_eq!(Post::First.number(), 1);
    /// assert_eq!(Post::Third.number(), 3);
    /// ```
    pub fn number(self) -> u8 {
        match self {
            Post::First => 1,
            Post::Second => 2,
            Post::Third => 3,
        }
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Returns the post that is neither `a` nor `b`, used as scratch space when
    /// moving a stack from `a` to `b`.
    ///
    /// With numbered posts this is `6 - a - b`. If `a` and `b` are the same post,
    /// the lowest-numbered other post is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_solver::engine::Post;
    /// assert_eq!(Post::spare(Post::First, Post::Third), Post::Second);
    /// assert_eq!(Post::spare(Post::Third, Post::Second), Post::First);
    /// ```
    pub fn spare(a: Post, b: Post) -> Post {
        Post::ALL
            .into_iter()
            .find(|&p| p != a && p != b)
            .unwrap_or(Post::First)
    }
}

impl TryFrom<u8> for Post {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Post::First),
            2 => Ok(Post::Second),
            3 => Ok(Post::Third),
            _ => Err(MoveError::InvalidPost(value)),
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Step counter of the puzzle.
///
/// `Disarmed` while the puzzle is idle; `Armed` only for the duration of a
/// `solve`, holding the number of successful moves made so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepCounter {
    #[default]
    Disarmed,
    Armed(u64),
}

impl StepCounter {
    /// Returns the current count, or `None` when disarmed.
    pub fn count(&self) -> Option<u64> {
        match self {
            StepCounter::Armed(steps) => Some(*steps),
            StepCounter::Disarmed => None,
        }
    }

    fn advance(&mut self) {
        if let StepCounter::Armed(steps) = self {
            *steps += 1;
        }
    }
}

/// Returns the three posts in their starting arrangement: every disc on the
/// first post, largest at the bottom.
fn canonical_posts(disc_count: u32) -> [Vec<u32>; 3] {
    [(1..=disc_count).rev().collect(), Vec::new(), Vec::new()]
}

/// A Towers of Hanoi puzzle with three posts and `disc_count` discs.
///
/// Discs are identified by their size, `1` being the smallest. Each post is a
/// stack stored bottom to top. Two invariants always hold:
/// - on every post, sizes strictly decrease from bottom to top;
/// - every disc `1..=disc_count` appears exactly once across the three posts.
///
/// Progress and diagnostic lines are written to `W`, which is stdout for
/// `Puzzle::new`.
///
/// # Examples
/// ```
/// use hanoi_solver::engine::{Post, Puzzle};
///
/// let mut puzzle = Puzzle::with_writer(3, false, Vec::new());
/// assert_eq!(puzzle.to_string(), "[[3, 2, 1], [], []]");
///
/// assert!(puzzle.move_disc(Post::First, Post::Third, None));
/// // Disc 2 may not rest on disc 1.
/// assert!(!puzzle.move_disc(Post::First, Post::Third, None));
/// assert_eq!(puzzle.to_string(), "[[3, 2], [], [1]]");
/// ```
#[derive(Debug)]
pub struct Puzzle<W = Stdout> {
    disc_count: u32,
    posts: [Vec<u32>; 3],
    verbose: bool,
    reset_after_solve: bool,
    pub(crate) steps: StepCounter,
    out: W,
}

impl Puzzle<Stdout> {
    /// Creates a puzzle with `disc_count` discs on the first post, printing to stdout.
    ///
    /// `verbose` is the default for `move_disc` and `solve` when a call does not
    /// override it. A `disc_count` of zero gives an empty puzzle on which every
    /// move is rejected and `solve` makes no moves.
    pub fn new(disc_count: u32, verbose: bool) -> Self {
        Self::with_writer(disc_count, verbose, io::stdout())
    }
}

impl<W: Write> Puzzle<W> {
    /// Creates a puzzle that writes its progress and diagnostics to `out`.
    pub fn with_writer(disc_count: u32, verbose: bool, out: W) -> Self {
        Puzzle {
            disc_count,
            posts: canonical_posts(disc_count),
            verbose,
            reset_after_solve: false,
            steps: StepCounter::Disarmed,
            out,
        }
    }

    /// Sets whether `solve` returns the puzzle to its starting arrangement once
    /// it has finished. Off by default, so a solved puzzle stays solved.
    pub fn with_reset_after_solve(mut self, reset_after_solve: bool) -> Self {
        self.reset_after_solve = reset_after_solve;
        self
    }

    pub fn disc_count(&self) -> u32 {
        self.disc_count
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn reset_after_solve(&self) -> bool {
        self.reset_after_solve
    }

    /// Returns the step counter. Only armed while `solve` runs.
    pub fn steps(&self) -> StepCounter {
        self.steps
    }

    /// Returns all three posts, each listed bottom to top.
    pub fn posts(&self) -> &[Vec<u32>; 3] {
        &self.posts
    }

    /// Returns the discs on `post`, bottom to top.
    pub fn post(&self, post: Post) -> &[u32] {
        &self.posts[post.index()]
    }

    /// Returns the writer the puzzle reports to.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Restores the starting arrangement: all discs on post 1, largest at the bottom.
    pub fn reset(&mut self) {
        self.posts = canonical_posts(self.disc_count);
    }

    /// Moves the top disc of `source` onto `dest`, returning the disc moved.
    ///
    /// The move is rejected, leaving the posts untouched, when:
    /// - `source` and `dest` are the same post (`MoveError::SamePost`);
    /// - `source` holds no disc (`MoveError::EmptySourcePost`);
    /// - the top disc of `dest` is smaller than the disc being moved
    ///   (`MoveError::IllegalDiscPlacement`).
    ///
    /// A successful move advances the step counter if it is armed. Nothing is printed.
    pub fn try_move(&mut self, source: Post, dest: Post) -> Result<u32, MoveError> {
        if source == dest {
            return Err(MoveError::SamePost { post: source });
        }
        let disc = *self
            .post(source)
            .last()
            .ok_or(MoveError::EmptySourcePost { post: source })?;
        if let Some(&onto) = self.post(dest).last() {
            if disc > onto {
                return Err(MoveError::IllegalDiscPlacement { disc, onto });
            }
        }

        self.posts[source.index()].pop();
        self.posts[dest.index()].push(disc);
        self.steps.advance();
        debug_assert!(self.is_consistent());
        Ok(disc)
    }

    /// Moves the top disc of `source` onto `dest` and reports the outcome.
    ///
    /// A rejected move writes the reason (see `try_move`) and returns `false`;
    /// the error never propagates further. A successful move returns `true` and,
    /// when verbose, writes a progress line:
    /// - `{step}. ({source},{dest}): {posts}` while a solve is counting steps;
    /// - `({source},{dest}): {posts}` otherwise.
    ///
    /// # Arguments
    /// * `verbose`: Overrides the puzzle's default verbosity for this call when `Some`.
    pub fn move_disc(&mut self, source: Post, dest: Post, verbose: Option<bool>) -> bool {
        let verbose = verbose.unwrap_or(self.verbose);
        match self.try_move(source, dest) {
            Err(err) => {
                self.emit(&err.to_string());
                false
            }
            Ok(_) => {
                if verbose {
                    let line = match self.steps {
                        StepCounter::Armed(step) => {
                            format!("{}. ({},{}): {}", step, source, dest, self)
                        }
                        StepCounter::Disarmed => format!("({},{}): {}", source, dest, self),
                    };
                    self.emit(&line);
                }
                true
            }
        }
    }

    /// Checks both arrangement invariants: every post strictly decreasing from
    /// bottom to top, and each disc `1..=disc_count` present exactly once.
    pub fn is_consistent(&self) -> bool {
        let ordered = self
            .posts
            .iter()
            .all(|post| post.windows(2).all(|pair| pair[0] > pair[1]));
        let mut discs: Vec<u32> = self.posts.iter().flatten().copied().collect();
        discs.sort_unstable();
        ordered && discs.into_iter().eq(1..=self.disc_count)
    }

    /// Returns `true` when every disc sits on post 3, largest at the bottom.
    pub fn is_solved(&self) -> bool {
        self.post(Post::First).is_empty()
            && self.post(Post::Second).is_empty()
            && self
                .post(Post::Third)
                .iter()
                .copied()
                .eq((1..=self.disc_count).rev())
    }

    pub(crate) fn emit(&mut self, line: &str) {
        // Output failures never affect the puzzle state.
        let _ = writeln!(self.out, "{line}");
    }
}

impl<W> fmt::Display for Puzzle<W> {
    /// Formats the posts as a nested list, e.g. `[[3, 2], [], [1]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(disc_count: u32) -> Puzzle<Vec<u8>> {
        Puzzle::with_writer(disc_count, false, Vec::new())
    }

    fn output(puzzle: &Puzzle<Vec<u8>>) -> String {
        String::from_utf8(puzzle.writer().clone()).unwrap()
    }

    #[test]
    fn test_new_puzzle_canonical_state() {
        let puzzle = quiet(3);
        assert_eq!(puzzle.disc_count(), 3);
        assert_eq!(puzzle.posts(), &[vec![3, 2, 1], vec![], vec![]]);
        assert_eq!(puzzle.steps(), StepCounter::Disarmed);
        assert!(puzzle.is_consistent());
        assert!(!puzzle.is_solved());
        assert!(!puzzle.reset_after_solve());
    }

    #[test]
    fn test_zero_discs() {
        let mut puzzle = quiet(0);
        assert_eq!(puzzle.to_string(), "[[], [], []]");
        assert!(puzzle.is_consistent());
        assert!(puzzle.is_solved());
        assert!(!puzzle.move_disc(Post::First, Post::Second, None));
        assert_eq!(output(&puzzle), "Post 1 has no discs to move.\n");
    }

    #[test]
    fn test_post_conversions() {
        assert_eq!(Post::try_from(2u8), Ok(Post::Second));
        assert_eq!(Post::try_from(0u8), Err(MoveError::InvalidPost(0)));
        assert_eq!(Post::try_from(4u8), Err(MoveError::InvalidPost(4)));
        assert_eq!(Post::Second.to_string(), "2");
        for a in Post::ALL {
            for b in Post::ALL {
                if a != b {
                    let c = Post::spare(a, b);
                    assert_eq!(c.number(), 6 - a.number() - b.number());
                }
            }
        }
    }

    #[test]
    fn test_legal_move() {
        let mut puzzle = quiet(3);
        assert_eq!(puzzle.try_move(Post::First, Post::Second), Ok(1));
        assert_eq!(puzzle.post(Post::First), &[3, 2]);
        assert_eq!(puzzle.post(Post::Second), &[1]);
        assert_eq!(puzzle.steps(), StepCounter::Disarmed);
    }

    #[test]
    fn test_move_from_empty_post() {
        let mut puzzle = quiet(2);
        let before = puzzle.posts().clone();
        assert_eq!(
            puzzle.try_move(Post::Third, Post::First),
            Err(MoveError::EmptySourcePost { post: Post::Third })
        );
        assert_eq!(puzzle.posts(), &before);
    }

    #[test]
    fn test_move_onto_smaller_disc() {
        let mut puzzle = quiet(2);
        assert!(puzzle.move_disc(Post::First, Post::Second, None));
        assert_eq!(puzzle.posts(), &[vec![2], vec![1], vec![]]);

        assert!(!puzzle.move_disc(Post::First, Post::Second, None));
        assert_eq!(puzzle.posts(), &[vec![2], vec![1], vec![]]);
        assert_eq!(output(&puzzle), "Disc 2 cannot be moved on top of disc 1.\n");
    }

    #[test]
    fn test_move_same_post() {
        let mut puzzle = quiet(2);
        assert_eq!(
            puzzle.try_move(Post::First, Post::First),
            Err(MoveError::SamePost { post: Post::First })
        );
        assert_eq!(puzzle.post(Post::First), &[2, 1]);
    }

    #[test]
    fn test_move_output_when_verbose() {
        let mut puzzle = Puzzle::with_writer(2, true, Vec::new());
        assert!(puzzle.move_disc(Post::First, Post::Second, None));
        // The per-call override wins over the instance default.
        assert!(puzzle.move_disc(Post::First, Post::Third, Some(false)));
        assert_eq!(output(&puzzle), "(1,2): [[2], [1], []]\n");
    }

    #[test]
    fn test_armed_counter_numbers_moves() {
        let mut puzzle = quiet(2);
        puzzle.steps = StepCounter::Armed(0);
        assert!(puzzle.move_disc(Post::First, Post::Second, Some(true)));
        assert!(!puzzle.move_disc(Post::First, Post::Second, Some(true)));
        assert!(puzzle.move_disc(Post::First, Post::Third, Some(true)));
        assert_eq!(puzzle.steps().count(), Some(2));
        assert_eq!(
            output(&puzzle),
            "1. (1,2): [[2], [1], []]\n\
             Disc 2 cannot be moved on top of disc 1.\n\
             2. (1,3): [[], [1], [2]]\n"
        );
    }

    #[test]
    fn test_reset() {
        let mut puzzle = quiet(3);
        puzzle.move_disc(Post::First, Post::Third, None);
        puzzle.move_disc(Post::First, Post::Second, None);
        puzzle.reset();
        assert_eq!(puzzle.posts(), &[vec![3, 2, 1], vec![], vec![]]);

        // The posts after a reset are independent of each other.
        puzzle.move_disc(Post::First, Post::Second, None);
        assert_eq!(puzzle.posts(), &[vec![3, 2], vec![1], vec![]]);
    }

    #[test]
    fn test_is_solved() {
        let mut puzzle = quiet(1);
        assert!(!puzzle.is_solved());
        assert!(puzzle.move_disc(Post::First, Post::Third, None));
        assert!(puzzle.is_solved());
        assert!(puzzle.move_disc(Post::Third, Post::Second, None));
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_display() {
        let mut puzzle = quiet(3);
        puzzle.move_disc(Post::First, Post::Third, None);
        assert_eq!(format!("{}", puzzle), "[[3, 2], [], [1]]");
    }
}
