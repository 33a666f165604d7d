//! Errors raised when a move cannot be carried out.

use thiserror::Error;

use crate::engine::Post;

/// Reasons a single move is rejected.
///
/// `EmptySourcePost` and `IllegalDiscPlacement` are the puzzle's own rules.
/// The other two guard the post identifiers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Post {post} has no discs to move.")]
    EmptySourcePost { post: Post },

    #[error("Disc {disc} cannot be moved on top of disc {onto}.")]
    IllegalDiscPlacement { disc: u32, onto: u32 },

    #[error("Post {0} does not exist. Posts are numbered 1 to 3.")]
    InvalidPost(u8),

    #[error("Post {post} cannot be both source and destination.")]
    SamePost { post: Post },
}
