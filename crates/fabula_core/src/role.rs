//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who is speaking in a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    System,
    User,
    Assistant,
}
