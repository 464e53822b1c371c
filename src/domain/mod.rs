pub mod board;
pub mod card;
pub mod column;
pub mod id;

pub use board::{Board, CardLocation};
pub use card::{normalize_text, Card};
pub use column::Column;
pub use id::{CardId, ColumnId, IdGenerator, RandomCardIds, SequentialCardIds};
