//! # Corkboard Core
//!
//! Board state model and drag-and-drop reordering engine for a local kanban
//! board: ordered columns of text cards, mutated by add/delete/edit/move and
//! persisted to a local key-value slot after every change.
//!
//! Rendering and raw input handling live outside this crate. Presentation
//! reads [`Board`] snapshots and [`DragEvent`]s, and feeds pointer signals
//! plus a [`LayoutOracle`] back in.

pub mod config;
pub mod domain;
pub mod drag;
pub mod edit;
pub mod error;
pub mod layout;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use config::{BoardConfig, ColumnSeed};
pub use domain::{Board, Card, CardId, Column, ColumnId, IdGenerator, RandomCardIds};
pub use drag::{DragController, DragEvent, DragPhase, DropOutcome, DropTarget};
pub use edit::InlineEditor;
pub use error::{BoardError, Result};
pub use layout::{LayoutOracle, Point, Rect, StaticLayout};
pub use state::BoardState;
pub use storage::{MemoryStorage, PersistenceStore, Storage};

#[cfg(feature = "file-storage")]
pub use storage::FileStorage;
