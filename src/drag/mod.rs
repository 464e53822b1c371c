//! Pointer-driven card reordering.
//!
//! The controller is a three-state machine: `Idle` until a pointer-down lands
//! on a card, `Dragging` while pointer-moves keep resolving the drop target,
//! and a transient `Dropping` step on pointer-up that commits at most one
//! move before returning to `Idle`. Only one drag can be in flight; a
//! pointer-down during a drag is ignored.

pub mod session;
pub mod target;

pub use session::DragSession;
pub use target::{insertion_index, resolve_drop_target, DropTarget};

use crate::{
    domain::{Board, CardId, ColumnId},
    error::Result,
    layout::{LayoutOracle, Point},
    state::BoardState,
};
use std::mem;
use tracing::{debug, info};

/// Signals for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// Hide the card and show the ghost
    Started { card_id: CardId },
    /// Move the placeholder, or remove it when `None`
    PlaceholderChanged { placeholder: Option<DropTarget> },
    /// Remove ghost and placeholder, restore the card
    Ended { card_id: CardId, outcome: DropOutcome },
}

/// How a drag finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card was moved; `index` is its new position in the column
    Moved(DropTarget),
    /// Released over its own slot, nothing changed
    Unchanged,
    /// Released outside every column, nothing changed
    Cancelled,
}

/// Observable step of the drag state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Dropping,
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
    Dropping,
}

/// Turns pointer signals into at most one card move per drag
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Creates a new idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase
    pub fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
            DragState::Dropping => DragPhase::Dropping,
        }
    }

    /// Returns the in-flight drag, if any
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// True between an accepted pointer-down and its pointer-up
    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Starts a drag of `card_id` out of `column_id`.
    ///
    /// Ignored (returns `None`) while another drag is active, or when the card
    /// is not in that column or not rendered.
    pub fn pointer_down(
        &mut self,
        card_id: &CardId,
        column_id: &ColumnId,
        pointer: Point,
        board: &Board,
        layout: &dyn LayoutOracle,
    ) -> Option<DragEvent> {
        if !matches!(self.state, DragState::Idle) {
            debug!(card = %card_id, "drag already in progress, ignoring pointer-down");
            return None;
        }

        let source_index = board.column(column_id)?.position_of(card_id)?;
        let card_rect = layout.card_rect(card_id)?;

        self.state = DragState::Dragging(DragSession::new(
            card_id.clone(),
            column_id.clone(),
            source_index,
            card_rect,
            pointer,
        ));
        info!(card = %card_id, column = %column_id, index = source_index, "drag started");

        Some(DragEvent::Started {
            card_id: card_id.clone(),
        })
    }

    /// Tracks the pointer and recomputes the placeholder.
    ///
    /// Returns an event only when the placeholder actually changes; hovering
    /// the card's own slot shows no placeholder.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        board: &Board,
        layout: &dyn LayoutOracle,
    ) -> Option<DragEvent> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };

        session.pointer = pointer;
        let target = resolve_drop_target(board, layout, pointer, Some(&session.card_id));
        let placeholder = target
            .as_ref()
            .filter(|target| !session.is_origin(target))
            .cloned();
        session.hover = target;

        if placeholder == session.placeholder {
            return None;
        }
        session.placeholder = placeholder.clone();
        Some(DragEvent::PlaceholderChanged { placeholder })
    }

    /// Finishes the drag at `pointer`, committing at most one move.
    ///
    /// The session is always cleared, including when persisting the move
    /// fails; in that case the error is returned and the board keeps the move.
    pub async fn pointer_up(
        &mut self,
        pointer: Point,
        layout: &dyn LayoutOracle,
        state: &mut BoardState,
    ) -> Result<Option<DragEvent>> {
        let session = match mem::replace(&mut self.state, DragState::Dropping) {
            DragState::Dragging(session) => session,
            other => {
                self.state = other;
                return Ok(None);
            }
        };

        let target = resolve_drop_target(state.board(), layout, pointer, Some(&session.card_id));
        let outcome = match target {
            None => DropOutcome::Cancelled,
            Some(target) if session.is_origin(&target) => DropOutcome::Unchanged,
            Some(target) => {
                let moved = state
                    .move_card(&session.card_id, &target.column_id, target.index)
                    .await;
                self.state = DragState::Idle;

                if moved? {
                    DropOutcome::Moved(target)
                } else {
                    DropOutcome::Unchanged
                }
            }
        };
        self.state = DragState::Idle;

        match &outcome {
            DropOutcome::Moved(target) => info!(
                card = %session.card_id,
                column = %target.column_id,
                index = target.index,
                "drag committed"
            ),
            DropOutcome::Unchanged => debug!(card = %session.card_id, "dropped on own slot"),
            DropOutcome::Cancelled => info!(card = %session.card_id, "drag cancelled"),
        }

        Ok(Some(DragEvent::Ended {
            card_id: session.card_id,
            outcome,
        }))
    }
}
