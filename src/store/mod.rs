//! Unidirectional data-flow primitives.
//!
//! This module provides the contract between screens and the runtime:
//! a closed set of actions, an immutable state snapshot, and a pure
//! reducer that is the only place state transitions happen.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of screen state
//! - **Action**: User interactions or system events
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Owns the current state, runs the reducer on dispatch, and
//!   publishes changed snapshots to subscribers

mod action;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
