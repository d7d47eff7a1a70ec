//! The SpaceCraft game object.
//!
//! Gameplay lives behind [`SpaceCraftGame`]; the launcher only ever sees it
//! through a [`GameHandle`].

mod game;
mod handle;

pub use game::{SpaceCraftGame, SPACE_COLOR};
pub use handle::GameHandle;
