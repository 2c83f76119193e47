//! Combobox controller - owns the control state and the selection.

mod events;
pub mod props;
mod state;

pub use events::ComboboxChange;
pub use state::{Combobox, ComboboxId};
