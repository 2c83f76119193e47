pub mod combobox;
pub mod config;
pub mod error;
pub mod filter;
pub mod focus;
pub mod input;
pub mod item;
pub mod locale;
pub mod machine;
pub mod rows;
pub mod selection;
pub mod sort;

pub use combobox::{Combobox, ComboboxChange, ComboboxId};
pub use config::{ComboboxConfig, ComboboxKind, ComboboxOptions, SearchBox};
pub use error::ConfigError;

pub mod prelude {
    pub use crate::combobox::props::{
        InputProps, ItemProps, MenuProps, RootProps, RowContent, ToggleProps,
    };
    pub use crate::combobox::{Combobox, ComboboxChange, ComboboxId};
    pub use crate::config::{ComboboxConfig, ComboboxKind, ComboboxOptions, SearchBox};
    pub use crate::error::ConfigError;
    pub use crate::filter::{FilterItems, FilterOptions};
    pub use crate::focus::InputFocus;
    pub use crate::input::{FocusTarget, PointerTarget, translate_event, translate_key, translate_mouse};
    pub use crate::item::{ComboboxItem, ItemToString, LabeledItem};
    pub use crate::locale::{Collator, Locale, locale_compare};
    pub use crate::machine::{ChangeReason, ComboboxEvent, ControlState};
    pub use crate::rows::{RowMapping, RowTarget, SyntheticRow};
    pub use crate::selection::{SelectionMode, SelectionSet, SelectionStore};
    pub use crate::sort::{CompareItems, SortItems, SortOptions};
}
