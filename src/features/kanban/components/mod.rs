pub mod card_dialogs;
pub mod card_menu;
pub mod card_view;
pub mod color_picker;
pub mod column;
pub mod drag_overlay;
pub mod header;

pub use card_dialogs::{AddCardDialog, EditCardDialog};
pub use card_menu::CardMenu;
pub use card_view::{CardActions, CardView};
pub use color_picker::ColorPicker;
pub use column::KanbanColumn;
pub use drag_overlay::DragOverlay;
pub use header::BoardHeader;
