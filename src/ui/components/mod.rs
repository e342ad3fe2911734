//! Reusable UI components

pub mod clear_completed_component;
pub mod input_component;
pub mod log_panel_component;
pub mod todo_item_component;
pub mod todo_list_component;

pub use clear_completed_component::ClearCompletedComponent;
pub use input_component::InputComponent;
pub use log_panel_component::LogPanelComponent;
pub use todo_item_component::TodoItemRow;
pub use todo_list_component::TodoListComponent;
