//! View components of the Expenses page.

pub mod add_options;
pub mod camera_panel;
pub mod expense_form;
pub mod expense_table;
pub mod icons;
pub mod info_card;
pub mod layout;
pub mod upload_panel;

pub use add_options::AddOptions;
pub use camera_panel::CameraPanel;
pub use expense_form::ExpenseFormView;
pub use expense_table::ExpenseTable;
pub use info_card::{CardIcon, InfoCard};
pub use layout::{Crumb, Layout};
pub use upload_panel::UploadPanel;
