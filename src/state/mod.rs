//! Application state module

mod alert;
mod app_state;
mod content;
mod forms;
pub mod validation;
mod wizard;

pub use alert::*;
pub use app_state::*;
pub use content::*;
pub use forms::*;
pub use validation::validate_all;
pub use wizard::*;
