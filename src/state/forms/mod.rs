//! Form domain layer
//!
//! Type-safe field values, file slots and the wizard's form data.

mod field;
mod file_slot;
mod upload_form;

pub use field::FormField;
pub use file_slot::{inspect_file, FileRejection, FileSlot, SelectedFile, UploadProgress};
pub use upload_form::{Pick, UploadForm};
