mod form;
mod modal;
mod pagination;
mod stat_card;
mod student_form;
mod toast;

pub use form::{SelectField, TextField, TextareaField};
pub use modal::ConfirmDialog;
pub use pagination::Pagination;
pub use stat_card::StatCard;
pub use student_form::StudentFields;
pub use toast::{ToastContainer, use_toasts};
