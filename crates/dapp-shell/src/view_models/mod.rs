//! View Models
//!
//! Pre-computed presentation data, derived from state before rendering.

mod contacts_view_model;
mod snackbar_view_model;

pub use contacts_view_model::ContactsViewModel;
pub use snackbar_view_model::SnackbarViewModel;
