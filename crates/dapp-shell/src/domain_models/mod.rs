//! Domain models
//!
//! Plain data types shared by actions, state and views.

mod contact;

pub use contact::Contact;
