//! Wire form of the commands accepted from outside the application
//!
//! Commands arrive as JSON objects tagged by `type`:
//!
//! ```json
//! { "type": "addresses set", "addresses": [...] }
//! { "type": "openSnackbar", "message": "Saved", "cooldown": 500 }
//! { "type": "closeSnackbar" }
//! ```

use crate::domain_models::Contact;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    #[serde(rename = "addresses set")]
    AddressesSet {
        #[serde(default)]
        addresses: Vec<Contact>,
    },
    #[serde(rename = "openSnackbar")]
    OpenSnackbar {
        #[serde(default)]
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cooldown: Option<u64>,
    },
    #[serde(rename = "closeSnackbar")]
    CloseSnackbar,
}
