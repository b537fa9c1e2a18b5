//! Contact list file access
//!
//! The contact list is a JSON array of address-book entries. This module only
//! reads the raw document; parsing into contacts happens in the application.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading the contact list file
#[derive(Error, Debug)]
pub enum ContactsFileError {
    #[error("Contact file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read contact file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the raw JSON content of the contact list file
pub fn read_contacts_json(path: impl AsRef<Path>) -> Result<String, ContactsFileError> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Read {} bytes from {}", content.len(), path.display());
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ContactsFileError::NotFound(path.to_path_buf()))
        }
        Err(source) => Err(ContactsFileError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
