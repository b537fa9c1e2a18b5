//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions, it uses the Dispatcher.
//! Dispatched actions are queued and re-enter the full middleware chain once
//! the current action has been processed to completion.
//!
//! This enables patterns like:
//! - Bootstrap::Start triggers Contacts::AddressesSet and Bootstrap::End
//! - Tick triggers Snackbar::Close once the cooldown has elapsed

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
