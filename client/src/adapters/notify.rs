//! Terminal notifier
//!
//! Prints one-off notifications to stdout, standing in for the page's
//! alert dialog.

use crate::domain::ports::Notifier;
use crate::error::ApiError;

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn share_link(&self, link: &str) {
        println!("Share link: {link}");
    }

    fn remote_failure(&self, error: &ApiError) {
        println!("Action failed ({}): {error}", error.endpoint());
    }
}
