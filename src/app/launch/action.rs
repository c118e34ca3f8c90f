//! Actions of the launch scope.

use crate::app::errors::ErrorMessage;
use crate::app::model::UserSession;

#[derive(Debug, Clone, PartialEq)]
pub enum LaunchAction {
    /// Session lookup finished. `None` means nobody is signed in.
    FinishedLaunching { session: Option<UserSession> },

    /// Session lookup failed.
    Failed(ErrorMessage),

    /// The launch screen finished showing `error`.
    FinishedPresentingError(ErrorMessage),
}
