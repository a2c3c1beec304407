//! Seams between the CRUD workflows and whatever UI hosts them.

use async_trait::async_trait;

/// A one-shot acknowledgement shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A yes/no question guarding a destructive action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Dialog capabilities the workflows rely on.
///
/// Not `Send`: implementations live on the UI thread.
#[async_trait(?Send)]
pub trait Notifier {
    /// Ask the user; resolves to `true` only on explicit confirmation.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;

    fn notify_success(&self, notice: &Notice);

    fn notify_error(&self, notice: &Notice);
}

/// Moves the user to another screen by client route path.
pub trait Navigator {
    fn navigate(&self, path: &str);
}
