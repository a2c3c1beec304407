use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use services::{ConfirmPrompt, Notice, Notifier};
use tokio::sync::oneshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogTone {
    Success,
    Error,
    Warning,
}

impl DialogTone {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "dialog-success",
            Self::Error => "dialog-error",
            Self::Warning => "dialog-warning",
        }
    }
}

type Reply = Rc<RefCell<Option<oneshot::Sender<bool>>>>;

/// The modal currently on screen.
#[derive(Clone)]
pub struct ActiveDialog {
    pub tone: DialogTone,
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    /// Present only for yes/no questions.
    pub cancel_label: Option<String>,
    reply: Option<Reply>,
}

impl ActiveDialog {
    fn notice(tone: DialogTone, notice: &Notice) -> Self {
        Self {
            tone,
            title: notice.title.clone(),
            text: notice.text.clone(),
            confirm_label: "OK".to_string(),
            cancel_label: None,
            reply: None,
        }
    }

    fn question(prompt: &ConfirmPrompt, reply: oneshot::Sender<bool>) -> Self {
        Self {
            tone: DialogTone::Warning,
            title: prompt.title.clone(),
            text: prompt.text.clone(),
            confirm_label: prompt.confirm_label.clone(),
            cancel_label: Some(prompt.cancel_label.clone()),
            reply: Some(Rc::new(RefCell::new(Some(reply)))),
        }
    }

    fn answer(&self, yes: bool) {
        if let Some(sender) = self.reply.as_ref().and_then(|reply| reply.borrow_mut().take()) {
            let _ = sender.send(yes);
        }
    }
}

/// Single modal layer shared by every screen.
///
/// Opening a dialog replaces the current one; a replaced or dismissed
/// question resolves to "no".
#[derive(Clone, Copy)]
pub struct DialogNotifier {
    active: Signal<Option<ActiveDialog>>,
}

impl DialogNotifier {
    #[must_use]
    pub fn new(active: Signal<Option<ActiveDialog>>) -> Self {
        Self { active }
    }

    #[must_use]
    pub fn current(&self) -> Option<ActiveDialog> {
        self.active.read().clone()
    }

    fn open(&self, dialog: ActiveDialog) {
        let mut active = self.active;
        let previous = active.replace(Some(dialog));
        if let Some(previous) = previous {
            previous.answer(false);
        }
    }

    /// Close the dialog, answering a pending question with `yes`.
    pub fn close(&self, yes: bool) {
        let mut active = self.active;
        if let Some(dialog) = active.take() {
            dialog.answer(yes);
        }
    }
}

#[async_trait(?Send)]
impl Notifier for DialogNotifier {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let (sender, receiver) = oneshot::channel();
        self.open(ActiveDialog::question(prompt, sender));
        receiver.await.unwrap_or(false)
    }

    fn notify_success(&self, notice: &Notice) {
        self.open(ActiveDialog::notice(DialogTone::Success, notice));
    }

    fn notify_error(&self, notice: &Notice) {
        self.open(ActiveDialog::notice(DialogTone::Error, notice));
    }
}

/// Provide a `DialogNotifier` to every descendant.
pub fn use_dialog_provider() -> DialogNotifier {
    let active = use_signal(|| None::<ActiveDialog>);
    use_context_provider(|| DialogNotifier::new(active))
}

#[component]
pub fn DialogLayer() -> Element {
    let notifier = use_context::<DialogNotifier>();
    let Some(dialog) = notifier.current() else {
        return rsx! {};
    };
    let tone = dialog.tone.class();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| notifier.close(false),
            div {
                class: "modal {tone}",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "{dialog.title}" }
                p { class: "modal-body", "{dialog.text}" }
                div { class: "modal-actions",
                    if let Some(cancel) = dialog.cancel_label.clone() {
                        button {
                            class: "btn btn-danger",
                            r#type: "button",
                            onclick: move |_| notifier.close(false),
                            "{cancel}"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| notifier.close(true),
                        "{dialog.confirm_label}"
                    }
                }
            }
        }
    }
}
