//! User-facing error notifications

/// Shows a blocking error message to the user.
pub trait Notifier {
    fn unexpected_error(&self, message: &str);
}

/// Native message box.
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn unexpected_error(&self, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(crate::constants::APP_NAME)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
