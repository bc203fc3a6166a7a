use business::domain::notifier::Notifier;

/// Terminal stand-in for the storefront toast: one line on stderr.
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn error(&self, message: &str) {
        eprintln!("✖ {}", message);
    }
}
