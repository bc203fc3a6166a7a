/// User-facing notification sink (the storefront toast).
///
/// Fire-and-forget: there is no return value and no ordering guarantee
/// relative to the cart state update that triggered it.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}
