/// Utility to safely apply a closure under a Leptos owner captured before
/// async work was spawned. If the owner has been disposed by the time the
/// work resolves (the view was torn down mid-flight), the closure is
/// dropped instead of mutating disposed signals.
pub fn with_owner_safe<F, R>(owner: Option<leptos::Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => match leptos::try_with_owner(owner, f) {
            Ok(value) => Some(value),
            Err(_) => {
                leptos::logging::log!("[OWNER] Owner disposed, dropping result: {}", log_context);
                None
            }
        },
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
            None
        }
    }
}
