/// What the dialog can tab through.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button:not([disabled]), [href], input:not([disabled]), select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Where focus has to jump for a Tab press, or `None` to let the browser move it.
///
/// `current` is the index of the focused element among the dialog's
/// focusables, `None` when focus sits outside the dialog.
pub fn focus_target(len: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;

    match (current, shift) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}
