/// User actions that can be triggered by keys or paste events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Validate the input and run the publish check
    Show,
    /// Re-run the check from the denied panel
    Retry,
    /// Reset input and state, no network call
    Clear,
    /// Append a character to the input field
    Input(char),
    /// Delete the last character of the input field
    Backspace,
    /// Insert pasted text into the input field
    Paste(String),
    /// Exit the application
    Quit,
}
