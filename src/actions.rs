//! User actions on the search box.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Esc: clear the query.
    ClearInput,
    Submit,

    SelectPrev,
    SelectNext,
}
