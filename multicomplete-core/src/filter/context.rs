/// Snapshot of the word under the cursor for one recompute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditContext {
    /// Character offset where the current word starts
    pub start: usize,
    /// Character offset where the current word ends (exclusive)
    pub end: usize,
    pub cursor_pos: usize,
    pub full_word: String,
    /// First character of the word when it is a marker
    pub active_marker: Option<char>,
    /// The word without its first character
    pub filter_str: String,
    /// Full field text at capture time
    pub val: String,
    pub filtered_results: Vec<String>,
}
