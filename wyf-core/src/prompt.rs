use wyf_types::ImportMode;

/// Decision points that need a synchronous answer from the user before a
/// store operation can proceed. The presentation layer implements this over
/// whatever input mechanism it has; tests use fixed answers.
pub trait Prompter {
    /// Asked before a friend is removed. `false` keeps the record.
    fn confirm_remove(&self) -> bool;

    /// Asked when importing into a non-empty store. Cancelling counts as
    /// [`ImportMode::Merge`].
    fn choose_import_mode(&self) -> ImportMode;
}
