use crate::{Document, EditError};

/// Operations every edit variant provides
///
/// `undo` must exactly reverse `apply`: content and cursor end up as they
/// were immediately before `apply` ran. Both validate against the document
/// before changing anything, so an `Err` means the document is untouched.
pub trait EditOp {
    /// Perform the edit
    fn apply(&self, doc: &mut Document) -> Result<(), EditError>;

    /// Reverse a previous `apply`
    fn undo(&self, doc: &mut Document) -> Result<(), EditError>;

    /// Get a debug name for this edit
    fn name(&self) -> &'static str;
}
