//! Operations under test and the context they run in.
//!
//! An operation is consumed by [`Operation::execute`], so it runs exactly once. It edits the
//! collaborator through [`EditContext`] and moves the cursor with [`EditContext::set_cursor`];
//! the harness formats the final cursor position into the actual output.
//!
//! Any `FnOnce(&mut EditContext<'_, C>) -> Result<(), C::Error>` is an operation. The types in
//! this module cover the primitive edits most fixtures need.

use crate::collaborator::{Collaborator, EditBuffer};
use std::ops::Range;

/// Mutable view handed to an operation: the collaborator plus the harness cursor.
pub struct EditContext<'a, C: ?Sized> {
    buffer: &'a mut C,
    cursor: &'a mut usize,
}

impl<'a, C: ?Sized> EditContext<'a, C> {
    pub(crate) fn new(buffer: &'a mut C, cursor: &'a mut usize) -> Self {
        Self { buffer, cursor }
    }

    /// Current cursor offset in characters.
    pub fn cursor(&self) -> usize {
        *self.cursor
    }

    /// Move the cursor. The offset is not validated until the result is formatted.
    pub fn set_cursor(&mut self, offset: usize) {
        *self.cursor = offset;
    }

    /// The collaborator.
    pub fn buffer(&self) -> &C {
        self.buffer
    }

    /// The collaborator, mutably.
    pub fn buffer_mut(&mut self) -> &mut C {
        self.buffer
    }
}

/// A unit of text mutation under test.
pub trait Operation<C: Collaborator + ?Sized> {
    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Apply the operation.
    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error>;

    /// Run `next` after this operation, within the same execution.
    fn then<B>(self, next: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Operation<C>,
    {
        Chain { first: self, second: next }
    }
}

impl<C, F> Operation<C> for F
where
    C: Collaborator + ?Sized,
    F: FnOnce(&mut EditContext<'_, C>) -> Result<(), C::Error>,
{
    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        self(cx)
    }
}

/// Leaves text and cursor untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<C: Collaborator + ?Sized> Operation<C> for Identity {
    fn name(&self) -> &str {
        "identity"
    }

    fn execute(self, _cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        Ok(())
    }
}

/// Inserts text at the cursor and moves the cursor past it.
#[derive(Debug, Clone)]
pub struct Insert {
    text: String,
}

impl Insert {
    /// Insert `text` at the cursor.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl<C: EditBuffer + ?Sized> Operation<C> for Insert {
    fn name(&self) -> &str {
        "insert"
    }

    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        let offset = cx.cursor();
        cx.buffer_mut().insert(offset, &self.text)?;
        cx.set_cursor(offset + self.text.chars().count());
        Ok(())
    }
}

/// Removes up to `count` characters before the cursor.
#[derive(Debug, Clone, Copy)]
pub struct DeleteBackward {
    count: usize,
}

impl DeleteBackward {
    /// Delete `count` characters, stopping at the start of the text.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<C: EditBuffer + ?Sized> Operation<C> for DeleteBackward {
    fn name(&self) -> &str {
        "delete-backward"
    }

    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        let end = cx.cursor();
        let start = end.saturating_sub(self.count);
        cx.buffer_mut().remove(start..end)?;
        cx.set_cursor(start);
        Ok(())
    }
}

/// Removes up to `count` characters after the cursor.
#[derive(Debug, Clone, Copy)]
pub struct DeleteForward {
    count: usize,
}

impl DeleteForward {
    /// Delete `count` characters, stopping at the end of the text.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<C: EditBuffer + ?Sized> Operation<C> for DeleteForward {
    fn name(&self) -> &str {
        "delete-forward"
    }

    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        let start = cx.cursor();
        let end = start.saturating_add(self.count).min(cx.buffer().char_count());
        cx.buffer_mut().remove(start..end.max(start))
    }
}

#[derive(Debug, Clone, Copy)]
enum CursorTarget {
    To(usize),
    By(isize),
}

/// Moves the cursor without touching the text. The target is clamped to the text.
#[derive(Debug, Clone, Copy)]
pub struct MoveCursor {
    target: CursorTarget,
}

impl MoveCursor {
    /// Move to an absolute character offset.
    pub fn to(offset: usize) -> Self {
        Self {
            target: CursorTarget::To(offset),
        }
    }

    /// Move by a signed number of characters.
    pub fn by(delta: isize) -> Self {
        Self {
            target: CursorTarget::By(delta),
        }
    }
}

impl<C: EditBuffer + ?Sized> Operation<C> for MoveCursor {
    fn name(&self) -> &str {
        "move-cursor"
    }

    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        let len = cx.buffer().char_count();
        let target = match self.target {
            CursorTarget::To(offset) => offset,
            CursorTarget::By(delta) => cx.cursor().saturating_add_signed(delta),
        };
        cx.set_cursor(target.min(len));
        Ok(())
    }
}

/// Replaces a character range, keeping the cursor anchored to the surrounding text.
///
/// A cursor before the range stays put, a cursor inside it lands after the new text, and a
/// cursor after it shifts by the change in length.
#[derive(Debug, Clone)]
pub struct Replace {
    range: Range<usize>,
    text: String,
}

impl Replace {
    /// Replace `range` with `text`.
    pub fn new(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

impl<C: EditBuffer + ?Sized> Operation<C> for Replace {
    fn name(&self) -> &str {
        "replace"
    }

    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        let Range { start, end } = self.range;
        let inserted = self.text.chars().count();
        cx.buffer_mut().replace(start..end, &self.text)?;

        let cursor = cx.cursor();
        let moved = if cursor < start {
            cursor
        } else if cursor <= end {
            start + inserted
        } else {
            cursor - (end - start) + inserted
        };
        cx.set_cursor(moved);
        Ok(())
    }
}

/// Two operations run back to back. Built by [`Operation::then`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<C, A, B> Operation<C> for Chain<A, B>
where
    C: Collaborator + ?Sized,
    A: Operation<C>,
    B: Operation<C>,
{
    fn name(&self) -> &str {
        "chain"
    }

    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        self.first.execute(cx)?;
        self.second.execute(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::{BufferError, StringBuffer};

    fn run<O: Operation<StringBuffer>>(text: &str, cursor: usize, op: O) -> (String, usize) {
        let mut buffer = StringBuffer::new();
        buffer.prepare(text).unwrap();
        let mut cursor = cursor;
        op.execute(&mut EditContext::new(&mut buffer, &mut cursor))
            .unwrap();
        (buffer.current_source(), cursor)
    }

    #[test]
    fn test_insert_advances_cursor() {
        assert_eq!(run("ac", 1, Insert::new("b")), ("abc".to_string(), 2));
        assert_eq!(run("", 0, Insert::new("你好")), ("你好".to_string(), 2));
    }

    #[test]
    fn test_delete_backward_clamps_at_start() {
        assert_eq!(run("abc", 2, DeleteBackward::new(1)), ("ac".to_string(), 1));
        assert_eq!(run("abc", 1, DeleteBackward::new(5)), ("bc".to_string(), 0));
    }

    #[test]
    fn test_delete_forward_clamps_at_end() {
        assert_eq!(run("abc", 1, DeleteForward::new(1)), ("ac".to_string(), 1));
        assert_eq!(run("abc", 1, DeleteForward::new(9)), ("a".to_string(), 1));
        assert_eq!(run("abc", 3, DeleteForward::new(1)), ("abc".to_string(), 3));
    }

    #[test]
    fn test_move_cursor_clamps() {
        assert_eq!(run("abc", 1, MoveCursor::by(-4)).1, 0);
        assert_eq!(run("abc", 1, MoveCursor::by(1)).1, 2);
        assert_eq!(run("abc", 1, MoveCursor::to(10)).1, 3);
    }

    #[test]
    fn test_replace_anchors_cursor() {
        // Cursor before, inside and after the replaced range.
        assert_eq!(run("aXXb", 0, Replace::new(1..3, "y")), ("ayb".to_string(), 0));
        assert_eq!(run("aXXb", 2, Replace::new(1..3, "y")), ("ayb".to_string(), 2));
        assert_eq!(run("aXXb", 4, Replace::new(1..3, "y")), ("ayb".to_string(), 3));
    }

    #[test]
    fn test_chain_and_closure() {
        let op = Operation::<StringBuffer>::then(Insert::new("()"), MoveCursor::by(-1));
        assert_eq!(run("f", 1, op), ("f()".to_string(), 2));

        fn upper(cx: &mut EditContext<'_, StringBuffer>) -> Result<(), BufferError> {
            let text = cx.buffer().current_source().to_uppercase();
            cx.buffer_mut().prepare(&text)
        }
        assert_eq!(run("abc", 1, upper), ("ABC".to_string(), 1));
    }
}
