use edit_fixture::{
    DeleteBackward, EditBuffer, FixtureError, FixtureRole, Harness, Identity, Insert, MoveCursor,
    Operation, StringBuffer, assert_edit,
};
use pretty_assertions::assert_eq;
use std::cell::Cell;

#[test]
fn test_identity_keeps_input() {
    let mut harness = Harness::new(StringBuffer::new());
    harness.run("object A^", "object A^", Identity).unwrap();
    assert_eq!(harness.cursor(), 8);
}

#[test]
fn test_insert_moves_cursor_past_text() {
    let mut harness = Harness::new(StringBuffer::new());
    harness
        .input("object A^")
        .becomes("object AB^")
        .after(Insert::new("B"))
        .unwrap();

    assert_eq!(harness.collaborator().text(), "object AB");
    assert_eq!(harness.cursor(), 9);
}

#[test]
fn test_mismatch_carries_both_strings() {
    let mut harness = Harness::new(StringBuffer::new());
    let err = harness
        .input("object A^")
        .becomes("object AX^")
        .after(Insert::new("B"))
        .unwrap_err();

    let mismatch = err.mismatch().expect("mismatch");
    assert_eq!(mismatch.expected, "object AX^");
    assert_eq!(mismatch.actual, "object AB^");

    let rendered = err.to_string();
    assert!(rendered.contains("expected: \"object AX^\""));
    assert!(rendered.contains("actual:   \"object AB^\""));
}

#[test]
fn test_boundary_markers_do_not_change_comparison() {
    assert_edit("foo^  ", "foo^$  ", Identity);
    assert_edit("foo^$  $", "foo^  ", Identity);

    let plain = edit_fixture::parse("foo^  ").unwrap();
    let marked = edit_fixture::parse("foo^  $").unwrap();
    assert_eq!(plain, marked);
}

#[test]
fn test_trailing_whitespace_is_still_compared() {
    let mut harness = Harness::new(StringBuffer::new());
    let err = harness.run("foo^  ", "foo^ $", Identity).unwrap_err();
    assert_eq!(err.mismatch().unwrap().actual, "foo^  ");
}

#[test]
fn test_malformed_input_never_reaches_operation() {
    for input in ["object A", "ob^ject A^"] {
        let executed = Cell::new(false);
        let mut harness = Harness::new(StringBuffer::new());
        let err = harness
            .run_with(input, "object A^", |cx| {
                executed.set(true);
                cx.buffer_mut().insert(0, "x")
            })
            .unwrap_err();

        assert!(matches!(
            err,
            FixtureError::MalformedFixture {
                role: FixtureRole::Input,
                ..
            }
        ));
        assert!(!executed.get());
        assert_eq!(harness.collaborator().text(), "");
    }
}

#[test]
fn test_closure_operation_with_custom_cursor() {
    let mut harness = Harness::new(StringBuffer::new());
    harness
        .input("def f = ^")
        .becomes("def f = {\n  ^\n}")
        .after_fn(|cx| {
            let at = cx.cursor();
            cx.buffer_mut().insert(at, "{\n  \n}")?;
            cx.set_cursor(at + 4);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_chained_primitives() {
    assert_edit(
        "println^",
        "println(^)",
        Operation::<StringBuffer>::then(Insert::new("()"), MoveCursor::by(-1)),
    );
    assert_edit("val xs^y", "val ^y", DeleteBackward::new(2));
}

#[test]
#[should_panic(expected = "fixture output mismatch")]
fn test_assert_edit_panics_on_mismatch() {
    assert_edit("a^", "ab^", Identity);
}
