use crate::{SourceBuffer, Span};
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_scalar() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn forward_moves_one_scalar() {
    let buf = SourceBuffer::new("\u{1F600}b");
    let mut cursor = buf.cursor();
    cursor.forward();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn forward_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert!(!cursor.done());
    cursor.forward();
    cursor.forward();
    assert!(cursor.done());
    assert_eq!(cursor.current(), None);
}

#[test]
fn forward_at_end_is_noop() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.forward();
    cursor.forward();
    cursor.forward();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn empty_source_is_done() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().done());
}

// === Peek ===

#[test]
fn peek_offsets() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(0), Some('a'));
    assert_eq!(cursor.peek(1), Some('b'));
    assert_eq!(cursor.peek(2), Some('c'));
    assert_eq!(cursor.peek(3), None);
    assert_eq!(cursor.peek(u32::MAX), None);
}

// === CRLF ===

#[test]
fn crlf_is_one_step() {
    let buf = SourceBuffer::new("\r\nx");
    let mut cursor = buf.cursor();
    cursor.forward();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn lone_cr_is_one_step() {
    let buf = SourceBuffer::new("\rx");
    let mut cursor = buf.cursor();
    cursor.forward();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn cr_cr_lf_steps_cr_then_crlf() {
    let buf = SourceBuffer::new("\r\r\n");
    let mut cursor = buf.cursor();
    cursor.forward();
    assert_eq!(cursor.pos(), 1);
    cursor.forward();
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.done());
}

#[test]
fn lf_cr_is_two_steps() {
    let buf = SourceBuffer::new("\n\r");
    let mut cursor = buf.cursor();
    cursor.forward();
    cursor.forward();
    assert_eq!(cursor.pos(), 2);
}

// === Eating ===

#[test]
fn eat_matching_and_non_matching() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat('b'));
    assert!(cursor.eat('a'));
    assert!(cursor.eat('b'));
    assert!(!cursor.eat('b'));
}

#[test]
fn eat_while_stops_at_first_mismatch() {
    let buf = SourceBuffer::new("  \tx ");
    let mut cursor = buf.cursor();
    cursor.eat_while(|c| c == ' ' || c == '\t');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_end() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|c| c == 'a');
    assert!(cursor.done());
}

// === Spans ===

#[test]
fn span_from_snapshot() {
    let buf = SourceBuffer::new("key = 1");
    let mut cursor = buf.cursor();
    let start = cursor;
    cursor.eat_while(|c| c.is_ascii_alphabetic());
    assert_eq!(cursor.span_from(start), Span::new(&buf, 0, 3));
    assert_eq!(cursor.text_from(start), "key");
    assert_eq!(cursor.span(), Span::point(&buf, 3));
}

#[test]
fn snapshot_is_independent() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.forward();
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 1);
}
