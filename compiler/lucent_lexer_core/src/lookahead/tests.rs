use super::*;
use crate::SourceBuffer;

// === Span ===

#[test]
fn span_len_and_empty() {
    assert_eq!(Span::new(2, 5).len(), 3);
    assert!(!Span::new(2, 5).is_empty());
    assert!(Span::point(4).is_empty());
    assert_eq!(Span::point(4), Span::new(4, 4));
}

#[test]
fn span_display() {
    assert_eq!(Span::new(3, 7).to_string(), "3..7");
}

// === SourceLookahead ===

#[test]
fn unmarked_token_ends_at_read_position() {
    let buf = SourceBuffer::new("abc");
    let mut lookahead = SourceLookahead::new(buf.cursor());
    lookahead.advance(false);
    lookahead.advance(false);
    let (span, end) = lookahead.finish();
    assert_eq!(span, Span::new(0, 2));
    assert_eq!(end.pos(), 2);
}

#[test]
fn nothing_read_is_zero_width() {
    let buf = SourceBuffer::new("abc");
    let lookahead = SourceLookahead::new(buf.cursor());
    let (span, end) = lookahead.finish();
    assert_eq!(span, Span::point(0));
    assert_eq!(end.pos(), 0);
}

#[test]
fn mark_end_fixes_token_end() {
    let buf = SourceBuffer::new("abcd");
    let mut lookahead = SourceLookahead::new(buf.cursor());
    lookahead.advance(false);
    lookahead.mark_end();
    lookahead.advance(false);
    lookahead.advance(false);
    assert_eq!(lookahead.pos(), 3);
    let (span, end) = lookahead.finish();
    assert_eq!(span, Span::new(0, 1));
    assert_eq!(end.pos(), 1);
    assert_eq!(end.current(), b'b');
}

#[test]
fn skipped_prefix_moves_start() {
    let buf = SourceBuffer::new("  ab");
    let mut lookahead = SourceLookahead::new(buf.cursor());
    lookahead.advance(true);
    lookahead.advance(true);
    lookahead.advance(false);
    let (span, _) = lookahead.finish();
    assert_eq!(span, Span::new(2, 3));
}

#[test]
fn skipping_past_mark_is_zero_width_at_mark() {
    // The indentation scanner marks first, then skips the whitespace run.
    let buf = SourceBuffer::new("\n\t\tx");
    let mut lookahead = SourceLookahead::new(buf.cursor());
    lookahead.mark_end();
    lookahead.advance(true);
    lookahead.advance(true);
    lookahead.advance(true);
    assert_eq!(lookahead.lookahead(), Some('x'));
    let (span, end) = lookahead.finish();
    assert_eq!(span, Span::point(0));
    assert_eq!(end.current(), b'\n');
}

#[test]
fn column_follows_newlines() {
    let buf = SourceBuffer::new("a\n\tb");
    let mut lookahead = SourceLookahead::new(buf.cursor());
    assert_eq!(lookahead.column(), 0);
    lookahead.advance(true);
    assert_eq!(lookahead.column(), 1);
    lookahead.advance(true);
    assert_eq!(lookahead.column(), 0);
    lookahead.advance(true);
    assert_eq!(lookahead.column(), 1);
}

#[test]
fn lookahead_none_at_eof() {
    let buf = SourceBuffer::new("\t");
    let mut lookahead = SourceLookahead::new(buf.cursor());
    assert_eq!(lookahead.lookahead(), Some('\t'));
    lookahead.advance(true);
    assert_eq!(lookahead.lookahead(), None);
    // Advancing at EOF is a no-op.
    lookahead.advance(true);
    assert_eq!(lookahead.pos(), 1);
}

#[test]
fn usable_as_trait_object() {
    let buf = SourceBuffer::new(" x");
    let mut lookahead = SourceLookahead::new(buf.cursor());
    let dynamic: &mut dyn Lookahead = &mut lookahead;
    dynamic.advance(true);
    assert_eq!(dynamic.lookahead(), Some('x'));
}
