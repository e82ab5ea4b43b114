use super::*;

fn stream_of(kinds: &[(ChunkKind, &str)]) -> ChunkStream {
    let mut b = StreamBuilder::new();
    for &(kind, text) in kinds {
        b.tok(kind, text);
    }
    b.finish()
}

#[test]
fn push_back_links_both_ways() {
    let s = stream_of(&[(ChunkKind::Word, "a"), (ChunkKind::Word, "b")]);
    let head = s.head().unwrap();
    let tail = s.tail().unwrap();
    assert_eq!(s.next(head), Some(tail));
    assert_eq!(s.prev(tail), Some(head));
    assert_eq!(s.prev(head), None);
    assert_eq!(s.next(tail), None);
}

#[test]
fn builder_assigns_columns_with_gaps() {
    let s = stream_of(&[(ChunkKind::Word, "int"), (ChunkKind::Word, "x")]);
    let head = s.head().unwrap();
    assert_eq!(s.get(head).column, 1);
    let x = s.next(head).unwrap();
    assert_eq!(s.get(x).column, 5);
    assert_eq!(s.get(x).last_column(), 5);
}

#[test]
fn builder_tracks_levels() {
    let mut b = StreamBuilder::new();
    b.tok(ChunkKind::Word, "f");
    b.glue(ChunkKind::FparenOpen, "(");
    let arg = b.glue(ChunkKind::Word, "a");
    let close = b.glue(ChunkKind::FparenClose, ")");
    let s = b.finish();
    assert_eq!(s.get(arg).level, 1);
    // close paren sits at the open paren's level
    assert_eq!(s.get(close).level, 0);
}

#[test]
fn builder_tracks_brace_level() {
    let mut b = StreamBuilder::new();
    b.tok(ChunkKind::BraceOpen, "{");
    let inner = b.tok(ChunkKind::Word, "x");
    b.tok(ChunkKind::BraceClose, "}");
    let s = b.finish();
    assert_eq!(s.get(inner).brace_level, 1);
    assert_eq!(s.get(inner).level, 1);
}

#[test]
fn insert_before_head_updates_head() {
    let mut s = stream_of(&[(ChunkKind::Word, "x")]);
    let old_head = s.head().unwrap();
    let new = s.insert_before(old_head, Chunk::new(ChunkKind::Word, "y"));
    assert_eq!(s.head(), Some(new));
    assert_eq!(s.next(new), Some(old_head));
    assert_eq!(s.prev(old_head), Some(new));
}

#[test]
fn insert_newline_before_is_idempotent() {
    let mut s = stream_of(&[(ChunkKind::Word, "a"), (ChunkKind::Word, "b")]);
    let b_id = s.tail().unwrap();
    assert!(s.insert_newline_before(b_id).is_some());
    // second call sees the newline already in place
    assert!(s.insert_newline_before(b_id).is_none());
}

#[test]
fn insert_newline_before_newline_is_noop() {
    let mut b = StreamBuilder::new();
    b.tok(ChunkKind::Word, "a");
    let nl = b.newline();
    b.tok(ChunkKind::Word, "b");
    let mut s = b.finish();
    assert!(s.insert_newline_before(nl).is_none());
}

#[test]
fn inserted_newline_inherits_context() {
    let mut b = StreamBuilder::new();
    b.flags(ChunkFlags::IN_SPAREN);
    b.tok(ChunkKind::Word, "a");
    let anchor = b.tok(ChunkKind::Word, "b");
    let mut s = b.finish();
    let nl = s.insert_newline_before(anchor).unwrap();
    assert!(s.get(nl).flags.contains(ChunkFlags::IN_SPAREN));
    assert_eq!(s.get(nl).nl_count, 1);
}

#[test]
fn reindent_line_shifts_rest_of_line_only() {
    let mut b = StreamBuilder::new();
    let a = b.tok(ChunkKind::Word, "aa");
    let c = b.tok(ChunkKind::Word, "cc");
    b.newline();
    let d = b.tok(ChunkKind::Word, "dd");
    let mut s = b.finish();

    s.reindent_line(a, 5);
    assert_eq!(s.get(a).column, 5);
    assert_eq!(s.get(c).column, 8);
    // next line untouched
    assert_eq!(s.get(d).column, 1);
}

#[test]
fn reindent_line_clamps_at_column_one() {
    let mut b = StreamBuilder::new();
    b.pad(4);
    let a = b.tok(ChunkKind::Word, "aa");
    let mut s = b.finish();
    s.reindent_line(a, 1);
    assert_eq!(s.get(a).column, 1);
}

#[test]
fn prev_of_kind_respects_level() {
    let mut b = StreamBuilder::new();
    b.tok(ChunkKind::Word, "f");
    let outer = b.glue(ChunkKind::FparenOpen, "(");
    b.glue(ChunkKind::Word, "g");
    b.glue(ChunkKind::FparenOpen, "(");
    b.glue(ChunkKind::Word, "x");
    b.glue(ChunkKind::FparenClose, ")");
    let from = b.glue(ChunkKind::Word, "y");
    let s = b.finish();
    assert_eq!(s.prev_of_kind(from, ChunkKind::FparenOpen, 0), Some(outer));
}

#[test]
fn next_non_comment_non_newline_skips_trivia() {
    let mut b = StreamBuilder::new();
    let a = b.tok(ChunkKind::Word, "a");
    b.tok(ChunkKind::Comment, "// c");
    b.newline();
    let target = b.tok(ChunkKind::Word, "b");
    let s = b.finish();
    assert_eq!(s.next_non_comment_non_newline(a), Some(target));
}

#[test]
fn is_last_on_line() {
    let mut b = StreamBuilder::new();
    let a = b.tok(ChunkKind::Word, "a");
    let c = b.tok(ChunkKind::Word, "c");
    b.newline();
    let d = b.tok(ChunkKind::Word, "d");
    let s = b.finish();
    assert!(!s.is_last_on_line(a));
    assert!(s.is_last_on_line(c));
    assert!(s.is_last_on_line(d));
}

#[test]
fn render_honors_columns_and_newlines() {
    let mut b = StreamBuilder::new();
    b.tok(ChunkKind::Word, "ab");
    b.newline();
    b.pad(4);
    b.glue(ChunkKind::Word, "cd");
    let s = b.finish();
    assert_eq!(s.render(), "ab\n    cd");
}

#[test]
fn render_skips_virtual_chunks() {
    let mut b = StreamBuilder::new();
    b.tok(ChunkKind::Word, "x");
    b.glue(ChunkKind::VbraceClose, "");
    let s = b.finish();
    assert_eq!(s.render(), "x");
}
