use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(buf.encoding_issues().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn indented_source() {
    let buf = SourceBuffer::new("module m\n\tfunction f");
    assert_eq!(buf.len(), 20);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"module m\n\tfunction f");
    assert!(buf.encoding_issues().is_empty());
    assert_eq!(buf.as_sentinel_bytes()[20], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "\tname \u{1F600}\n";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert!(buf.encoding_issues().is_empty());
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source: String = "\t".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.as_sentinel_bytes().len(),
            len
        );
        assert!(buf.as_sentinel_bytes().len() > len, "no room for sentinel");
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("\ta\n");
    assert!(buf.as_sentinel_bytes()[3..].iter().all(|&b| b == 0));
}

// === BOM Detection ===

#[test]
fn detects_utf8_bom() {
    let buf = SourceBuffer::new("\u{FEFF}module m");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn bom_only_detected_at_start() {
    let buf = SourceBuffer::new("a\u{FEFF}");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn utf16_boms_from_bytes() {
    let mut issues = Vec::new();
    detect_bom(&[0xFF, 0xFE, b'a', 0], &mut issues);
    assert_eq!(issues[0].kind, EncodingIssueKind::Utf16LeBom);
    assert_eq!(issues[0].len, 2);

    issues.clear();
    detect_bom(&[0xFE, 0xFF, 0, b'a'], &mut issues);
    assert_eq!(issues[0].kind, EncodingIssueKind::Utf16BeBom);

    issues.clear();
    detect_bom(&[0xFE], &mut issues);
    assert!(issues.is_empty());
}

// === Interior Nulls ===

#[test]
fn detects_interior_nulls() {
    let buf = SourceBuffer::new("a\0b\0");
    let positions: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|issue| issue.kind == EncodingIssueKind::InteriorNull)
        .map(|issue| issue.pos)
        .collect();
    assert_eq!(positions, [1, 3]);
}

#[test]
fn bom_and_null_both_reported() {
    let buf = SourceBuffer::new("\u{FEFF}\0");
    assert_eq!(buf.encoding_issues().len(), 2);
    assert_eq!(buf.encoding_issues()[0].kind, EncodingIssueKind::Utf8Bom);
    assert_eq!(buf.encoding_issues()[1].kind, EncodingIssueKind::InteriorNull);
    assert_eq!(buf.encoding_issues()[1].pos, 3);
}

#[test]
fn describe_is_nonempty() {
    for kind in [
        EncodingIssueKind::Utf8Bom,
        EncodingIssueKind::Utf16LeBom,
        EncodingIssueKind::Utf16BeBom,
        EncodingIssueKind::InteriorNull,
    ] {
        assert!(!kind.describe().is_empty());
    }
}

// === Cursor ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("\tx");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.column(), 0);
    assert_eq!(cursor.current(), b'\t');
}
