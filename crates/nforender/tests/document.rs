use nforender::NfoDocument;
use pretty_assertions::assert_eq;

#[test]
fn height_counts_blank_lines() {
    let doc = NfoDocument::from_bytes(b"one\n\nthree\n");
    assert_eq!(doc.height(), 3);
}

#[test]
fn trailing_newline_opens_no_extra_line() {
    assert_eq!(NfoDocument::from_bytes(b"a\nb\n").height(), 2);
    assert_eq!(NfoDocument::from_bytes(b"a\nb").height(), 2);
}

#[test]
fn width_ignores_trailing_whitespace() {
    let doc = NfoDocument::from_bytes(b"ab   \t \ncdef\n");
    assert_eq!(doc.width(), 4);
}

#[test]
fn tabs_count_one_cell_each() {
    let doc = NfoDocument::from_bytes(b"\ta\tb\n");
    assert_eq!(doc.width(), 4);
}

#[test]
fn interior_whitespace_is_preserved() {
    let doc = NfoDocument::from_bytes(b"a  b\n");
    assert_eq!(doc.width(), 4);
}

#[test]
fn crlf_terminators_are_stripped() {
    let doc = NfoDocument::from_bytes(b"ab\r\ncd\r\n");
    assert_eq!(doc.height(), 2);
    assert_eq!(doc.width(), 2);
}

#[test]
fn empty_input_is_an_empty_document() {
    let doc = NfoDocument::from_bytes(b"");
    assert_eq!((doc.width(), doc.height()), (0, 0));
}

#[test]
fn high_bytes_survive_loading() {
    // CP437 box art uses the upper half of the code page
    let doc = NfoDocument::from_bytes(b"\xc9\xcd\xbb\n");
    assert_eq!(doc.width(), 3);
    assert_eq!(doc.lines().next().unwrap(), b"\xc9\xcd\xbb");
}
