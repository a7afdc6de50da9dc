//! Integration tests for the lexer
//!
//! Tests tokenization of collision rule source.

use std::io::{self, BufReader, Read};

use collider_language::{Lexer, Span, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source).iter().map(|t| t.kind).collect()
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn tokenize_collision_line() {
    use TokenKind::*;
    assert_eq!(
        kinds("AirSwipe > EarthBlast"),
        vec![StringLit, GreaterThan, StringLit, Eol, Eof]
    );
}

#[test]
fn tokenize_group_line() {
    use TokenKind::*;
    assert_eq!(
        kinds("group \"Fire\" {FireBlast, CFB}"),
        vec![
            KeyGroup, Quote, StringLit, Quote, OpenBrace, StringLit, Comma, StringLit, CloseBrace,
            Eol, Eof
        ]
    );
}

#[test]
fn tokenize_group_reference() {
    let tokens = Lexer::tokenize_all("$Fire x IceSpikeBlast");
    assert_eq!(tokens[0].kind, TokenKind::DollarSign);
    assert_eq!(tokens[1].text, "Fire");
    assert_eq!(tokens[2].kind, TokenKind::X);
    assert_eq!(tokens[3].text, "IceSpikeBlast");
}

#[test]
fn keyword_is_case_insensitive() {
    assert_eq!(kinds("GROUP")[0], TokenKind::KeyGroup);
    assert_eq!(kinds("Group")[0], TokenKind::KeyGroup);
    assert_eq!(kinds("groups")[0], TokenKind::StringLit);
}

#[test]
fn specials_need_no_whitespace() {
    use TokenKind::*;
    assert_eq!(
        kinds("A>B,C~D"),
        vec![StringLit, GreaterThan, StringLit, Comma, StringLit, Tilde, StringLit, Eol, Eof]
    );
}

#[test]
fn lowercase_x_always_splits_a_name() {
    let tokens = Lexer::tokenize_all("Explode");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["E", "x", "plode", "", ""]);
    // Uppercase X is an ordinary character
    assert_eq!(Lexer::tokenize_all("XRay")[0].text, "XRay");
}

// =============================================================================
// Comments and Line Ends
// =============================================================================

#[test]
fn comment_suppresses_rest_of_line() {
    use TokenKind::*;
    assert_eq!(
        kinds("AirBlast > FireBlast # not > parsed\nA ~ B"),
        vec![
            StringLit, GreaterThan, StringLit, Pound, Eol, StringLit, Tilde, StringLit, Eol, Eof
        ]
    );
}

#[test]
fn blank_lines_each_end_once() {
    use TokenKind::*;
    assert_eq!(kinds("\n\n"), vec![Eol, Eol, Eof]);
    assert_eq!(kinds(""), vec![Eof]);
}

#[test]
fn spans_are_one_based() {
    let tokens = Lexer::tokenize_all("A > B\n  $G ~ C");
    assert_eq!(tokens[0].span, Span::new(1, 1));
    assert_eq!(tokens[2].span, Span::new(1, 5));
    assert_eq!(tokens[4].span, Span::new(2, 3));
    assert_eq!(tokens.last().unwrap().span.line, 3);
}

// =============================================================================
// Readers
// =============================================================================

/// Yields its text and then fails every read.
struct BrokenPipe(io::Cursor<&'static [u8]>);

impl Read for BrokenPipe {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.0.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone")),
            n => Ok(n),
        }
    }
}

#[test]
fn reader_matches_in_memory_source() {
    let source = "group \"G\" {A}\n$G = B # done\n";
    let from_reader = Lexer::from_reader(source.as_bytes()).read_tokens().unwrap();
    assert_eq!(from_reader, Lexer::tokenize_all(source));
}

#[test]
fn failing_reader_truncates_on_line_boundary() {
    let reader = BufReader::new(BrokenPipe(io::Cursor::new(b"A > B\nC < D\n")));
    let truncated = Lexer::from_reader(reader).read_tokens().unwrap_err();

    assert_eq!(truncated.source.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(truncated.tokens.len(), 8);
    assert_eq!(truncated.tokens.last().map(|t| t.kind), Some(TokenKind::Eol));
    assert!(truncated.tokens.iter().all(|t| t.kind != TokenKind::Eof));
}
