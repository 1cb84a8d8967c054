use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ParseError, ParseErrorKind, ParseResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum TokenKind<'a> {
    Word(&'a str),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

/// A token along with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset of the first character
    pub offset: usize,
    pub text: &'a str,
}

/// Lazily splits WKT text into tokens, skipping whitespace.
pub(crate) struct Tokens<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Consume characters while `predicate` holds, returning the end offset of the run.
    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        while let Some(&(offset, c)) = self.chars.peek() {
            if !predicate(c) {
                return offset;
            }
            self.chars.next();
        }
        self.input.len()
    }

    fn number(&mut self, start: usize) -> ParseResult<Token<'a>> {
        let end = self.take_while(is_number_char);
        let text = &self.input[start..end];
        if !is_wkt_number(text) {
            return Err(ParseError::new(ParseErrorKind::MalformedNumber, start, text));
        }
        match lexical_core::parse::<f64>(text.as_bytes()) {
            Ok(value) if value.is_finite() => Ok(Token {
                kind: TokenKind::Number(value),
                offset: start,
                text,
            }),
            _ => Err(ParseError::new(ParseErrorKind::MalformedNumber, start, text)),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = ParseResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_while(char::is_whitespace);
        let (start, c) = self.chars.next()?;

        let input = self.input;
        let punctuation = |kind| {
            Ok(Token {
                kind,
                offset: start,
                text: &input[start..start + 1],
            })
        };
        let token = match c {
            '(' => punctuation(TokenKind::LeftParen),
            ')' => punctuation(TokenKind::RightParen),
            ',' => punctuation(TokenKind::Comma),
            c if c.is_ascii_alphabetic() => {
                let end = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
                let text = &input[start..end];
                Ok(Token {
                    kind: TokenKind::Word(text),
                    offset: start,
                    text,
                })
            }
            c if is_number_char(c) => self.number(start),
            c => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                start,
                &input[start..start + c.len_utf8()],
            )),
        };
        Some(token)
    }
}

fn is_number_char(c: char) -> bool {
    matches!(c, '0'..='9' | '-' | '+' | '.' | 'e' | 'E')
}

/// `["-"] digit+ ["." digit+] [("e" | "E") ["+" | "-"] digit+]`
fn is_wkt_number(text: &str) -> bool {
    fn digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let mut bytes = text.as_bytes();
    if let [b'-', rest @ ..] = bytes {
        bytes = rest;
    }

    let n = digits(bytes);
    if n == 0 {
        return false;
    }
    bytes = &bytes[n..];

    if let [b'.', rest @ ..] = bytes {
        let n = digits(rest);
        if n == 0 {
            return false;
        }
        bytes = &rest[n..];
    }

    if let [b'e' | b'E', rest @ ..] = bytes {
        bytes = rest;
        if let [b'+' | b'-', rest @ ..] = bytes {
            bytes = rest;
        }
        let n = digits(bytes);
        if n == 0 {
            return false;
        }
        bytes = &bytes[n..];
    }

    bytes.is_empty()
}
