use crate::common::{WktType, EMPTY};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use crate::reader::token::{Token, TokenKind, Tokens};
use crate::reader::WktReaderOptions;

/// Recursive-descent parser over a [`Tokens`] stream.
///
/// Open parentheses are tracked on an explicit stack of byte offsets, so that running out of
/// input inside a group can be reported against the `(` that was never closed.
pub(crate) struct Parser<'a> {
    input: &'a str,
    tokens: Tokens<'a>,
    peeked: Option<Token<'a>>,
    open: Vec<usize>,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &WktReaderOptions) -> Self {
        Self {
            input,
            tokens: Tokens::new(input),
            peeked: None,
            open: Vec::new(),
            max_depth: options.max_depth,
        }
    }

    /// Parse exactly one geometry spanning the whole input.
    pub fn parse(mut self) -> ParseResult<Geometry> {
        if self.input.trim().is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyInput, 0, self.input));
        }

        let geometry = self.geometry()?;
        match self.next_token()? {
            None => Ok(geometry),
            Some(token) if token.kind == TokenKind::RightParen => Err(ParseError::new(
                ParseErrorKind::UnbalancedParentheses,
                token.offset,
                token.text,
            )),
            Some(token) => Err(unexpected(token)),
        }
    }

    fn peek(&mut self) -> ParseResult<Option<Token<'a>>> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next().transpose()?;
        }
        Ok(self.peeked)
    }

    fn next_token(&mut self) -> ParseResult<Option<Token<'a>>> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.tokens.next().transpose(),
        }
    }

    /// The next token, which must exist.
    fn expect_token(&mut self) -> ParseResult<Token<'a>> {
        self.next_token()?.ok_or_else(|| self.end_of_input())
    }

    fn end_of_input(&self) -> ParseError {
        match self.open.last() {
            Some(&offset) => ParseError::new(
                ParseErrorKind::UnbalancedParentheses,
                offset,
                &self.input[offset..],
            ),
            None => ParseError::new(ParseErrorKind::UnexpectedEndOfInput, self.input.len(), ""),
        }
    }

    /// Consume the next token if it has the given kind.
    fn take(&mut self, kind: TokenKind<'_>) -> ParseResult<bool> {
        match self.peek()? {
            Some(token) if token.kind == kind => {
                self.peeked = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn take_empty(&mut self) -> ParseResult<bool> {
        self.take(TokenKind::Word(EMPTY))
    }

    fn open_paren(&mut self) -> ParseResult<()> {
        let token = self.expect_token()?;
        if token.kind != TokenKind::LeftParen {
            return Err(unexpected(token));
        }
        if self.open.len() >= self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep,
                token.offset,
                &self.input[token.offset..],
            ));
        }
        self.open.push(token.offset);
        Ok(())
    }

    fn close_paren(&mut self) -> ParseResult<()> {
        let token = self.expect_token()?;
        if token.kind != TokenKind::RightParen {
            return Err(unexpected(token));
        }
        self.open.pop();
        Ok(())
    }

    /// `"(" item ("," item)* ")"`
    fn delimited<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.open_paren()?;
        let mut items = vec![item(self)?];
        while self.take(TokenKind::Comma)? {
            items.push(item(self)?);
        }
        self.close_paren()?;
        Ok(items)
    }

    fn number(&mut self) -> ParseResult<f64> {
        let token = self.expect_token()?;
        match token.kind {
            TokenKind::Number(value) => Ok(value),
            _ => Err(unexpected(token)),
        }
    }

    fn coord(&mut self) -> ParseResult<Coord> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Coord::new(x, y))
    }

    /// `"(" coordPair ("," coordPair)* ")"`
    fn ring(&mut self) -> ParseResult<LineString> {
        Ok(LineString::new(self.delimited(Self::coord)?))
    }

    fn geometry(&mut self) -> ParseResult<Geometry> {
        let token = self.expect_token()?;
        let geometry_type = match token.kind {
            TokenKind::Word(word) => WktType::from_keyword(word).ok_or_else(|| {
                ParseError::new(ParseErrorKind::UnknownGeometryType, token.offset, token.text)
            })?,
            _ => return Err(unexpected(token)),
        };

        let geometry = match geometry_type {
            WktType::Point => self.point()?.into(),
            WktType::LineString => self.line_string()?.into(),
            WktType::Polygon => self.polygon()?.into(),
            WktType::MultiPoint => self.multi_point()?.into(),
            WktType::MultiLineString => self.multi_line_string()?.into(),
            WktType::MultiPolygon => self.multi_polygon()?.into(),
            WktType::GeometryCollection => self.geometry_collection()?.into(),
        };
        Ok(geometry)
    }

    fn point(&mut self) -> ParseResult<Point> {
        if self.take_empty()? {
            return Ok(Point::empty());
        }
        self.open_paren()?;
        let coord = self.coord()?;
        self.close_paren()?;
        Ok(Point::from_coord(coord))
    }

    fn line_string(&mut self) -> ParseResult<LineString> {
        if self.take_empty()? {
            return Ok(LineString::empty());
        }
        self.ring()
    }

    fn polygon(&mut self) -> ParseResult<Polygon> {
        if self.take_empty()? {
            return Ok(Polygon::empty());
        }
        Ok(Polygon::from_rings(self.delimited(Self::ring)?))
    }

    /// Members may be written `(x y)`, bare `x y`, or `EMPTY`.
    fn multi_point(&mut self) -> ParseResult<MultiPoint> {
        if self.take_empty()? {
            return Ok(MultiPoint::empty());
        }
        let points = self.delimited(|parser| {
            if matches!(parser.peek()?, Some(token) if token.kind == TokenKind::LeftParen) {
                parser.point()
            } else if parser.take_empty()? {
                Ok(Point::empty())
            } else {
                Ok(Point::from_coord(parser.coord()?))
            }
        })?;
        Ok(MultiPoint::new(points))
    }

    fn multi_line_string(&mut self) -> ParseResult<MultiLineString> {
        if self.take_empty()? {
            return Ok(MultiLineString::empty());
        }
        Ok(MultiLineString::new(self.delimited(Self::line_string)?))
    }

    fn multi_polygon(&mut self) -> ParseResult<MultiPolygon> {
        if self.take_empty()? {
            return Ok(MultiPolygon::empty());
        }
        Ok(MultiPolygon::new(self.delimited(Self::polygon)?))
    }

    fn geometry_collection(&mut self) -> ParseResult<GeometryCollection> {
        if self.take_empty()? {
            return Ok(GeometryCollection::empty());
        }
        Ok(GeometryCollection::new(self.delimited(Self::geometry)?))
    }
}

fn unexpected(token: Token<'_>) -> ParseError {
    ParseError::new(ParseErrorKind::UnexpectedToken, token.offset, token.text)
}
