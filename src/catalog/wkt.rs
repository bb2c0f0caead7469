//! Bracket-depth parser for OGC WKT1 coordinate system strings.
//!
//! Produces a small node tree: `KEYWORD[value, value, ...]` where each value
//! is a quoted string, a number, a bare identifier (`EAST`, `NORTH`) or a
//! nested node. Both `[]` and `()` delimiters are accepted.

use crate::error::{GeoError, Result};

/// Deepest node nesting accepted
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum WktValue {
    Text(String),
    Number(f64),
    Keyword(String),
    Node(WktNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WktNode {
    pub keyword: String,
    pub values: Vec<WktValue>,
}

impl WktNode {
    /// Parse a complete WKT string. Trailing text after the root node is an error.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = Parser {
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
        };
        let node = parser.node()?;
        parser.skip_ws();
        if parser.pos != parser.bytes.len() {
            return Err(GeoError::wkt(parser.pos, "unexpected text after root node"));
        }
        Ok(node)
    }

    /// First quoted string, conventionally the object's name
    pub fn name(&self) -> Option<&str> {
        self.values.iter().find_map(|v| match v {
            WktValue::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Numeric values in order
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| match v {
            WktValue::Number(n) => Some(*n),
            _ => None,
        })
    }

    pub fn number(&self, index: usize) -> Option<f64> {
        self.numbers().nth(index)
    }

    /// Direct children with the given keyword (case-insensitive)
    pub fn children<'a>(&'a self, keyword: &str) -> impl Iterator<Item = &'a WktNode> {
        self.values.iter().filter_map(move |v| match v {
            WktValue::Node(n) if n.keyword.eq_ignore_ascii_case(keyword) => Some(n),
            _ => None,
        })
    }

    pub fn child(&self, keyword: &str) -> Option<&WktNode> {
        self.children(keyword).next()
    }

    /// All nodes with the given keyword at any depth, in document order
    pub fn descendants(&self, keyword: &str) -> Vec<&WktNode> {
        let mut found = Vec::new();
        self.collect(keyword, &mut found);
        found
    }

    fn collect<'a>(&'a self, keyword: &str, found: &mut Vec<&'a WktNode>) {
        for value in &self.values {
            if let WktValue::Node(n) = value {
                if n.keyword.eq_ignore_ascii_case(keyword) {
                    found.push(n);
                }
                n.collect(keyword, found);
            }
        }
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn identifier(&mut self) -> Result<String> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if start == self.pos {
            return Err(GeoError::wkt(self.pos, "expected keyword"));
        }
        Ok(String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned())
    }

    fn node(&mut self) -> Result<WktNode> {
        if self.depth == MAX_DEPTH {
            return Err(GeoError::wkt(self.pos, "nesting too deep"));
        }
        self.depth += 1;
        self.skip_ws();
        let keyword = self.identifier()?;
        self.skip_ws();

        let close = match self.peek() {
            Some(b'[') => b']',
            Some(b'(') => b')',
            _ => return Err(GeoError::wkt(self.pos, format!("expected '[' after {keyword}"))),
        };
        self.pos += 1;

        let mut values = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(close) && values.is_empty() {
                self.pos += 1;
                break;
            }

            values.push(self.value()?);

            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b) if b == close => {
                    self.pos += 1;
                    break;
                }
                Some(_) => return Err(GeoError::wkt(self.pos, "expected ',' or closing bracket")),
                None => return Err(GeoError::wkt(self.pos, format!("unterminated {keyword}"))),
            }
        }

        self.depth -= 1;
        Ok(WktNode { keyword, values })
    }

    fn value(&mut self) -> Result<WktValue> {
        match self.peek() {
            Some(b'"') => self.text().map(WktValue::Text),
            Some(b) if b == b'-' || b == b'+' || b == b'.' || b.is_ascii_digit() => {
                self.number().map(WktValue::Number)
            }
            Some(b) if b.is_ascii_alphabetic() => {
                let start = self.pos;
                let ident = self.identifier()?;
                self.skip_ws();
                if matches!(self.peek(), Some(b'[') | Some(b'(')) {
                    self.pos = start;
                    self.node().map(WktValue::Node)
                } else {
                    Ok(WktValue::Keyword(ident))
                }
            }
            Some(_) => Err(GeoError::wkt(self.pos, "unexpected character")),
            None => Err(GeoError::wkt(self.pos, "unexpected end of input")),
        }
    }

    fn text(&mut self) -> Result<String> {
        let start = self.pos;
        self.pos += 1;
        let mut out = Vec::new();
        loop {
            match self.peek() {
                // A doubled quote is an escaped quote
                Some(b'"') if self.bytes.get(self.pos + 1) == Some(&b'"') => {
                    out.push(b'"');
                    self.pos += 2;
                }
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(String::from_utf8_lossy(&out).into_owned());
                }
                Some(b) => {
                    out.push(b);
                    self.pos += 1;
                }
                None => return Err(GeoError::wkt(start, "unterminated string")),
            }
        }
    }

    fn number(&mut self) -> Result<f64> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E') {
                self.pos += 1;
            } else {
                break;
            }
        }
        let token = String::from_utf8_lossy(&self.bytes[start..self.pos]);
        token
            .parse::<f64>()
            .map_err(|_| GeoError::wkt(start, format!("invalid number '{token}'")))
    }
}
