//! A canonical byte encoding for keys.
//!
//! Every term starts with a tag byte that holds the rank of its [TermKind]. Strings are written as
//! a big-endian `u32` byte length followed by their UTF-8 bytes. Numeric literals carry an
//! additional byte for their [NumericKind] followed by their canonical lexical form. Tuples are
//! written as their arity (`u32`) followed by their elements.
//!
//! Blank nodes cannot be encoded as their scope only exists within the current process. Tuples may
//! be nested at most [MAX_KEY_DEPTH] levels deep.

use crate::{
    EncodingError, Iri, Key, LangTaggedString, NumericKind, NumericLiteral, PlainString, Term,
    TermKind, TypedLiteral, Variable,
};

/// The maximum number of nested tuples in an encoded key.
pub const MAX_KEY_DEPTH: usize = 16;

/// Appends the encoding of `key` to `buffer`.
///
/// On failure, `buffer` is restored to its previous length.
pub fn encode_key(key: &Key, buffer: &mut Vec<u8>) -> Result<(), EncodingError> {
    let start = buffer.len();
    write_key(key, buffer, 0).inspect_err(|_| buffer.truncate(start))
}

/// Decodes a key that spans all of `bytes`.
pub fn decode_key(bytes: &[u8]) -> Result<Key, EncodingError> {
    let mut reader = Reader { bytes };
    let key = reader.read_key(0)?;
    if !reader.bytes.is_empty() {
        return Err(EncodingError::TrailingBytes {
            remaining: reader.bytes.len(),
        });
    }
    Ok(key)
}

fn write_key(key: &Key, buffer: &mut Vec<u8>, depth: usize) -> Result<(), EncodingError> {
    match key {
        Key::Term(term) => write_term(term, buffer),
        Key::Tuple(tuple) => {
            check_depth(depth)?;
            buffer.push(TermKind::Tuple.rank());
            write_len(tuple.arity(), buffer)?;
            for element in tuple {
                write_key(element, buffer, depth + 1)?;
            }
            Ok(())
        }
    }
}

fn write_term(term: &Term, buffer: &mut Vec<u8>) -> Result<(), EncodingError> {
    if let Term::BlankNode(_) = term {
        return Err(EncodingError::UnscopedBlankNode);
    }

    buffer.push(term.kind().rank());
    match term {
        Term::Null | Term::BlankNode(_) => Ok(()),
        Term::Iri(iri) => write_str(iri.as_str(), buffer),
        Term::PlainString(value) => write_str(value.as_str(), buffer),
        Term::LangTaggedString(value) => {
            write_str(value.value(), buffer)?;
            write_str(value.language(), buffer)
        }
        Term::Numeric(value) => {
            buffer.push(value.kind().tag());
            write_str(&value.to_string(), buffer)
        }
        Term::TypedLiteral(value) => {
            write_str(value.value(), buffer)?;
            write_str(value.datatype().as_str(), buffer)
        }
        Term::Variable(variable) => write_str(variable.name(), buffer),
    }
}

fn check_depth(depth: usize) -> Result<(), EncodingError> {
    if depth >= MAX_KEY_DEPTH {
        return Err(EncodingError::TooDeep {
            max_depth: MAX_KEY_DEPTH,
        });
    }
    Ok(())
}

fn write_len(len: usize, buffer: &mut Vec<u8>) -> Result<(), EncodingError> {
    let len = u32::try_from(len).map_err(|_| EncodingError::TooLong { len })?;
    buffer.extend_from_slice(&len.to_be_bytes());
    Ok(())
}

fn write_str(value: &str, buffer: &mut Vec<u8>) -> Result<(), EncodingError> {
    write_len(value.len(), buffer)?;
    buffer.extend_from_slice(value.as_bytes());
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn read_u8(&mut self) -> Result<u8, EncodingError> {
        let (byte, rest) = self.bytes.split_first().ok_or(EncodingError::Truncated)?;
        self.bytes = rest;
        Ok(*byte)
    }

    fn read_len(&mut self) -> Result<usize, EncodingError> {
        let (len, rest) = self
            .bytes
            .split_first_chunk::<4>()
            .ok_or(EncodingError::Truncated)?;
        self.bytes = rest;
        usize::try_from(u32::from_be_bytes(*len)).map_err(|_| EncodingError::Truncated)
    }

    fn read_str(&mut self) -> Result<&'a str, EncodingError> {
        let len = self.read_len()?;
        let (value, rest) = self
            .bytes
            .split_at_checked(len)
            .ok_or(EncodingError::Truncated)?;
        self.bytes = rest;
        Ok(std::str::from_utf8(value)?)
    }

    fn read_key(&mut self, depth: usize) -> Result<Key, EncodingError> {
        let tag = self.read_u8()?;
        let kind = TermKind::from_rank(tag).ok_or(EncodingError::UnknownTag { tag })?;
        let term = match kind {
            TermKind::Null => Term::Null,
            TermKind::Tuple => {
                check_depth(depth)?;
                let arity = self.read_len()?;
                let elements = (0..arity)
                    .map(|_| self.read_key(depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Key::tuple(elements));
            }
            TermKind::BlankNode => return Err(EncodingError::UnscopedBlankNode),
            TermKind::Iri => Iri::new_unchecked(self.read_str()?).into(),
            TermKind::PlainString => PlainString::new(self.read_str()?).into(),
            TermKind::LangTaggedString => {
                let value = self.read_str()?;
                LangTaggedString::new_unchecked(value, self.read_str()?).into()
            }
            TermKind::Numeric => self.read_numeric()?.into(),
            TermKind::TypedLiteral => {
                let value = self.read_str()?;
                TypedLiteral::new(value, Iri::new_unchecked(self.read_str()?)).into()
            }
            TermKind::Variable => Variable::new(self.read_str()?).into(),
        };
        Ok(Key::Term(term))
    }

    fn read_numeric(&mut self) -> Result<NumericLiteral, EncodingError> {
        let tag = self.read_u8()?;
        let kind = NumericKind::from_tag(tag).ok_or(EncodingError::UnknownTag { tag })?;
        let value = self.read_str()?;
        NumericLiteral::parse(value, kind).map_err(|_| EncodingError::InvalidNumeric {
            value: value.to_owned(),
        })
    }
}
