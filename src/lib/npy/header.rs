use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Write};

use crate::dtype::Dtype;
use crate::error::{FixtureError, Result};
use crate::utils::{py_bool, py_tuple};

static MAGIC_VALUE: &[u8] = &[0x93, 0x4E, 0x55, 0x4D, 0x50, 0x59]; // \x93NUMPY
const ARRAY_ALIGN: usize = 64;
const PREAMBLE_V1: usize = 10; // magic, version, u16 length
const PREAMBLE_V2: usize = 12; // magic, version, u32 length

/// Everything the dict literal of an npy header describes.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub descr: Dtype,
    pub fortran_order: bool,
    pub shape: Vec<usize>,
}

fn invalid<S: Into<String>>(msg: S) -> FixtureError {
    FixtureError::InvalidHeader(msg.into())
}

/// Raw text of the value stored under `key` in a python dict literal.
fn dict_value<'a>(dict: &'a str, key: &str) -> Result<&'a str> {
    let single = format!("'{}'", key);
    let double = format!("\"{}\"", key);
    let start = dict
        .find(&single)
        .map(|i| i + single.len())
        .or_else(|| dict.find(&double).map(|i| i + double.len()))
        .ok_or_else(|| invalid(format!("missing key {}", key)))?;
    let rest = dict[start..].trim_start();
    let rest = rest
        .strip_prefix(':')
        .ok_or_else(|| invalid(format!("no value for {}", key)))?
        .trim_start();
    let end = match rest.chars().next() {
        Some(q @ '\'') | Some(q @ '"') => rest[1..].find(q).map(|i| i + 2),
        Some('(') => rest.find(')').map(|i| i + 1),
        Some(_) => rest.find(|c: char| c == ',' || c == '}'),
        None => None,
    };
    let end = end.ok_or_else(|| invalid(format!("unterminated value for {}", key)))?;
    Ok(rest[..end].trim())
}

fn parse_shape(tuple: &str) -> Result<Vec<usize>> {
    let inner = tuple
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| invalid(format!("shape is not a tuple: {}", tuple)))?;
    inner
        .split(',')
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(|d| d.parse().map_err(|_| invalid(format!("bad dimension {}", d))))
        .collect()
}

impl Header {
    /// Product of the shape, `InvalidHeader` if it overflows.
    pub fn element_count(&self) -> Result<usize> {
        self.shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| invalid(format!("shape {} overflows", py_tuple(&self.shape))))
    }

    /// ```text
    /// {'descr': '<u4', 'fortran_order': False, 'shape': (2, 3), }
    /// ```
    pub fn to_dict_literal(&self) -> String {
        format!(
            "{{'descr': '{}', 'fortran_order': {}, 'shape': {}, }}",
            self.descr.descr(),
            py_bool(self.fortran_order),
            py_tuple(&self.shape)
        )
    }

    pub fn from_dict_literal(dict: &str) -> Result<Header> {
        let dict = dict.trim();
        if !dict.starts_with('{') || !dict.ends_with('}') {
            return Err(invalid(format!("not a dict literal: {}", dict)));
        }

        let descr = dict_value(dict, "descr")?;
        let descr = descr
            .get(1..descr.len().saturating_sub(1))
            .ok_or_else(|| invalid("empty descr"))?
            .parse()?;
        let fortran_order = match dict_value(dict, "fortran_order")? {
            "True" => true,
            "False" => false,
            other => return Err(invalid(format!("bad fortran_order {}", other))),
        };
        let shape = parse_shape(dict_value(dict, "shape")?)?;

        let header = Header { descr, fortran_order, shape };
        header.element_count()?;
        Ok(header)
    }
}

/// Writes magic, version and the padded dict. Falls back to version 2.0
/// when the dict does not fit a u16 length. Returns the bytes written.
pub fn write_header<W: Write + ?Sized>(wtr: &mut W, header: &Header) -> Result<usize> {
    let dict = header.to_dict_literal();
    let unpadded = dict.len() + 1; // trailing newline
    let v1 = PREAMBLE_V1 + unpadded + ARRAY_ALIGN <= u16::max_value() as usize;
    let preamble = if v1 { PREAMBLE_V1 } else { PREAMBLE_V2 };
    let padding = (ARRAY_ALIGN - (preamble + unpadded) % ARRAY_ALIGN) % ARRAY_ALIGN;
    let header_len = unpadded + padding;

    wtr.write_all(MAGIC_VALUE)?;
    if v1 {
        wtr.write_all(&[0x01, 0x00])?; // major version, minor version
        wtr.write_u16::<LE>(header_len as u16)?;
    } else {
        wtr.write_all(&[0x02, 0x00])?;
        wtr.write_u32::<LE>(header_len as u32)?;
    }
    wtr.write_all(dict.as_bytes())?;
    wtr.write_all(" ".repeat(padding).as_bytes())?;
    wtr.write_all(b"\n")?;
    Ok(preamble + header_len)
}

pub fn read_header<R: Read + ?Sized>(rdr: &mut R) -> Result<Header> {
    let mut magic = [0u8; 6];
    rdr.read_exact(&mut magic)?;
    if &magic[..] != MAGIC_VALUE {
        return Err(invalid("magic value mismatch"));
    }
    let major = rdr.read_u8()?;
    let _minor = rdr.read_u8()?;
    let header_len = match major {
        1 => rdr.read_u16::<LE>()? as usize,
        2 | 3 => rdr.read_u32::<LE>()? as usize,
        v => return Err(invalid(format!("unsupported version {}", v))),
    };
    let mut buf = vec![0u8; header_len];
    rdr.read_exact(&mut buf)?;
    let dict = String::from_utf8(buf).map_err(|_| invalid("header is not utf-8"))?;
    Header::from_dict_literal(&dict)
}
