//! Element type descriptors in the numpy type-string notation.
//!
//! A descriptor is `<marker><kind><width>`, e.g. `<u4`, `>f8` or `|i1`.
//! The marker is optional and defaults to the host byte order.

use std::fmt;
use std::str::FromStr;

use crate::error::{FixtureError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Unsigned,
    Signed,
    Float,
    Bool,
    Complex,
}

impl Kind {
    pub fn code(self) -> char {
        match self {
            Kind::Unsigned => 'u',
            Kind::Signed => 'i',
            Kind::Float => 'f',
            Kind::Bool => 'b',
            Kind::Complex => 'c',
        }
    }

    fn from_code(c: char) -> Option<Kind> {
        match c {
            'u' => Some(Kind::Unsigned),
            'i' => Some(Kind::Signed),
            'f' => Some(Kind::Float),
            'b' => Some(Kind::Bool),
            'c' => Some(Kind::Complex),
            _ => None,
        }
    }

    fn valid_widths(self) -> &'static [usize] {
        match self {
            Kind::Unsigned | Kind::Signed => &[1, 2, 4, 8],
            Kind::Float => &[4, 8],
            Kind::Bool => &[1],
            Kind::Complex => &[8, 16],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
    /// single byte elements have no byte order
    NotApplicable,
}

impl Endian {
    pub fn native() -> Endian {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    pub fn marker(self) -> char {
        match self {
            Endian::Little => '<',
            Endian::Big => '>',
            Endian::NotApplicable => '|',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dtype {
    pub kind: Kind,
    pub width: usize,
    pub endian: Endian,
}

impl Dtype {
    pub fn new(kind: Kind, width: usize, endian: Endian) -> Result<Dtype> {
        if !kind.valid_widths().contains(&width) {
            return Err(FixtureError::UnsupportedDtype(format!("{}{}", kind.code(), width)));
        }
        let endian = match (width, endian) {
            (1, _) => Endian::NotApplicable,
            (_, Endian::NotApplicable) => Endian::native(),
            (_, e) => e,
        };
        Ok(Dtype { kind, width, endian })
    }

    /// Short catalog key without byte order, e.g. `u4`.
    pub fn key(&self) -> String {
        format!("{}{}", self.kind.code(), self.width)
    }

    /// Type string as stored in the `descr` field of an npy header.
    pub fn descr(&self) -> String {
        format!("{}{}", self.endian.marker(), self.key())
    }

    pub fn is_native(&self) -> bool {
        self.endian == Endian::NotApplicable || self.endian == Endian::native()
    }

    /// The numpy name (`uint32`, `float64`, ...) of this kind and width.
    pub fn type_name(&self) -> String {
        let bits = self.width * 8;
        match self.kind {
            Kind::Unsigned => format!("uint{}", bits),
            Kind::Signed => format!("int{}", bits),
            Kind::Float => format!("float{}", bits),
            Kind::Bool => "bool".to_owned(),
            Kind::Complex => format!("complex{}", bits),
        }
    }
}

/// Native types print by name, byte-swapped types by type string.
impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_native() {
            write!(f, "{}", self.type_name())
        } else {
            write!(f, "{}", self.descr())
        }
    }
}

impl FromStr for Dtype {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Dtype> {
        let unsupported = || FixtureError::UnsupportedDtype(s.to_owned());
        let (endian, rest) = match s.chars().next() {
            Some('<') => (Endian::Little, &s[1..]),
            Some('>') => (Endian::Big, &s[1..]),
            Some('|') | Some('=') => (Endian::NotApplicable, &s[1..]),
            _ => (Endian::NotApplicable, s),
        };
        let kind = rest.chars().next().and_then(Kind::from_code).ok_or_else(unsupported)?;
        let width: usize = rest[1..].parse().map_err(|_| unsupported())?;
        Dtype::new(kind, width, endian).map_err(|_| unsupported())
    }
}
