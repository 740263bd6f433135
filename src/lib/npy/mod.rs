//! The `.npy` array interchange format, version 1.0 (2.0 for oversized headers).
//!
//! File Spec:
//! Offset 00: ([u8; 6]) magic value \x93NUMPY
//! Offset 06: (u8) major version
//! Offset 07: (u8) minor version
//! Offset 08: (u16 little endian) header length
//! Offset 10: ([u8; header length]) python dict literal, space padded and
//!            newline terminated so that the data starts on a 64 byte boundary
//! Offset .. : raw elements in the byte order of `descr`, laid out
//!            column-major when `fortran_order` is True

pub mod element;
pub mod file_format;
pub mod header;

pub use self::element::Element;
pub use self::file_format::{decode, encode, read_array, write_array};
pub use self::header::{read_header, write_header, Header};
