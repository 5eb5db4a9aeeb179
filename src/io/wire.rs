//! Text and binary encodings of [`PointD`].
//!
//! Text: `<dimension> <c0> <c1> ...`, single spaces, each coordinate in
//! the number type's `Display` form.
//!
//! Binary: the dimension as a little-endian `u32`, then each coordinate in
//! the number type's fixed encoding, no separators.
//!
//! Decoders read every coordinate into a buffer they own and hand it to
//! the kernel's constructor by value, so a decoded point never refers back
//! into decoder state.

use crate::error::{CertumError, Result};
use crate::kernel::Kernel;
use crate::number::{Exact, Number};
use crate::primitives::PointD;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::io::{self, BufRead, Read, Write};
use std::str::FromStr;

/// Capacity reserved up front, whatever dimension a header announces.
const MAX_PREALLOCATED_COORDS: usize = 64;

/// A number type with a wire encoding.
pub trait WireNumber: Number + fmt::Display + FromStr {
    /// Writes the fixed binary encoding.
    fn write_binary<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Reads the fixed binary encoding. A short read is `UnexpectedEof`.
    fn read_binary<R: Read>(input: &mut R) -> io::Result<Self>;
}

macro_rules! impl_wire_float {
    ($t:ty) => {
        impl WireNumber for $t {
            #[inline]
            fn write_binary<W: Write>(&self, out: &mut W) -> io::Result<()> {
                out.write_all(&self.to_le_bytes())
            }

            #[inline]
            fn read_binary<R: Read>(input: &mut R) -> io::Result<Self> {
                let mut bytes = [0u8; std::mem::size_of::<$t>()];
                input.read_exact(&mut bytes)?;
                Ok(<$t>::from_le_bytes(bytes))
            }
        }
    };
}

impl_wire_float!(f32);
impl_wire_float!(f64);

/// Numerator then denominator, each a `u32` byte count followed by the
/// two's complement little-endian bytes.
impl WireNumber for Exact {
    fn write_binary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for part in [self.numer(), self.denom()] {
            let bytes = part.to_signed_bytes_le();
            let len = u32::try_from(bytes.len())
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "integer too large"))?;
            out.write_all(&len.to_le_bytes())?;
            out.write_all(&bytes)?;
        }
        Ok(())
    }

    fn read_binary<R: Read>(input: &mut R) -> io::Result<Self> {
        let numer = read_bigint(input)?;
        let denom = read_bigint(input)?;
        if denom.is_zero() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "zero denominator",
            ));
        }
        Ok(Exact::new(numer, denom))
    }
}

fn read_u32<R: Read>(input: &mut R) -> io::Result<u32> {
    let mut bytes = [0u8; 4];
    input.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

fn read_bigint<R: Read>(input: &mut R) -> io::Result<BigInt> {
    let len = read_u32(input)? as usize;
    let mut bytes = Vec::with_capacity(len.min(4096));
    input.by_ref().take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() != len {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(BigInt::from_signed_bytes_le(&bytes))
}

/// Writes the text encoding.
pub fn write_text<K, W>(point: &PointD<K>, out: &mut W) -> Result<()>
where
    K: Kernel,
    K::FT: fmt::Display,
    W: Write,
{
    write!(out, "{}", point)?;
    Ok(())
}

/// Writes the binary encoding.
pub fn write_binary<K, W>(point: &PointD<K>, out: &mut W) -> Result<()>
where
    K: Kernel,
    K::FT: WireNumber,
    W: Write,
{
    let dimension = u32::try_from(point.dimension()).map_err(|_| CertumError::Malformed {
        token: point.dimension().to_string(),
    })?;
    out.write_all(&dimension.to_le_bytes())?;
    for coord in point {
        coord.write_binary(out)?;
    }
    Ok(())
}

/// Next whitespace-delimited token, or `None` at end of input.
fn next_token<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            used += 1;
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    continue;
                }
                complete = true;
                break;
            }
            token.push(byte);
        }
        input.consume(used);
        if complete {
            break;
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|err| CertumError::Malformed {
            token: String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
}

fn parse_token<T: FromStr>(token: String) -> Result<T> {
    token
        .parse()
        .map_err(|_| CertumError::Malformed { token })
}

/// Reads one point in the text encoding.
///
/// Ending before the dimension is `TruncatedDimension`; ending part way
/// through the coordinates is `TruncatedCoordinates`.
pub fn read_text<K, R>(input: &mut R) -> Result<PointD<K>>
where
    K: Kernel,
    K::FT: WireNumber,
    R: BufRead,
{
    let dimension: usize = match next_token(input)? {
        Some(token) => parse_token(token)?,
        None => return Err(CertumError::TruncatedDimension),
    };
    let mut coords = Vec::with_capacity(dimension.min(MAX_PREALLOCATED_COORDS));
    for read in 0..dimension {
        match next_token(input)? {
            Some(token) => coords.push(parse_token::<K::FT>(token)?),
            None => {
                return Err(CertumError::TruncatedCoordinates {
                    expected: dimension,
                    read,
                })
            }
        }
    }
    PointD::new(coords)
}

/// Reads one point in the binary encoding.
pub fn read_binary<K, R>(input: &mut R) -> Result<PointD<K>>
where
    K: Kernel,
    K::FT: WireNumber,
    R: Read,
{
    let dimension = match read_u32(input) {
        Ok(dimension) => dimension as usize,
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            return Err(CertumError::TruncatedDimension)
        }
        Err(err) => return Err(err.into()),
    };
    let mut coords = Vec::with_capacity(dimension.min(MAX_PREALLOCATED_COORDS));
    for read in 0..dimension {
        match K::FT::read_binary(input) {
            Ok(coord) => coords.push(coord),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(CertumError::TruncatedCoordinates {
                    expected: dimension,
                    read,
                })
            }
            Err(err) => return Err(err.into()),
        }
    }
    PointD::new(coords)
}

impl<K: Kernel> fmt::Display for PointD<K>
where
    K::FT: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension())?;
        for coord in self {
            write!(f, " {}", coord)?;
        }
        Ok(())
    }
}

impl<K: Kernel> FromStr for PointD<K>
where
    K::FT: WireNumber,
{
    type Err = CertumError;

    /// Parses exactly one point; trailing tokens are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let mut input = s.as_bytes();
        let point = read_text(&mut input)?;
        match next_token(&mut input)? {
            None => Ok(point),
            Some(token) => Err(CertumError::Malformed { token }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{Cartesian, Const, Dynamic, FilteredCartesian};
    use proptest::prelude::*;

    type Dyn = Cartesian<f64, Dynamic>;
    type DynExact = Cartesian<Exact, Dynamic>;

    fn text<K: Kernel>(point: &PointD<K>) -> String
    where
        K::FT: fmt::Display,
    {
        let mut out = Vec::new();
        write_text(point, &mut out).expect("in-memory write");
        String::from_utf8(out).expect("ascii")
    }

    fn binary<K: Kernel>(point: &PointD<K>) -> Vec<u8>
    where
        K::FT: WireNumber,
    {
        let mut out = Vec::new();
        write_binary(point, &mut out).expect("in-memory write");
        out
    }

    #[test]
    fn test_text_layout() {
        let p = PointD::<Dyn>::new(vec![1.5, -2.0, 0.0]).expect("3d");
        assert_eq!(text(&p), "3 1.5 -2 0");
        let origin = PointD::<Dyn>::origin_in(0).expect("0d");
        assert_eq!(text(&origin), "0");
    }

    #[test]
    fn test_exact_text_uses_fractions() {
        let p = PointD::<DynExact>::new(vec![Exact::from_f64(0.375), Exact::from_f64(4.0)])
            .expect("2d");
        assert_eq!(p.to_string(), "2 3/8 4");
        assert_eq!("2 3/8 4".parse::<PointD<DynExact>>(), Ok(p));
    }

    #[test]
    fn test_binary_layout() {
        let p = PointD::<Dyn>::new(vec![1.0]).expect("1d");
        let bytes = binary(&p);
        assert_eq!(&bytes[..4], &1u32.to_le_bytes());
        assert_eq!(&bytes[4..], &1.0f64.to_le_bytes());
    }

    #[test]
    fn test_text_tolerates_extra_whitespace() {
        let mut input = "  2\n 1.25\t-3 ".as_bytes();
        let p: PointD<Dyn> = read_text(&mut input).expect("valid");
        assert_eq!(p, PointD::new(vec![1.25, -3.0]).expect("2d"));
    }

    #[test]
    fn test_consecutive_points_in_one_stream() {
        let mut input = "1 4 2 5 6".as_bytes();
        let a: PointD<Dyn> = read_text(&mut input).expect("first");
        let b: PointD<Dyn> = read_text(&mut input).expect("second");
        assert_eq!(a.dimension(), 1);
        assert_eq!(b.coordinate(1), Ok(6.0));
        assert_eq!(
            read_text::<Dyn, _>(&mut input).unwrap_err(),
            CertumError::TruncatedDimension
        );
    }

    #[test]
    fn test_truncated_text() {
        assert_eq!(
            read_text::<Dyn, _>(&mut "".as_bytes()).unwrap_err(),
            CertumError::TruncatedDimension
        );
        assert_eq!(
            read_text::<Dyn, _>(&mut "3 1.0 2.0".as_bytes()).unwrap_err(),
            CertumError::TruncatedCoordinates {
                expected: 3,
                read: 2
            }
        );
    }

    #[test]
    fn test_truncated_binary() {
        let p = PointD::<Dyn>::new(vec![1.0, 2.0, 3.0]).expect("3d");
        let bytes = binary(&p);
        assert_eq!(
            read_binary::<Dyn, _>(&mut &bytes[..2]).unwrap_err(),
            CertumError::TruncatedDimension
        );
        assert_eq!(
            read_binary::<Dyn, _>(&mut &bytes[..bytes.len() - 3]).unwrap_err(),
            CertumError::TruncatedCoordinates {
                expected: 3,
                read: 2
            }
        );
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(
            read_text::<Dyn, _>(&mut "2 1.0 abc".as_bytes()).unwrap_err(),
            CertumError::Malformed {
                token: "abc".to_string()
            }
        );
        assert_eq!(
            "1 2 3".parse::<PointD<Dyn>>().unwrap_err(),
            CertumError::Malformed {
                token: "3".to_string()
            }
        );
    }

    #[test]
    fn test_decoded_dimension_is_checked_by_kernel() {
        assert_eq!(
            "3 1 2 3".parse::<PointD<FilteredCartesian<Const<2>>>>().unwrap_err(),
            CertumError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_exact_binary_keeps_large_values() {
        let huge = Exact::new(BigInt::from(3) << 200usize, BigInt::from(7));
        let p = PointD::<DynExact>::new(vec![huge, -Exact::from_f64(0.5)]).expect("2d");
        let decoded: PointD<DynExact> = read_binary(&mut binary(&p).as_slice()).expect("valid");
        assert_eq!(decoded, p);
    }

    proptest! {
        #[test]
        fn prop_round_trip_doubles(coords in prop::collection::vec(-1e12f64..1e12, 0..=8)) {
            let p = PointD::<Dyn>::new(coords).expect("dynamic");
            let from_text: PointD<Dyn> = text(&p).parse().expect("text");
            let from_binary: PointD<Dyn> =
                read_binary(&mut binary(&p).as_slice()).expect("binary");
            prop_assert_eq!(&from_text, &p);
            prop_assert_eq!(&from_binary, &p);
        }

        #[test]
        fn prop_round_trip_exact(
            coords in prop::collection::vec((-1000i64..1000, 1i64..1000), 0..=8),
        ) {
            let coords: Vec<Exact> = coords
                .into_iter()
                .map(|(n, d)| Exact::new(n.into(), d.into()))
                .collect();
            let p = PointD::<DynExact>::new(coords).expect("dynamic");
            let from_text: PointD<DynExact> = text(&p).parse().expect("text");
            let from_binary: PointD<DynExact> =
                read_binary(&mut binary(&p).as_slice()).expect("binary");
            prop_assert_eq!(&from_text, &p);
            prop_assert_eq!(&from_binary, &p);
        }
    }
}
