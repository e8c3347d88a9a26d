use pyo3::exceptions::{PyEOFError, PyOverflowError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use pyo3::{Bound, PyErr, PyResult, Python};

use crate::{try_skip, Base128Error, Varint, ZigZag};

impl From<Base128Error> for PyErr {
    fn from(err: Base128Error) -> Self {
        match err {
            Base128Error::Overflow { .. } => PyOverflowError::new_err(err.to_string()),
            Base128Error::InsufficientInput { .. } => PyEOFError::new_err(err.to_string()),
            Base128Error::BufferTooSmall { .. } | Base128Error::InvalidArgument { .. } => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

fn encode<'py, T: Varint>(py: Python<'py>, value: T, min_bytes: usize) -> PyResult<Bound<'py, PyBytes>> {
    let mut buf = T::Buf::default();
    let len = value.write_min(buf.as_mut(), min_bytes)?;
    Ok(PyBytes::new(py, &buf.as_ref()[..len]))
}

macro_rules! py_codec {
    ($( $ty:ty => $encode:ident, $decode:ident, $required:ident ),* $(,)?) => {$(
        #[pyfunction]
        #[pyo3(signature = (value, min_bytes = 1))]
        fn $encode<'py>(py: Python<'py>, value: $ty, min_bytes: usize) -> PyResult<Bound<'py, PyBytes>> {
            encode(py, value, min_bytes)
        }

        #[pyfunction]
        fn $decode(source: &[u8]) -> PyResult<($ty, usize)> {
            Ok(<$ty as Varint>::read(source)?)
        }

        #[pyfunction]
        fn $required(value: $ty) -> usize {
            value.required_bytes()
        }
    )*};
}

py_codec!(
    u32 => encode_u32, decode_u32, required_bytes_u32,
    i32 => encode_i32, decode_i32, required_bytes_i32,
    u64 => encode_u64, decode_u64, required_bytes_u64,
    i64 => encode_i64, decode_i64, required_bytes_i64,
);

macro_rules! py_zigzag {
    ($( $ty:ty => $encode:ident, $decode:ident ),* $(,)?) => {$(
        #[pyfunction]
        #[pyo3(signature = (value, min_bytes = 1))]
        fn $encode<'py>(py: Python<'py>, value: $ty, min_bytes: usize) -> PyResult<Bound<'py, PyBytes>> {
            encode(py, ZigZag(value), min_bytes)
        }

        #[pyfunction]
        fn $decode(source: &[u8]) -> PyResult<($ty, usize)> {
            let (value, read) = ZigZag::<$ty>::read(source)?;
            Ok((value.into_inner(), read))
        }
    )*};
}

py_zigzag!(
    i32 => encode_i32_zigzag, decode_i32_zigzag,
    i64 => encode_i64_zigzag, decode_i64_zigzag,
);

/// Length of the varint at the start of `source`; raises `EOFError` when it is cut short.
#[pyfunction]
fn skip(source: &[u8]) -> PyResult<usize> {
    try_skip(source).ok_or_else(|| {
        Base128Error::InsufficientInput {
            available: source.len(),
        }
        .into()
    })
}

#[pymodule]
fn base128(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode_u32, m)?)?;
    m.add_function(wrap_pyfunction!(decode_u32, m)?)?;
    m.add_function(wrap_pyfunction!(required_bytes_u32, m)?)?;
    m.add_function(wrap_pyfunction!(encode_i32, m)?)?;
    m.add_function(wrap_pyfunction!(decode_i32, m)?)?;
    m.add_function(wrap_pyfunction!(required_bytes_i32, m)?)?;
    m.add_function(wrap_pyfunction!(encode_u64, m)?)?;
    m.add_function(wrap_pyfunction!(decode_u64, m)?)?;
    m.add_function(wrap_pyfunction!(required_bytes_u64, m)?)?;
    m.add_function(wrap_pyfunction!(encode_i64, m)?)?;
    m.add_function(wrap_pyfunction!(decode_i64, m)?)?;
    m.add_function(wrap_pyfunction!(required_bytes_i64, m)?)?;
    m.add_function(wrap_pyfunction!(encode_i32_zigzag, m)?)?;
    m.add_function(wrap_pyfunction!(decode_i32_zigzag, m)?)?;
    m.add_function(wrap_pyfunction!(encode_i64_zigzag, m)?)?;
    m.add_function(wrap_pyfunction!(decode_i64_zigzag, m)?)?;
    m.add_function(wrap_pyfunction!(skip, m)?)?;
    m.add("MAX_BYTES_32", crate::MAX_BYTES_32)?;
    m.add("MAX_BYTES_64", crate::MAX_BYTES_64)?;
    Ok(())
}
