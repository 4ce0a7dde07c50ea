use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::element::IndexedElement;
use crate::numeric::{ColumnData, ColumnType, Numeric};
use crate::{Result, VectorError};

pub const COLUMNAR_MAGIC: &[u8; 4] = b"CVF\0";
pub const COLUMNAR_VERSION: u32 = 1;

/// Elements per row group. Bounds how much column data is buffered in one
/// compressed block during write and read.
pub const DEFAULT_ROW_GROUP_SIZE: usize = 32 * 1024 * 1024;

pub const INDEX_COLUMN: &str = "index";
pub const VALUE_COLUMN: &str = "value";

/// Explicit serializer configuration, threaded as a parameter through every
/// write call. Compression choice is transparent to readers.
#[derive(Debug, Clone)]
pub struct SerializerOptions {
    pub row_group_size: usize,
    pub compression: Compression,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
            compression: Compression::best(),
        }
    }
}

fn serialization_error<E: std::fmt::Display>(error: E) -> VectorError {
    VectorError::SerializationError(error.to_string())
}

fn write_header<W: Write>(writer: &mut W, columns: &[(&str, ColumnType)]) -> Result<()> {
    writer.write_all(COLUMNAR_MAGIC)?;
    writer.write_u32::<LittleEndian>(COLUMNAR_VERSION)?;
    writer.write_u8(columns.len() as u8)?;
    for (name, column_type) in columns {
        writer.write_u16::<LittleEndian>(name.len() as u16)?;
        writer.write_all(name.as_bytes())?;
        writer.write_u8(column_type.code())?;
    }
    Ok(())
}

fn read_header<R: Read>(reader: &mut R) -> Result<Vec<(String, ColumnType)>> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != *COLUMNAR_MAGIC {
        return Err(VectorError::SerializationError(
            "Invalid columnar container format".to_string(),
        ));
    }
    let version = reader.read_u32::<LittleEndian>()?;
    if version != COLUMNAR_VERSION {
        return Err(VectorError::SerializationError(format!(
            "Unsupported columnar container version: {}",
            version
        )));
    }
    let column_count = reader.read_u8()?;
    let mut columns = Vec::with_capacity(column_count as usize);
    for _ in 0..column_count {
        let name_len = reader.read_u16::<LittleEndian>()? as usize;
        let mut name_bytes = vec![0u8; name_len];
        reader.read_exact(&mut name_bytes)?;
        let name = String::from_utf8(name_bytes).map_err(serialization_error)?;
        let column_type = ColumnType::from_code(reader.read_u8()?)?;
        columns.push((name, column_type));
    }
    Ok(columns)
}

fn write_column<S: Serialize + ?Sized, W: Write>(
    writer: &mut W,
    values: &S,
    compression: Compression,
) -> Result<()> {
    let raw = bincode::serialize(values).map_err(serialization_error)?;
    let mut encoder = GzEncoder::new(Vec::new(), compression);
    encoder.write_all(&raw)?;
    let compressed = encoder.finish()?;
    writer.write_u64::<LittleEndian>(compressed.len() as u64)?;
    writer.write_all(&compressed)?;
    Ok(())
}

fn read_column<R: Read>(reader: &mut R, column_type: ColumnType) -> Result<ColumnData> {
    let compressed_len = reader.read_u64::<LittleEndian>()? as usize;
    let mut compressed = vec![0u8; compressed_len];
    reader.read_exact(&mut compressed)?;
    let mut raw = Vec::new();
    GzDecoder::new(&compressed[..]).read_to_end(&mut raw)?;

    let column = match column_type {
        ColumnType::I32 => {
            ColumnData::I32(bincode::deserialize(&raw).map_err(serialization_error)?)
        }
        ColumnType::I64 => {
            ColumnData::I64(bincode::deserialize(&raw).map_err(serialization_error)?)
        }
        ColumnType::F32 => {
            ColumnData::F32(bincode::deserialize(&raw).map_err(serialization_error)?)
        }
        ColumnType::F64 => {
            ColumnData::F64(bincode::deserialize(&raw).map_err(serialization_error)?)
        }
        ColumnType::Decimal => {
            let values: Vec<Decimal> = bincode::deserialize(&raw).map_err(serialization_error)?;
            ColumnData::Decimal(values)
        }
    };
    Ok(column)
}

fn row_group_count(rows: usize, row_group_size: usize) -> u32 {
    if rows == 0 {
        0
    } else {
        ((rows + row_group_size - 1) / row_group_size) as u32
    }
}

/// Write a full value stream (zeros included) as a single column, chunked
/// into row groups.
pub fn write_values<T: Numeric, W: Write>(
    values: &[T],
    writer: &mut W,
    options: &SerializerOptions,
) -> Result<()> {
    write_header(writer, &[(VALUE_COLUMN, T::COLUMN_TYPE)])?;
    let groups = row_group_count(values.len(), options.row_group_size);
    writer.write_u32::<LittleEndian>(groups)?;
    tracing::trace!(rows = values.len(), groups, "writing value column");
    for chunk in values.chunks(options.row_group_size) {
        writer.write_u64::<LittleEndian>(chunk.len() as u64)?;
        write_column(writer, chunk, options.compression)?;
    }
    Ok(())
}

/// Read a single-column value stream, converting the stored column into the
/// declared element type (widening where the kinds allow it).
pub fn read_values<T: Numeric, R: Read>(reader: &mut R) -> Result<Vec<T>> {
    let columns = read_header(reader)?;
    if columns.len() != 1 || columns[0].0 != VALUE_COLUMN {
        return Err(VectorError::SerializationError(
            "Expected a single value column".to_string(),
        ));
    }
    let stored_type = columns[0].1;

    let groups = reader.read_u32::<LittleEndian>()?;
    let mut values = Vec::new();
    for _ in 0..groups {
        let rows = reader.read_u64::<LittleEndian>()? as usize;
        let column = read_column(reader, stored_type)?;
        if column.len() != rows {
            return Err(VectorError::SerializationError(format!(
                "Row group declared {} rows but column holds {}",
                rows,
                column.len()
            )));
        }
        values.extend(T::from_column(column)?);
    }
    Ok(values)
}

/// Write stored (non-zero) elements as an (index, value) column pair, chunked
/// into row groups. The stream is never densified.
pub fn write_indexed<T: Numeric, W: Write>(
    elements: &[IndexedElement<T>],
    writer: &mut W,
    options: &SerializerOptions,
) -> Result<()> {
    write_header(
        writer,
        &[(INDEX_COLUMN, ColumnType::I64), (VALUE_COLUMN, T::COLUMN_TYPE)],
    )?;
    let groups = row_group_count(elements.len(), options.row_group_size);
    writer.write_u32::<LittleEndian>(groups)?;
    tracing::trace!(rows = elements.len(), groups, "writing indexed columns");
    for chunk in elements.chunks(options.row_group_size) {
        writer.write_u64::<LittleEndian>(chunk.len() as u64)?;
        let indices: Vec<i64> = chunk.iter().map(|e| e.index).collect();
        let values: Vec<T> = chunk.iter().map(|e| e.value).collect();
        write_column(writer, &indices, options.compression)?;
        write_column(writer, &values, options.compression)?;
    }
    Ok(())
}

/// Read an (index, value) column pair back into indexed elements.
pub fn read_indexed<T: Numeric, R: Read>(reader: &mut R) -> Result<Vec<IndexedElement<T>>> {
    let columns = read_header(reader)?;
    if columns.len() != 2 || columns[0].0 != INDEX_COLUMN || columns[1].0 != VALUE_COLUMN {
        return Err(VectorError::SerializationError(
            "Expected an index column followed by a value column".to_string(),
        ));
    }
    if columns[0].1 != ColumnType::I64 {
        return Err(VectorError::SerializationError(
            "Index column must be i64".to_string(),
        ));
    }
    let stored_type = columns[1].1;

    let groups = reader.read_u32::<LittleEndian>()?;
    let mut elements = Vec::new();
    for _ in 0..groups {
        let rows = reader.read_u64::<LittleEndian>()? as usize;
        let indices = match read_column(reader, ColumnType::I64)? {
            ColumnData::I64(indices) => indices,
            _ => unreachable!("index column decoded with i64 type"),
        };
        let values: Vec<T> = T::from_column(read_column(reader, stored_type)?)?;
        if indices.len() != rows || values.len() != rows {
            return Err(VectorError::SerializationError(format!(
                "Row group declared {} rows but columns hold {} and {}",
                rows,
                indices.len(),
                values.len()
            )));
        }
        elements.extend(
            indices
                .into_iter()
                .zip(values)
                .map(|(index, value)| IndexedElement::new(index, value)),
        );
    }
    Ok(elements)
}
