use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::columnar::{self, SerializerOptions};
use crate::dense::DenseVector;
use crate::numeric::Numeric;
use crate::sparse::SparseVector;
use crate::vector::Vector;
use crate::{Result, VectorError};

/// Type discriminators stored in the envelope. The deserializer switches on
/// these exact strings; renaming either one breaks round-trips with existing
/// payloads.
pub const DENSE_VECTOR: &str = "DenseVector";
pub const SPARSE_VECTOR: &str = "SparseVector";

const ENVELOPE_MAGIC: &[u8; 4] = b"CVE\0";
const ENVELOPE_VERSION: u32 = 1;

/// Opaque columnar blob a vector's element stream was encoded into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedElements {
    pub data: Vec<u8>,
}

/// Self-describing envelope: the type name selects the element framing and
/// the concrete constructor on deserialization; the count carries the logical
/// length, which a sparse payload cannot recover from stored elements alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedVector {
    pub vector_type_name: String,
    pub count: usize,
    pub elements: SerializedElements,
}

impl<T: Numeric> DenseVector<T> {
    /// Encode the full value stream, zeros included, as a single column.
    pub fn serialize(&self, options: &SerializerOptions) -> Result<SerializedVector> {
        let mut data = Vec::new();
        let values = self.to_vec();
        columnar::write_values(&values, &mut data, options)?;
        Ok(SerializedVector {
            vector_type_name: DENSE_VECTOR.to_string(),
            count: self.len(),
            elements: SerializedElements { data },
        })
    }
}

impl<T: Numeric> SparseVector<T> {
    /// Encode only the stored elements as an (index, value) column pair.
    pub fn serialize(&self, options: &SerializerOptions) -> Result<SerializedVector> {
        let mut data = Vec::new();
        columnar::write_indexed(self.elements(), &mut data, options)?;
        Ok(SerializedVector {
            vector_type_name: SPARSE_VECTOR.to_string(),
            count: self.len(),
            elements: SerializedElements { data },
        })
    }
}

impl<T: Numeric> Vector<T> {
    pub fn serialize(&self, options: &SerializerOptions) -> Result<SerializedVector> {
        match self {
            Vector::Dense(v) => v.serialize(options),
            Vector::Sparse(v) => v.serialize(options),
        }
    }
}

impl SerializedVector {
    /// Reconstruct the concrete vector the payload was encoded from,
    /// dispatching purely on the stored type name. The sparse path
    /// re-establishes invariants defensively even for well-formed writers.
    pub fn deserialize<T: Numeric>(&self) -> Result<Vector<T>> {
        match self.vector_type_name.as_str() {
            DENSE_VECTOR => {
                let values = columnar::read_values::<T, _>(&mut self.elements.data.as_slice())?;
                Ok(Vector::Dense(DenseVector::new(values)))
            }
            SPARSE_VECTOR => {
                let elements = columnar::read_indexed::<T, _>(&mut self.elements.data.as_slice())?;
                Ok(Vector::Sparse(SparseVector::new(self.count, elements)?))
            }
            other => Err(VectorError::SerializationError(format!(
                "Unrecognized vector type name: '{}'",
                other
            ))),
        }
    }

    /// Persist the envelope with a byteorder-framed header. This is the
    /// blocking I/O boundary; the columnar blob itself is written as-is.
    pub fn to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(ENVELOPE_MAGIC)?;
        writer.write_u32::<LittleEndian>(ENVELOPE_VERSION)?;
        writer.write_u16::<LittleEndian>(self.vector_type_name.len() as u16)?;
        writer.write_all(self.vector_type_name.as_bytes())?;
        writer.write_u64::<LittleEndian>(self.count as u64)?;
        writer.write_u64::<LittleEndian>(self.elements.data.len() as u64)?;
        writer.write_all(&self.elements.data)?;
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != *ENVELOPE_MAGIC {
            return Err(VectorError::SerializationError(
                "Invalid serialized vector envelope".to_string(),
            ));
        }
        let version = reader.read_u32::<LittleEndian>()?;
        if version != ENVELOPE_VERSION {
            return Err(VectorError::SerializationError(format!(
                "Unsupported envelope version: {}",
                version
            )));
        }
        let name_len = reader.read_u16::<LittleEndian>()? as usize;
        let mut name_bytes = vec![0u8; name_len];
        reader.read_exact(&mut name_bytes)?;
        let vector_type_name = String::from_utf8(name_bytes)
            .map_err(|e| VectorError::SerializationError(e.to_string()))?;
        let count = reader.read_u64::<LittleEndian>()? as usize;
        let data_len = reader.read_u64::<LittleEndian>()? as usize;
        let mut data = vec![0u8; data_len];
        reader.read_exact(&mut data)?;
        Ok(Self {
            vector_type_name,
            count,
            elements: SerializedElements { data },
        })
    }
}
