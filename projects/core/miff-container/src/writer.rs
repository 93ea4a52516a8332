use crate::constants::{CONTAINER_HEADER_SIZE, MIFF_MAGIC, RECORD_HEADER_SIZE, RECORD_METADATA_SIZE};
use crate::container::Endianness;
use crate::error::{ContainerError, ContainerResult};
use crate::tag::RecordTag;

/// Builds a MIFF container in memory.
///
/// Record headers and the container size are written big-endian; record bodies use
/// the endianness given to [`MiffWriter::new`].
#[derive(Debug, Clone)]
pub struct MiffWriter {
    endianness: Endianness,
    buffer: Vec<u8>,
}

impl MiffWriter {
    pub fn new(endianness: Endianness) -> Self {
        let mut buffer = Vec::with_capacity(CONTAINER_HEADER_SIZE);
        buffer.extend_from_slice(&MIFF_MAGIC);
        // Patched by `finish`.
        buffer.extend_from_slice(&[0; 4]);
        buffer.extend_from_slice(&endianness.tag());
        Self { endianness, buffer }
    }

    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Appends a record with the given metadata, names and payload.
    ///
    /// Names are NUL padded to an even length with at least one terminator. An empty
    /// name is stored as zero bytes.
    pub fn push_record(
        &mut self,
        tag: RecordTag,
        metadata: [f32; 2],
        name: &str,
        aux_name: &str,
        payload: &[u8],
    ) -> ContainerResult<&mut Self> {
        let name = padded_name(name);
        let aux_name = padded_name(aux_name);
        let e = self.endianness;

        let mut body =
            Vec::with_capacity(RECORD_METADATA_SIZE + name.len() + aux_name.len() + payload.len());
        body.extend_from_slice(&e.f32_bytes(metadata[0]));
        body.extend_from_slice(&e.f32_bytes(metadata[1]));
        body.extend_from_slice(&e.u32_bytes(length_u32(tag, name.len())?));
        body.extend_from_slice(&name);
        body.extend_from_slice(&e.u32_bytes(length_u32(tag, aux_name.len())?));
        body.extend_from_slice(&aux_name);
        body.extend_from_slice(payload);

        self.push_raw_record(tag, &body)
    }

    /// Appends a record whose body is written verbatim.
    ///
    /// Nothing checks that `body` is a well-formed record body, which makes this
    /// useful for producing corrupt containers.
    pub fn push_raw_record(&mut self, tag: RecordTag, body: &[u8]) -> ContainerResult<&mut Self> {
        let length = length_u32(tag, body.len())?;
        length_u32(tag, self.buffer.len() + RECORD_HEADER_SIZE + body.len())?;

        self.buffer.extend_from_slice(tag.as_bytes());
        self.buffer.extend_from_slice(&length.to_be_bytes());
        self.buffer.extend_from_slice(body);
        Ok(self)
    }

    /// Patches the declared size and returns the container bytes.
    pub fn finish(mut self) -> Vec<u8> {
        // push_raw_record keeps the total within u32.
        let size = self.buffer.len() as u32;
        self.buffer[4..8].copy_from_slice(&size.to_be_bytes());
        self.buffer
    }
}

fn length_u32(tag: RecordTag, length: usize) -> ContainerResult<u32> {
    u32::try_from(length).map_err(|_| ContainerError::RecordTooLarge { tag, length })
}

fn padded_name(name: &str) -> Vec<u8> {
    if name.is_empty() {
        return Vec::new();
    }

    let mut bytes = name.as_bytes().to_vec();
    bytes.push(0);
    if bytes.len() % 2 != 0 {
        bytes.push(0);
    }
    bytes
}
