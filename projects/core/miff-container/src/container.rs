//! Container header parsing and the record walk.

use crate::constants::*;
use crate::error::{ContainerError, ContainerResult, CorruptRecordReason};
use crate::record::Record;
use crate::tag::RecordTag;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::debug;

/// Byte order of the metadata fields inside each record body.
///
/// The container header and record headers are always big-endian; only the
/// record bodies follow this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// `Litl` selects little-endian. Every other tag means big-endian.
    #[inline]
    pub fn from_tag(tag: [u8; 4]) -> Self {
        if tag == LITTLE_ENDIAN_TAG {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// The tag [`crate::MiffWriter`] emits for this byte order.
    #[inline]
    pub fn tag(self) -> [u8; 4] {
        match self {
            Endianness::Little => LITTLE_ENDIAN_TAG,
            Endianness::Big => BIG_ENDIAN_TAG,
        }
    }

    /// Reads a u32 from the first 4 bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than 4 bytes.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            Endianness::Little => LittleEndian::read_u32(bytes),
            Endianness::Big => BigEndian::read_u32(bytes),
        }
    }

    /// Reads an IEEE-754 f32 from the first 4 bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than 4 bytes.
    #[inline]
    pub fn read_f32(self, bytes: &[u8]) -> f32 {
        match self {
            Endianness::Little => LittleEndian::read_f32(bytes),
            Endianness::Big => BigEndian::read_f32(bytes),
        }
    }

    #[inline]
    pub fn u32_bytes(self, value: u32) -> [u8; 4] {
        let mut out = [0u8; 4];
        match self {
            Endianness::Little => LittleEndian::write_u32(&mut out, value),
            Endianness::Big => BigEndian::write_u32(&mut out, value),
        }
        out
    }

    #[inline]
    pub fn f32_bytes(self, value: f32) -> [u8; 4] {
        let mut out = [0u8; 4];
        match self {
            Endianness::Little => LittleEndian::write_f32(&mut out, value),
            Endianness::Big => BigEndian::write_f32(&mut out, value),
        }
        out
    }
}

/// The 12 byte header at the start of every container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Total container size, header included.
    pub declared_size: u32,
    pub endianness: Endianness,
    /// Raw endianness tag as stored in the file.
    pub endian_tag: [u8; 4],
}

/// Forward-only reader over the records of a MIFF container.
///
/// Yields records in file order. The iterator stops at the declared container size,
/// or after yielding the first error.
#[derive(Debug, Clone)]
pub struct MiffReader<'a> {
    data: &'a [u8],
    header: ContainerHeader,
    offset: usize,
    failed: bool,
}

impl<'a> MiffReader<'a> {
    /// Validates the container header and positions the reader at the first record.
    pub fn new(data: &'a [u8]) -> ContainerResult<Self> {
        if data.len() < CONTAINER_HEADER_SIZE {
            return Err(ContainerError::TruncatedInput {
                offset: 0,
                required: CONTAINER_HEADER_SIZE,
                available: data.len(),
            });
        }

        let mut magic = [0u8; 4];
        magic.copy_from_slice(&data[..4]);
        if magic != MIFF_MAGIC {
            return Err(ContainerError::Format { found: magic });
        }

        let declared_size = BigEndian::read_u32(&data[DECLARED_SIZE_OFFSET..]);
        let mut endian_tag = [0u8; 4];
        endian_tag.copy_from_slice(&data[ENDIAN_TAG_OFFSET..CONTAINER_HEADER_SIZE]);
        let endianness = Endianness::from_tag(endian_tag);

        debug!(
            declared_size,
            ?endianness,
            input_length = data.len(),
            "Opened MIFF container"
        );

        Ok(Self {
            data,
            header: ContainerHeader {
                declared_size,
                endianness,
                endian_tag,
            },
            offset: CONTAINER_HEADER_SIZE,
            failed: false,
        })
    }

    #[inline]
    pub fn header(&self) -> ContainerHeader {
        self.header
    }

    /// Offset of the next record header.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn truncated(&self, offset: usize, required: usize) -> ContainerError {
        ContainerError::TruncatedInput {
            offset,
            required,
            available: self.data.len().saturating_sub(offset),
        }
    }

    fn read_next(&mut self) -> ContainerResult<Record<'a>> {
        let start = self.offset;
        let header_end = start + RECORD_HEADER_SIZE;
        if header_end > self.data.len() {
            return Err(self.truncated(start, RECORD_HEADER_SIZE));
        }

        let mut tag = [0u8; 4];
        tag.copy_from_slice(&self.data[start..start + 4]);
        let tag = RecordTag::new(tag);
        let length = BigEndian::read_u32(&self.data[start + 4..header_end]);

        let end = header_end
            .checked_add(length as usize)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| self.truncated(header_end, length as usize))?;

        if end > self.header.declared_size as usize {
            return Err(ContainerError::CorruptRecord {
                tag,
                offset: start,
                reason: CorruptRecordReason::ExceedsDeclaredSize {
                    end,
                    declared_size: self.header.declared_size,
                },
            });
        }

        let record = Record::parse_body(
            tag,
            start,
            &self.data[header_end..end],
            self.header.endianness,
        )?;
        self.offset = end;

        debug!(
            %tag,
            offset = start,
            length,
            name = %record.name,
            aux_name = %record.aux_name,
            payload_length = record.payload.len(),
            "Read record"
        );
        Ok(record)
    }
}

impl<'a> Iterator for MiffReader<'a> {
    type Item = ContainerResult<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.header.declared_size as usize {
            return None;
        }

        let result = self.read_next();
        self.failed = result.is_err();
        Some(result)
    }
}

impl core::iter::FusedIterator for MiffReader<'_> {}

/// A fully read container.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<'a> {
    pub header: ContainerHeader,
    pub records: Vec<Record<'a>>,
}

/// Reads every record of a container, failing on the first container error.
pub fn read_container(data: &[u8]) -> ContainerResult<Container<'_>> {
    let reader = MiffReader::new(data)?;
    let header = reader.header();
    let records = reader.collect::<ContainerResult<Vec<_>>>()?;
    Ok(Container { header, records })
}
