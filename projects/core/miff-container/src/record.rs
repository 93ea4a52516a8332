use crate::constants::{RECORD_HEADER_SIZE, RECORD_METADATA_SIZE};
use crate::container::Endianness;
use crate::error::{ContainerError, ContainerResult, CorruptRecordReason};
use crate::string::read_truncated_string;
use crate::tag::RecordTag;

/// A single tagged record borrowed from a container buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    /// Four character type tag.
    pub tag: RecordTag,
    /// Offset of the record header within the container.
    pub offset: usize,
    /// Length field from the record header. Excludes the 8 byte record header.
    pub declared_length: u32,
    /// The two metadata floats. Their meaning is not known.
    pub metadata: [f32; 2],
    /// Record name, truncated at the first non-printable byte.
    pub name: String,
    /// Secondary name, truncated the same way. Often empty.
    pub aux_name: String,
    /// Remaining body bytes after the names.
    pub payload: &'a [u8],
}

impl<'a> Record<'a> {
    /// Total bytes this record occupies, header included.
    #[inline]
    pub fn total_length(&self) -> usize {
        RECORD_HEADER_SIZE + self.declared_length as usize
    }

    /// Parses the body of a record whose header has already been read.
    ///
    /// `body` must be exactly `declared_length` bytes long.
    pub(crate) fn parse_body(
        tag: RecordTag,
        offset: usize,
        body: &'a [u8],
        endianness: Endianness,
    ) -> ContainerResult<Self> {
        let declared = body.len() as u32;
        let corrupt = |reason| ContainerError::CorruptRecord {
            tag,
            offset,
            reason,
        };

        if body.len() < RECORD_METADATA_SIZE {
            return Err(corrupt(CorruptRecordReason::MetadataTooShort {
                declared,
                required: RECORD_METADATA_SIZE,
            }));
        }

        let metadata = [endianness.read_f32(&body[0..4]), endianness.read_f32(&body[4..8])];

        // name_len sits at 8, the name follows, then aux_len and the aux name.
        let name_length = endianness.read_u32(&body[8..12]);
        let name_start = 12usize;
        let name_end = name_start
            .checked_add(name_length as usize)
            .filter(|&end| end <= body.len() - 4)
            .ok_or_else(|| {
                corrupt(CorruptRecordReason::NameOverrunsRecord {
                    declared,
                    name_length,
                })
            })?;

        let aux_length = endianness.read_u32(&body[name_end..name_end + 4]);
        let aux_start = name_end + 4;
        let negative = || {
            corrupt(CorruptRecordReason::NegativePayload {
                declared,
                name_length,
                aux_length,
            })
        };
        let aux_end = aux_start
            .checked_add(aux_length as usize)
            .filter(|&end| end <= body.len())
            .ok_or_else(negative)?;

        Ok(Self {
            tag,
            offset,
            declared_length: declared,
            metadata,
            name: read_truncated_string(&body[name_start..name_end]),
            aux_name: read_truncated_string(&body[aux_start..aux_end]),
            payload: &body[aux_end..],
        })
    }
}
