//! Payload encoding and decoding, split across rayon workers for large inputs

use myft_core::{encode_payload_into, Payload, RECORD_SIZE};
use rayon::prelude::*;

use crate::{CodecConfig, CodecError, Result};

/// Encode records into a big-endian payload buffer
pub(crate) fn encode_payload(records: &[i32], config: &CodecConfig) -> Result<Vec<u8>> {
    let len = records
        .len()
        .checked_mul(RECORD_SIZE)
        .ok_or(CodecError::TooManyRecords(records.len()))?;
    let mut payload = vec![0u8; len];

    if config.use_parallel(records.len()) {
        let chunk_len = config.parallel_chunk_len(records.len());
        payload
            .par_chunks_mut(chunk_len * RECORD_SIZE)
            .zip(records.par_chunks(chunk_len))
            .try_for_each(|(out, chunk)| encode_payload_into(chunk, out))?;
    } else {
        encode_payload_into(records, &mut payload)?;
    }

    Ok(payload)
}

/// Decode a length-validated payload into records
pub(crate) fn decode_payload(payload: Payload<'_>, config: &CodecConfig) -> Vec<i32> {
    if !config.use_parallel(payload.len()) {
        return payload.iter().collect();
    }

    let mut records = Vec::with_capacity(payload.len());
    payload
        .as_bytes()
        .par_chunks_exact(RECORD_SIZE)
        .map(|group| i32::from_be_bytes([group[0], group[1], group[2], group[3]]))
        .collect_into_vec(&mut records);
    records
}
