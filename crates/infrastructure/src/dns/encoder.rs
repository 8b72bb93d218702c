use super::wire::{ResponseFlags, CLASS_IN, HEADER_LEN, QUESTION_NAME_POINTER};
use authdns_domain::dns_name::MAX_LABEL_LEN;
use authdns_domain::{DomainName, QueryType, Record};

/// Builds the 12-byte response header. The question count is always 1 and
/// the authority and additional counts are always 0.
pub fn encode_header(
    transaction_id: u16,
    flags: ResponseFlags,
    answer_count: u16,
) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    buf[0..2].copy_from_slice(&transaction_id.to_be_bytes());
    buf[2..4].copy_from_slice(&flags.to_bytes());
    buf[4..6].copy_from_slice(&1u16.to_be_bytes());
    buf[6..8].copy_from_slice(&answer_count.to_be_bytes());
    buf
}

/// Re-serializes the question section.
///
/// Each `char` of a label is written as its low byte. The type code is only
/// written for a supported type; with `None` the section is the name
/// followed directly by the class.
pub fn encode_question(name: &DomainName, query_type: Option<QueryType>) -> Vec<u8> {
    let name_len: usize = name.labels().iter().map(|l| l.len() + 1).sum();
    let mut buf = Vec::with_capacity(name_len + 5);
    write_question(&mut buf, name, query_type);
    buf
}

pub(crate) fn write_question(
    buf: &mut Vec<u8>,
    name: &DomainName,
    query_type: Option<QueryType>,
) {
    write_name(buf, name);
    if let Some(query_type) = query_type {
        buf.extend_from_slice(&query_type.code().to_be_bytes());
    }
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());
}

/// Labels longer than 63 characters are cut to 63.
fn write_name(buf: &mut Vec<u8>, name: &DomainName) {
    for label in name.labels() {
        let len_pos = buf.len();
        buf.push(0);
        let mut len = 0u8;
        for c in label.chars().take(MAX_LABEL_LEN) {
            buf.push(c as u8);
            len += 1;
        }
        buf[len_pos] = len;
    }
    buf.push(0);
}

/// Serializes one answer record.
///
/// The owner name is always a pointer to the question name. RDATA follows
/// the TTL directly; its length is implied by the record type.
pub fn encode_record(record: &Record) -> Vec<u8> {
    let mut buf = Vec::with_capacity(14);
    write_record(&mut buf, record);
    buf
}

pub(crate) fn write_record(buf: &mut Vec<u8>, record: &Record) {
    buf.extend_from_slice(&QUESTION_NAME_POINTER.to_be_bytes());
    buf.extend_from_slice(&record.query_type().code().to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());
    buf.extend_from_slice(&record.ttl().to_be_bytes());
    match record {
        Record::Address { address, .. } => buf.extend_from_slice(&address.octets()),
    }
}
