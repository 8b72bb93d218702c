use super::wire::{
    ResponseFlags, FLAG_AA, FLAG_QR, FLAG_RA, HEADER_LEN, OPCODE_MASK, QUESTION_FIXED_LEN,
};
use authdns_domain::dns_name::MAX_LABEL_LEN;
use authdns_domain::{DnsQuestion, DomainError, DomainName};

/// A request reduced to the fields the response is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRequest {
    pub transaction_id: u16,
    pub flags: [u8; 2],
    pub question_count: u16,
    pub question: DnsQuestion,
    /// Byte offset in the request where the question section ends.
    pub question_end: usize,
}

/// Derives the response flags from the request flags.
///
/// Only the opcode is carried over. The response always claims authority,
/// advertises recursion and reports no error; RD and TC are left clear.
pub fn decode_flags(raw: [u8; 2]) -> ResponseFlags {
    let opcode = raw[0] & OPCODE_MASK;
    ResponseFlags::from_bytes([FLAG_QR | opcode | FLAG_AA, FLAG_RA])
}

/// Parses the question section starting at the first byte of `buf`.
///
/// Returns the name, the raw query type and the number of bytes consumed
/// (name, type and class). Zero bytes inside label content are dropped
/// rather than ending the name. The class is consumed but not checked.
///
/// Fails with `MalformedMessage` when:
///
/// * The name runs past the end of the buffer or has no terminator
/// * A length byte exceeds 63 (compression pointers included)
/// * A label consists of zero bytes only
/// * Fewer than four bytes of type and class follow the name
pub fn decode_question(buf: &[u8]) -> Result<(DomainName, u16, usize), DomainError> {
    let mut name = DomainName::default();
    let mut pos = 0;

    loop {
        let label_len = match buf.get(pos) {
            Some(&len) => len as usize,
            None => return Err(DomainError::malformed("question name has no terminator")),
        };
        pos += 1;

        if label_len == 0 {
            break;
        }
        if label_len > MAX_LABEL_LEN {
            return Err(DomainError::malformed(format!(
                "label length byte 0x{label_len:02X} at offset {} is not a plain label",
                pos - 1
            )));
        }

        let content = buf.get(pos..pos + label_len).ok_or_else(|| {
            DomainError::malformed(format!(
                "label of {label_len} bytes at offset {} runs past end of message",
                pos - 1
            ))
        })?;
        let label: String = content
            .iter()
            .filter(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect();
        if label.is_empty() {
            return Err(DomainError::malformed(format!(
                "label at offset {} holds only zero bytes",
                pos - 1
            )));
        }
        name.push_label(label);
        pos += label_len;
    }

    let fixed = buf
        .get(pos..pos + QUESTION_FIXED_LEN)
        .ok_or_else(|| DomainError::malformed("question type and class are truncated"))?;
    let qtype = u16::from_be_bytes([fixed[0], fixed[1]]);

    Ok((name, qtype, pos + QUESTION_FIXED_LEN))
}

/// Parses the header and the single question of a raw request.
pub fn decode_request(buf: &[u8]) -> Result<DecodedRequest, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::malformed(format!(
            "message of {} bytes is shorter than the header",
            buf.len()
        )));
    }

    let transaction_id = u16::from_be_bytes([buf[0], buf[1]]);
    let flags = [buf[2], buf[3]];
    let question_count = u16::from_be_bytes([buf[4], buf[5]]);

    let (name, qtype, consumed) = decode_question(&buf[HEADER_LEN..])?;

    Ok(DecodedRequest {
        transaction_id,
        flags,
        question_count,
        question: DnsQuestion::new(name, qtype),
        question_end: HEADER_LEN + consumed,
    })
}
