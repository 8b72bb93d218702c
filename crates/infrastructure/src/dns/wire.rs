//! Fixed layout of the DNS messages handled by this server.

/// Size of the message header; the question always starts here.
pub const HEADER_LEN: usize = 12;

/// Type and class following the question name.
pub const QUESTION_FIXED_LEN: usize = 4;

pub const CLASS_IN: u16 = 0x0001;

/// Top two bits of a length byte that mark a compression pointer.
pub const POINTER_TAG: u16 = 0xC000;

/// Pointer from every answer back to the question name.
pub const QUESTION_NAME_POINTER: u16 = POINTER_TAG | HEADER_LEN as u16;

pub const FLAG_QR: u8 = 0x80;
pub const OPCODE_MASK: u8 = 0x78;
pub const FLAG_AA: u8 = 0x04;
pub const FLAG_TC: u8 = 0x02;
pub const FLAG_RD: u8 = 0x01;
pub const FLAG_RA: u8 = 0x80;
pub const RCODE_MASK: u8 = 0x0F;

/// The two flag bytes of a response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseFlags([u8; 2]);

impl ResponseFlags {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(self) -> [u8; 2] {
        self.0
    }

    pub fn is_response(&self) -> bool {
        self.0[0] & FLAG_QR != 0
    }

    /// Opcode value (0 = QUERY).
    pub fn opcode(&self) -> u8 {
        (self.0[0] & OPCODE_MASK) >> 3
    }

    pub fn is_authoritative(&self) -> bool {
        self.0[0] & FLAG_AA != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.0[0] & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.0[0] & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.0[1] & FLAG_RA != 0
    }

    pub fn rcode(&self) -> u8 {
        self.0[1] & RCODE_MASK
    }
}
