#![allow(dead_code)]

/// Builds raw request datagrams for tests.
pub struct QueryBuilder {
    id: u16,
    flags: [u8; 2],
    labels: Vec<Vec<u8>>,
    qtype: u16,
    qclass: u16,
}

impl QueryBuilder {
    pub fn new(domain: &str) -> Self {
        let labels = if domain.is_empty() {
            vec![]
        } else {
            domain.split('.').map(|l| l.as_bytes().to_vec()).collect()
        };
        Self {
            id: 0x1234,
            flags: [0x01, 0x00], // RD set
            labels,
            qtype: 1,
            qclass: 1,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: [u8; 2]) -> Self {
        self.flags = flags;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn qclass(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn raw_labels(mut self, labels: Vec<Vec<u8>>) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags);
        buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT = 1
        buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT = 0
        buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT = 0
        buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT = 0
        buf.extend_from_slice(&question_bytes(&self.labels));
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        buf
    }
}

/// Wire form of a name: length-prefixed labels and the root label.
pub fn question_bytes(labels: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in labels {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label);
    }
    buf.push(0x00);
    buf
}

pub fn name_bytes(domain: &str) -> Vec<u8> {
    let labels: Vec<Vec<u8>> = domain.split('.').map(|l| l.as_bytes().to_vec()).collect();
    question_bytes(&labels)
}
