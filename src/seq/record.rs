// A FastA record: the header (without the leading '>') and the raw sequence, with line breaks
// removed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: &str) -> Self {
        SeqRecord {
            header: String::from(header),
            sequence: String::new(),
        }
    }
}
