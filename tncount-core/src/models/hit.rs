use std::fmt::{self, Display};

///
/// A single observed insertion: a 1-based position on a chromosome.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Hit {
    pub chr: String,
    pub position: u32,
}

impl Hit {
    pub fn new(chr: impl Into<String>, position: u32) -> Self {
        Hit {
            chr: chr.into(),
            position,
        }
    }
}

impl Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chr, self.position)
    }
}
