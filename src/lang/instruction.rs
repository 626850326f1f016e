const EOF_OPERATION: &str = "EOF";

/// ## A single GASM instruction
///
/// The operation keeps the case it was written in; lookups lower-case it.

#[derive(Debug, Clone)]
pub struct Instruction {
    operation: String,
    params: Vec<String>,
}

impl Instruction {
    pub fn new<S: Into<String>>(operation: S, params: Vec<String>) -> Instruction {
        Instruction {
            operation: operation.into(),
            params,
        }
    }

    /// The sentinel produced once the source is exhausted.
    pub fn eof() -> Instruction {
        Instruction::new(EOF_OPERATION, vec![])
    }

    pub fn is_eof(&self) -> bool {
        self.operation == EOF_OPERATION
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn is(&self, operation: &str) -> bool {
        self.operation.eq_ignore_ascii_case(operation)
    }
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Instruction) -> bool {
        self.operation == other.operation && self.params == other.params
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.operation)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        Ok(())
    }
}
