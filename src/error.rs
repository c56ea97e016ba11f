use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyQueue,
    EmptyInput,
    UnknownSymbol(String),
    InvalidBit(char),
    CountingJobFailed(usize),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQueue => {
                write!(f, "Attempted to extract a node from an empty priority queue")
            }
            Self::EmptyInput => {
                write!(f, "Unable to build a huffman tree from an empty input")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {} not present in code table", symbol)
            }
            Self::InvalidBit(character) => {
                write!(
                    f,
                    "Character '{}' is not a valid bit. Expected '0' or '1'.",
                    character
                )
            }
            Self::CountingJobFailed(chunk_index) => {
                write!(f, "Counting symbols of chunk {} did not finish", chunk_index)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
