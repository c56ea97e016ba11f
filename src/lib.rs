use std::{
    fmt,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
use huffman::{
    compression_ratio, count_frequencies, count_frequencies_parallel, encode, BitString,
    CodeTable, CompressionRatio, HuffmanTree,
};
use threadpool::ThreadPool;

mod cli;
pub mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub const SAMPLE_TEXT: &str = "I love data structures";

// below this many symbols a single thread counts faster
const PARALLEL_COUNT_THRESHOLD: usize = 4096;

pub struct Arguments {
    text: Option<String>,
    input_file: Option<PathBuf>,
    bits_per_symbol: usize,
    number_of_threads: usize,
    show_tree: bool,
}

pub struct Report {
    pub encoded: BitString,
    pub code_table: CodeTable<char>,
    pub ratio: CompressionRatio,
    pub tree_rendering: Option<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tree) = &self.tree_rendering {
            writeln!(f, "Huffman tree:\n{}", tree)?;
        }
        writeln!(f, "Encoded: {}", self.encoded)?;
        for (symbol, code) in self.code_table.iter() {
            writeln!(f, "{} : {}", symbol, code)?;
        }
        write!(f, "Compression Ratio: {}", self.ratio)
    }
}

fn read_input_file(file_path: &Path) -> Result<String> {
    let path = file_path.to_string_lossy().into_owned();
    let mut file =
        File::open(file_path).map_err(|e| Error::UnableToOpenInputFileForReading(path.clone(), e))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| Error::UnableToReadInputFile(path, e))?;
    Ok(text)
}

fn acquire_text(arguments: &Arguments) -> Result<String> {
    match (&arguments.text, &arguments.input_file) {
        (_, Some(file_path)) => read_input_file(file_path),
        (Some(text), None) => Ok(text.clone()),
        (None, None) => Ok(SAMPLE_TEXT.to_owned()),
    }
}

fn build_tree(symbols: &[char], number_of_threads: usize) -> Result<HuffmanTree<char>> {
    if symbols.is_empty() {
        return Err(Error::EmptyInput);
    }
    let frequencies = if number_of_threads > 1 && symbols.len() >= PARALLEL_COUNT_THRESHOLD {
        let threadpool = ThreadPool::new(number_of_threads);
        count_frequencies_parallel(symbols, &threadpool)?
    } else {
        count_frequencies(symbols)
    };
    HuffmanTree::from_frequencies(&frequencies)
}

pub fn huffman_coding(arguments: &Arguments) -> Result<Report> {
    let text = acquire_text(arguments)?;
    let symbols: Vec<char> = text.chars().collect();
    log::info!("Encoding {} symbols", symbols.len());

    let tree = build_tree(&symbols, arguments.number_of_threads)?;
    let code_table = CodeTable::from_tree(&tree);
    logger::log_code_table(code_table.iter());
    let encoded = encode(&symbols, &code_table)?;
    let ratio = compression_ratio(&symbols, &encoded, arguments.bits_per_symbol);
    log::info!(
        "Encoded into {} bits, compression ratio {}",
        encoded.len(),
        ratio
    );

    Ok(Report {
        encoded,
        code_table,
        ratio,
        tree_rendering: arguments.show_tree.then(|| tree.to_string()),
    })
}
