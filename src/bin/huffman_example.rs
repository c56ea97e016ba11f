use huffman_coding::error::Error;
use huffman_coding::huffman::{
    build_code_table, build_huffman_tree, compression_ratio, encode, DEFAULT_BITS_PER_SYMBOL,
};

fn main() -> Result<(), Error> {
    let sequence_to_encode: Vec<u32> = vec![3, 3, 3, 2, 1, 4, 5, 3, 3, 3, 0, 2, 2];

    let tree = build_huffman_tree(&sequence_to_encode)?;
    println!("huffman tree\n{}", tree);

    let code_table = build_code_table(&tree);
    for (symbol, code) in code_table.iter() {
        println!("{} : {}", symbol, code);
    }

    let encoded = encode(&sequence_to_encode, &code_table)?;
    println!("sequence to encode\n{:?}", sequence_to_encode);
    println!("encoded sequence\n{}", encoded);
    println!(
        "compression ratio\n{}",
        compression_ratio(&sequence_to_encode, &encoded, DEFAULT_BITS_PER_SYMBOL)
    );
    Ok(())
}
