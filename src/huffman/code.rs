use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::tree::{HuffmanTree, Node};
use super::Symbol;
use crate::error::Error;

/// Growable sequence of bits, printed as `0`/`1` characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(&self.bits)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::InvalidBit(other)),
            })
            .collect::<Result<Vec<bool>, Error>>()
            .map(|bits| BitString { bits })
    }
}

/// Mapping from symbol to its code, kept in leaf visiting order.
#[derive(Clone, Debug)]
pub struct CodeTable<S> {
    positions: HashMap<S, usize>,
    entries: Vec<(S, BitString)>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walks the tree depth first, left before right. `0` marks a left
    /// edge and `1` a right edge.
    pub fn from_tree(tree: &HuffmanTree<S>) -> CodeTable<S> {
        let mut table = CodeTable {
            positions: HashMap::new(),
            entries: Vec::new(),
        };
        let mut path = BitString::with_capacity(tree.depth());
        // (node, path length on arrival, edge bit taken to reach it)
        let mut stack: Vec<(&Node<S>, usize, Option<bool>)> = vec![(tree.root(), 0, None)];

        while let Some((node, depth, edge)) = stack.pop() {
            path.truncate(depth);
            if let Some(bit) = edge {
                path.push(bit);
            }
            match node {
                Node::Leaf { symbol, .. } => table.insert(symbol.clone(), path.clone()),
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), path.len(), Some(true)));
                    stack.push((left.as_ref(), path.len(), Some(false)));
                }
            }
        }
        log::debug!("Derived code table with {} entries", table.len());
        table
    }

    fn insert(&mut self, symbol: S, code: BitString) {
        self.positions.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, code));
    }

    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.positions
            .get(symbol)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.positions.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> {
        self.entries.iter().map(|(symbol, code)| (symbol, code))
    }

    pub fn is_prefix_free(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, (_, code))| {
            self.entries
                .iter()
                .enumerate()
                .all(|(j, (_, other))| i == j || !code.is_prefix_of(other))
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{BitString, CodeTable};
    use crate::error::Error;
    use crate::huffman::{HuffmanTree, SymbolFrequency};

    fn create_code_table(text: &str) -> CodeTable<char> {
        let symbols: Vec<char> = text.chars().collect();
        let tree = HuffmanTree::new(&symbols).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_bit_string_display_and_parse() -> Result<(), Error> {
        let bits: BitString = "010011".parse()?;
        assert_eq!(bits.len(), 6);
        assert_eq!(bits.to_string(), "010011");
        assert_eq!(
            bits.iter().collect::<Vec<bool>>(),
            vec![false, true, false, false, true, true]
        );
        Ok(())
    }

    #[test]
    fn test_bit_string_parse_rejects_other_characters() {
        match "0120".parse::<BitString>() {
            Err(Error::InvalidBit('2')) => (),
            _ => panic!("Parsing must fail on the first non binary character"),
        }
    }

    #[test]
    fn test_bit_string_prefix() {
        let short: BitString = "10".parse().unwrap();
        let long: BitString = "1011".parse().unwrap();
        let other: BitString = "0011".parse().unwrap();
        assert!(short.is_prefix_of(&long));
        assert!(!long.is_prefix_of(&short));
        assert!(!short.is_prefix_of(&other));
        assert!(BitString::new().is_prefix_of(&short));
    }

    #[test]
    fn test_two_symbols_get_single_bit_codes() {
        let table = create_code_table("abb");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&'a').unwrap().to_string(), "0");
        assert_eq!(table.get(&'b').unwrap().to_string(), "1");
    }

    #[test]
    fn test_single_symbol_maps_to_empty_code() {
        let table = create_code_table("aaaa");
        assert_eq!(table.len(), 1);
        assert!(table.get(&'a').unwrap().is_empty());
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_every_distinct_symbol_has_exactly_one_entry() {
        let text = "I love data structures";
        let table = create_code_table(text);
        let distinct: HashSet<char> = text.chars().collect();
        assert_eq!(table.len(), distinct.len());
        for symbol in distinct {
            assert!(table.contains(&symbol), "Symbol {:?} has no code", symbol);
        }
        assert!(table.get(&'z').is_none());
    }

    #[test]
    fn test_code_table_is_prefix_free() {
        for text in ["I love data structures", "abracadabra", "mississippi river", "ab"] {
            let table = create_code_table(text);
            assert!(table.is_prefix_free(), "Code table of {:?} not prefix free", text);
        }
    }

    #[test]
    fn test_code_lengths_follow_tree_depths() {
        let frequencies =
            [(1u8, 17), (2, 3), (3, 12), (4, 3), (5, 18), (6, 12), (7, 13)].map(SymbolFrequency::from);
        let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();
        let table = CodeTable::from_tree(&tree);
        let expected_codes = [
            (1, "00"),
            (5, "01"),
            (2, "1000"),
            (4, "1001"),
            (3, "101"),
            (6, "110"),
            (7, "111"),
        ];
        for (symbol, code) in expected_codes {
            assert_eq!(
                table.get(&symbol).unwrap().to_string(),
                code,
                "Code of symbol {} does not match",
                symbol
            );
        }
        let visit_order: Vec<u8> = table.iter().map(|(&symbol, _)| symbol).collect();
        assert_eq!(visit_order, vec![1, 5, 2, 4, 3, 6, 7]);
    }

    #[test]
    fn test_repeated_symbol_in_frequencies_gets_one_code() {
        let frequencies = [('a', 1), ('b', 1), ('a', 5)].map(SymbolFrequency::from);
        let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.len(), 2);
        let codes: Vec<(char, String)> = table
            .iter()
            .map(|(&symbol, code)| (symbol, code.to_string()))
            .collect();
        assert_eq!(
            codes,
            vec![('b', "0".to_string()), ('a', "1".to_string())]
        );
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_prefix_free_detects_clash() {
        let mut table = create_code_table("ab");
        table.insert('c', "0".parse().unwrap());
        assert!(!table.is_prefix_free());
    }
}
