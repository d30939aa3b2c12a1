//! Huffman coding over in-memory symbol sequences.
//!
//! The pipeline runs in three steps: [`build_tree`] counts the symbols and
//! builds the tree, [`derive_table`] turns the tree into a prefix-free code
//! table, and [`encode`] / [`decode`] translate between symbols and bits.
//!
//! ```
//! use huffman::{build_tree, decode, derive_table, encode};
//!
//! let input = "ABCDABCC";
//! let tree = build_tree(input.chars());
//! let table = derive_table(tree.as_ref());
//!
//! let bits = encode(input.chars(), &table)?;
//! let decoded: String = decode(&bits, &table).into_iter().collect();
//! assert_eq!(decoded, input);
//! # Ok::<(), huffman::EncodeError>(())
//! ```

mod code_table;
mod codec;
mod decoder;
mod digits;
mod encoder;
mod errors;
mod frequencies;
mod tree;

pub use crate::code_table::{derive_table, CodeTable};
pub use crate::codec::Codec;
pub use crate::decoder::{
    decode, decode_detailed, decode_with_tree, decode_with_tree_detailed, Decoded,
};
pub use crate::digits::{parse_digits, to_digit_string};
pub use crate::encoder::encode;
pub use crate::errors::{EncodeError, ParseDigitsError};
pub use crate::frequencies::Frequencies;
pub use crate::tree::{build_tree, Node};
