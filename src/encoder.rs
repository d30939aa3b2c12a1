use std::{fmt::Debug, hash::Hash};

use bitvec::vec::BitVec;
use log::debug;

use crate::{code_table::CodeTable, errors::EncodeError};

/// Encode `symbols` by concatenating their codes from `table`.
///
/// Fails on the first symbol that has no code, which means `table` was built
/// from some other input.
pub fn encode<S: Eq + Hash + Debug>(
    symbols: impl IntoIterator<Item = S>,
    table: &CodeTable<S>,
) -> Result<BitVec, EncodeError> {
    let mut out = BitVec::new();
    let mut count = 0;
    for (position, symbol) in symbols.into_iter().enumerate() {
        let Some(code) = table.get(&symbol) else {
            return Err(EncodeError::UnknownSymbol {
                position,
                symbol: format!("{symbol:?}"),
            });
        };
        out.extend_from_bitslice(code);
        count += 1;
    }

    debug!("encoded {count} symbols into {} bits", out.len());
    Ok(out)
}
