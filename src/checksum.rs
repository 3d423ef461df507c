use md5::{Digest, Md5};

use crate::models::{Candidate, Transaction};

/// Hex MD5 of a row's rendered text, the key existing `expensegen` stores use.
/// Collisions are treated as impossible.
pub fn row_checksum(original_row_text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(original_row_text.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn assign_checksums(candidates: Vec<Candidate>) -> Vec<Transaction> {
    candidates
        .into_iter()
        .map(|c| Transaction {
            checksum: row_checksum(&c.original_row_text),
            date: c.date,
            description: c.description,
            amount: c.amount,
            is_debit: c.is_debit,
            closing_balance: c.closing_balance,
        })
        .collect()
}
