//! Translation between the external coordinate notation and zero-based
//! engine indices. Rows arrive as a single letter ("A" = row 0, case-
//! insensitive), columns as a 1-indexed integer. Both functions only
//! translate; range checking against the board is the engine's job.

/// Map a row letter to its zero-based index via alphabet position.
///
/// Returns `None` for anything that is not exactly one ASCII letter. The
/// returned index may still lie past the board edge (e.g. "O" on a
/// 14-wide board); the engine rejects those.
pub fn row_index(letter: &str) -> Option<usize> {
    let mut chars = letter.trim().chars();
    let first = chars.next()?;
    if chars.next().is_some() || !first.is_ascii_alphabetic() {
        return None;
    }
    Some(first.to_ascii_uppercase() as usize - 'A' as usize)
}

/// Convert a 1-indexed column number to a zero-based index.
///
/// Returns `None` for values below 1; values past the board edge are left
/// for the engine to reject.
pub fn col_index(one_based: i64) -> Option<usize> {
    if one_based < 1 {
        return None;
    }
    Some((one_based - 1) as usize)
}
