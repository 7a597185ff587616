// normalize.rs - Diacritic stripping

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::data::Table;

/// Remove accents from input text while preserving capitalization.
///
/// NFKD decomposition separates base characters from their diacritical
/// marks; dropping the combining marks leaves the unaccented base letter.
/// Letters with no decomposition (e.g. 'ø') pass through unchanged, as do
/// digits and punctuation. Idempotent.
pub fn strip_accents(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Strip accents from every cell in the table, header row included.
/// Returns the number of cells that changed.
pub fn normalize_table(table: &mut Table) -> usize {
    let mut changed = 0;

    for header in &mut table.headers {
        let stripped = strip_accents(header);
        if stripped != *header {
            *header = stripped;
            changed += 1;
        }
    }

    for row in &mut table.rows {
        for cell in row {
            let stripped = strip_accents(cell);
            if stripped != *cell {
                *cell = stripped;
                changed += 1;
            }
        }
    }

    changed
}
