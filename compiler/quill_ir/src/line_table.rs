//! Byte offset to line/column conversion.
//!
//! The lexer works on byte ranges; tokens carry `Position`s. This table is
//! built once per source text so each conversion is a binary search.
//! `LineCursor` serves the lexer's increasing offsets, counting only the
//! characters between consecutive requests.

use crate::Position;

/// Pre-computed line start offsets for one source text.
///
/// ```
/// use quill_ir::{LineOffsetTable, Position};
///
/// let source = "var a;\nprint a;";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.position(source, 0), Position::new(1, 1));
/// assert_eq!(table.position(source, 7), Position::new(2, 1));
/// assert_eq!(table.position(source, 13), Position::new(2, 7));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build the table by scanning `source` for newlines.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    /// Convert a byte offset into a 1-based position.
    ///
    /// Offsets past the end clamp to the end of the source.
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let offset = offset.min(source.len());
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.offsets.get(line_idx).copied().unwrap_or(0);
        let column = source
            .get(line_start..offset)
            .map_or(0, |text| text.chars().count());

        Position::new(saturate(line_idx + 1), saturate(column + 1))
    }

    /// A cursor over `source` starting at offset 0.
    pub fn cursor<'a>(&'a self, source: &'a str) -> LineCursor<'a> {
        LineCursor {
            table: self,
            source,
            offset: 0,
            line_idx: 0,
            column: 0,
        }
    }
}

/// Forward-moving offset to position conversion.
///
/// Requests at or after the previous offset cost the characters in between,
/// so a full pass over the source is linear even on one long line. A request
/// behind the cursor falls back to the table.
///
/// ```
/// use quill_ir::{LineOffsetTable, Position};
///
/// let source = "var a;\nprint a;";
/// let table = LineOffsetTable::build(source);
/// let mut cursor = table.cursor(source);
///
/// assert_eq!(cursor.position(4), Position::new(1, 5));
/// assert_eq!(cursor.position(13), Position::new(2, 7));
/// assert_eq!(cursor.position(0), Position::START);
/// ```
#[derive(Clone, Debug)]
pub struct LineCursor<'a> {
    table: &'a LineOffsetTable,
    source: &'a str,
    offset: usize,
    /// 0-based line of `offset`.
    line_idx: usize,
    /// Characters between the start of that line and `offset`.
    column: usize,
}

impl LineCursor<'_> {
    /// Convert a byte offset into a 1-based position, moving the cursor there.
    ///
    /// Offsets past the end clamp to the end of the source.
    pub fn position(&mut self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        if offset < self.offset {
            return self.table.position(self.source, offset);
        }
        let Some(skipped) = self.source.get(self.offset..offset) else {
            return self.table.position(self.source, offset);
        };

        match skipped.rfind('\n') {
            Some(last_newline) => {
                self.line_idx += skipped.bytes().filter(|&byte| byte == b'\n').count();
                self.column = skipped[last_newline + 1..].chars().count();
            }
            None => self.column += skipped.chars().count(),
        }
        self.offset = offset;

        Position::new(saturate(self.line_idx + 1), saturate(self.column + 1))
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
