// src/csv.rs
use std::io::{self, Write};

use crate::table::{Cell, ExtractedTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(&self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer. Null cells are written empty.
pub fn write_row<W: Write>(mut w: W, row: &[Cell], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        let cell = cell.as_deref().unwrap_or("");
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write every row of an extracted table (maps get a key row first).
pub fn write_table<W: Write>(mut w: W, table: &ExtractedTable, delim: Delim) -> io::Result<()> {
    for row in table.to_rows() {
        write_row(&mut w, &row, delim.sep())?;
    }
    Ok(())
}

pub fn table_to_string(table: &ExtractedTable, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, table, delim);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let row = vec![Some(s!("plain")), None, Some(s!("a,b")), Some(s!("say \"hi\""))];
        let mut buf = Vec::new();
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let table = ExtractedTable::Column(vec![Some(s!("a,b")), None]);
        assert_eq!(table_to_string(&table, Delim::Tsv), "a,b\n\n");
    }
}
