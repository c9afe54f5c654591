use std::io::{self, Write};

/// Writes the rows of one pass, framed either as bare `(...),` lines or as a
/// single `INSERT` statement.
pub struct PassWriter<W: Write> {
    inner: CountingWriter<W>,
    statement: Option<String>,
    rows: u64,
}

impl<W: Write> PassWriter<W> {
    /// Complete row lines as produced by
    /// [`generate_reading_row`](crate::generators::generate_reading_row), one per line.
    pub fn row_literals(inner: W) -> Self {
        Self {
            inner: CountingWriter::new(inner),
            statement: None,
            rows: 0,
        }
    }

    /// Rows wrapped in `INSERT INTO <table> (<columns>) VALUES ...;`.
    ///
    /// The header is written with the first row, so an empty pass emits nothing.
    pub fn insert_statement(inner: W, table: &str, columns: &[&str]) -> Self {
        let header = format!("INSERT INTO {table} ({}) VALUES\n", columns.join(", "));
        Self {
            inner: CountingWriter::new(inner),
            statement: Some(header),
            rows: 0,
        }
    }

    /// Write one row. Row-literal mode expects a complete `(...),` line;
    /// statement mode expects a bare `(...)` tuple.
    pub fn write_row(&mut self, row: &str) -> io::Result<()> {
        match &self.statement {
            None => writeln!(self.inner, "{row}")?,
            Some(header) => {
                if self.rows == 0 {
                    self.inner.write_all(header.as_bytes())?;
                } else {
                    self.inner.write_all(b",\n")?;
                }
                self.inner.write_all(row.as_bytes())?;
            }
        }
        self.rows += 1;
        Ok(())
    }

    /// Close the statement if one is open and flush. Returns rows and bytes written.
    pub fn finish(mut self) -> io::Result<(u64, u64)> {
        if self.statement.is_some() && self.rows > 0 {
            self.inner.write_all(b";\n")?;
        }
        self.inner.flush()?;
        Ok((self.rows, self.inner.bytes_written()))
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_literals_write_one_line_per_row() {
        let mut out = Vec::new();
        let mut writer = PassWriter::row_literals(&mut out);
        writer.write_row("(1, 2),").unwrap();
        writer.write_row("(3, 4),").unwrap();
        let (rows, bytes) = writer.finish().unwrap();

        assert_eq!(rows, 2);
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "(1, 2),\n(3, 4),\n");
        assert_eq!(bytes, out.len() as u64);
    }

    #[test]
    fn insert_statement_separates_rows_and_terminates() {
        let mut out = Vec::new();
        let mut writer = PassWriter::insert_statement(&mut out, "t", &["a", "b"]);
        writer.write_row("(1, 2)").unwrap();
        writer.write_row("(3, 4)").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "INSERT INTO t (a, b) VALUES\n(1, 2),\n(3, 4);\n"
        );
    }

    #[test]
    fn empty_statement_writes_nothing() {
        let mut out = Vec::new();
        let writer = PassWriter::insert_statement(&mut out, "t", &["a"]);
        let (rows, bytes) = writer.finish().unwrap();
        assert_eq!((rows, bytes), (0, 0));
        assert!(out.is_empty());
    }
}
