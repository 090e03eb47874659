use std::{
    collections::HashSet,
    fmt,
    io::{self, Write},
};

use utils::{parse_field, Table, TableError};

use crate::normalize::ColumnNormalizer;

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    ctg: String,
    // Non-sample columns, passed through unchanged
    annotation: Vec<String>,
    depths: Vec<f64>,
}

impl MatrixRow {
    pub fn ctg(&self) -> &str {
        &self.ctg
    }

    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    fn is_empty(&self) -> bool {
        self.depths.iter().all(|x| *x == 0.0)
    }
}

/// Contig by sample coverage matrix
///
/// The header holds the (normalized) column names: the contig column, then
/// n_annotation pass through columns, then one column per sample
///
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMatrix {
    header: Vec<String>,
    n_annotation: usize,
    rows: Vec<MatrixRow>,
}

/// Number of rows and number of non-zero cells per sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSummary {
    pub rows: usize,
    pub nonzero: Vec<(String, usize)>,
}

impl fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows\t{}", self.rows)?;
        for (s, n) in self.nonzero.iter() {
            write!(f, "\n{}\t{}", s, n)?
        }
        Ok(())
    }
}

impl CoverageMatrix {
    /// Build from a table, normalizing column names and parsing sample depths
    pub fn from_table(
        t: &Table,
        n_annotation: usize,
        normalizer: &ColumnNormalizer,
        input: &str,
    ) -> Result<Self, TableError> {
        let header: Vec<String> = t.header().iter().map(|s| normalizer.normalize(s)).collect();
        let n_fixed = 1 + n_annotation;
        if header.len() < n_fixed {
            return Err(TableError::MissingColumn {
                column: if header.is_empty() {
                    "contig".to_owned()
                } else {
                    format!("annotation column {}", header.len())
                },
                input: input.to_owned(),
            });
        }

        let mut rows = Vec::with_capacity(t.len());
        for (i, r) in t.rows().iter().enumerate() {
            // Header is line 1
            let line = i + 2;
            if r.len() < header.len() {
                return Err(TableError::ShortLine {
                    input: input.to_owned(),
                    line,
                    expected: header.len(),
                    found: r.len(),
                });
            }
            let depths = r[n_fixed..header.len()]
                .iter()
                .zip(header[n_fixed..].iter())
                .map(|(s, col)| parse_field::<f64>(s, input, line, col))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(MatrixRow {
                ctg: r[0].trim().to_owned(),
                annotation: r[1..n_fixed].to_vec(),
                depths,
            })
        }

        Ok(Self {
            header,
            n_annotation,
            rows,
        })
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    pub fn samples(&self) -> &[String] {
        &self.header[1 + self.n_annotation..]
    }

    /// Indices of all sample columns with the given name
    pub fn sample_indices(&self, name: &str) -> Vec<usize> {
        self.samples()
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == name)
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove rows where all sample columns are 0.  Returns number of rows removed
    pub fn remove_empty_rows(&mut self) -> usize {
        let n = self.rows.len();
        self.rows.retain(|r| !r.is_empty());
        n - self.rows.len()
    }

    /// Set cells in sample column `ix` to 0 for contigs in `exclude`.
    /// Returns the number of non-zero cells that were changed
    pub fn zero_out(&mut self, ix: usize, exclude: &HashSet<String>) -> usize {
        let mut n = 0;
        for r in self.rows.iter_mut() {
            if exclude.contains(&r.ctg) {
                let x = &mut r.depths[ix];
                if *x != 0.0 {
                    n += 1;
                    *x = 0.0
                }
            }
        }
        n
    }

    pub fn summary(&self) -> MatrixSummary {
        let nonzero = self
            .samples()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let n = self.rows.iter().filter(|r| r.depths[i] != 0.0).count();
                (s.clone(), n)
            })
            .collect();
        MatrixSummary {
            rows: self.rows.len(),
            nonzero,
        }
    }

    pub fn write<W: Write>(&self, wrt: &mut W, delim: char) -> io::Result<()> {
        let d = delim.to_string();
        writeln!(wrt, "{}", self.header.join(&d))?;
        for r in self.rows.iter() {
            write!(wrt, "{}", r.ctg)?;
            for s in r.annotation.iter() {
                write!(wrt, "{}{}", delim, s)?
            }
            for x in r.depths.iter() {
                write!(wrt, "{}{}", delim, x)?
            }
            writeln!(wrt)?
        }
        Ok(())
    }
}

/// Per sample sets of contigs to be zeroed in the coverage matrix
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    columns: Vec<(String, HashSet<String>)>,
}

impl ExclusionList {
    /// Each column of the table is a sample.  The first value in every column is
    /// skipped, as are empty cells
    pub fn from_table(t: &Table, normalizer: &ColumnNormalizer) -> Self {
        let columns = t
            .header()
            .iter()
            .enumerate()
            .map(|(j, h)| {
                let set: HashSet<String> = t
                    .rows()
                    .iter()
                    .skip(1)
                    .filter_map(|r| r.get(j).map(|s| s.trim()))
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_owned())
                    .collect();
                (normalizer.normalize(h), set)
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[(String, HashSet<String>)] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(s: &str, delim: char) -> Table {
        let mut rdr = s.as_bytes();
        utils::read_table(&mut rdr, delim, "test").unwrap()
    }

    fn matrix(s: &str) -> CoverageMatrix {
        CoverageMatrix::from_table(&table(s, '\t'), 0, &ColumnNormalizer::default(), "test")
            .unwrap()
    }

    #[test]
    fn parse_with_normalized_names() {
        let m = matrix("#contig\tS1_L006_x\tS2_L006_y\nv1\t5\t0\nv2\t3.5\t4\n");
        assert_eq!(m.samples(), &["S1", "S2"]);
        assert_eq!(m.rows()[1].depths(), &[3.5, 4.0]);
        assert_eq!(m.sample_indices("S2"), vec![1]);
        assert!(m.sample_indices("S3").is_empty());
    }

    #[test]
    fn annotation_columns_pass_through() {
        let t = table("#contig\tlength\tS1\tS2\nv1\t1000\t0\t0\nv2\t2000\t1\t0\n", '\t');
        let mut m = CoverageMatrix::from_table(&t, 1, &ColumnNormalizer::Identity, "test").unwrap();
        assert_eq!(m.samples(), &["S1", "S2"]);
        assert_eq!(m.remove_empty_rows(), 1);
        let mut out = Vec::new();
        m.write(&mut out, '|').unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#contig|length|S1|S2\nv2|2000|1|0\n"
        );
    }

    #[test]
    fn bad_depth() {
        let t = table("#contig\tS1\nv1\tfive\n", '\t');
        assert!(matches!(
            CoverageMatrix::from_table(&t, 0, &ColumnNormalizer::default(), "test"),
            Err(TableError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn short_row() {
        let t = table("#contig\tS1\tS2\nv1\t1\n", '\t');
        assert!(matches!(
            CoverageMatrix::from_table(&t, 0, &ColumnNormalizer::default(), "test"),
            Err(TableError::ShortLine { .. })
        ));
    }

    #[test]
    fn missing_annotation_column() {
        let t = table("#contig\n", '\t');
        assert!(matches!(
            CoverageMatrix::from_table(&t, 1, &ColumnNormalizer::default(), "test"),
            Err(TableError::MissingColumn { .. })
        ));
    }

    #[test]
    fn empty_rows_and_zeroing() {
        let mut m = matrix("#contig\tS1\tS2\nv1\t0\t0\nv2\t2\t0\nv3\t1\t1\n");
        assert_eq!(m.remove_empty_rows(), 1);
        let excl: HashSet<String> = ["v2", "v3", "v9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(m.zero_out(0, &excl), 2);
        // Nothing left to change
        assert_eq!(m.zero_out(0, &excl), 0);
        assert_eq!(m.remove_empty_rows(), 1);
        assert_eq!(m.rows().len(), 1);
        assert_eq!(m.rows()[0].ctg(), "v3");
    }

    #[test]
    fn contig_names_are_trimmed() {
        let mut m = matrix("#contig\tS1\tS2\n v1 \t5\t0\n");
        assert_eq!(m.rows()[0].ctg(), "v1");
        let t = table("S1\nx\n v1\n", '|');
        let e = ExclusionList::from_table(&t, &ColumnNormalizer::default());
        assert_eq!(m.zero_out(0, &e.columns()[0].1), 1);
        assert_eq!(m.remove_empty_rows(), 1);
    }

    #[test]
    fn summary_counts() {
        let m = matrix("#contig\tS1\tS2\nv1\t5\t0\nv2\t3\t4\n");
        let s = m.summary();
        assert_eq!(s.rows, 2);
        assert_eq!(
            s.nonzero,
            vec![("S1".to_string(), 2), ("S2".to_string(), 1)]
        );
        assert_eq!(format!("{}", s), "rows\t2\nS1\t2\nS2\t1");
    }

    #[test]
    fn exclusion_list_skips_first_value() {
        let t = table("S1_L006_a|S2_L006_b\nv0|w0\nv1|w1\nv2|\n", '|');
        let e = ExclusionList::from_table(&t, &ColumnNormalizer::default());
        let cols = e.columns();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].0, "S1");
        assert!(!cols[0].1.contains("v0"));
        assert!(cols[0].1.contains("v1") && cols[0].1.contains("v2"));
        assert_eq!(cols[1].0, "S2");
        assert_eq!(cols[1].1.len(), 1);
        assert!(cols[1].1.contains("w1"));
    }
}
