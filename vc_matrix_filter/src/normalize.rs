use regex::Regex;

/// Column headers are cut at this marker by default, so
/// `sampleA_L006_R1` becomes `sampleA`
pub const DEFAULT_SUFFIX_MARKER: &str = "_L006";

/// Maps raw column headers to sample names so that the matrix and the
/// exclusion list can be aligned by sample.
///
/// Only works if the run specific part of the header can be recognized,
/// either from a fixed marker or a regular expression.
#[derive(Debug, Clone)]
pub enum ColumnNormalizer {
    /// Use headers as they are
    Identity,
    /// Remove everything from the first occurrence of the marker onwards
    Marker(String),
    /// Remove the first match of the expression
    Pattern(Regex),
}

impl Default for ColumnNormalizer {
    fn default() -> Self {
        Self::Marker(DEFAULT_SUFFIX_MARKER.to_owned())
    }
}

impl ColumnNormalizer {
    pub fn from_marker(marker: &str) -> Self {
        if marker.is_empty() {
            Self::Identity
        } else {
            Self::Marker(marker.to_owned())
        }
    }

    pub fn from_pattern(s: &str) -> anyhow::Result<Self> {
        let reg = Regex::new(s).map_err(|e| anyhow!("Invalid suffix pattern {}: {}", s, e))?;
        Ok(Self::Pattern(reg))
    }

    pub fn normalize(&self, name: &str) -> String {
        match self {
            Self::Identity => name.to_owned(),
            Self::Marker(m) => match name.find(m.as_str()) {
                Some(i) => name[..i].to_owned(),
                None => name.to_owned(),
            },
            Self::Pattern(reg) => reg.replace(name, "").into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_marker() {
        let n = ColumnNormalizer::default();
        assert_eq!(n.normalize("sampleA_L006_rest"), "sampleA");
        assert_eq!(n.normalize("sampleA_L006_other"), "sampleA");
        assert_eq!(n.normalize("#contig"), "#contig");
        assert_eq!(n.normalize("_L006"), "");
    }

    #[test]
    fn other_markers() {
        assert_eq!(
            ColumnNormalizer::from_marker("_S").normalize("B12_S3_L001.bam"),
            "B12"
        );
        assert_eq!(
            ColumnNormalizer::from_marker("").normalize("B12_S3_L001.bam"),
            "B12_S3_L001.bam"
        );
    }

    #[test]
    fn pattern() {
        let n = ColumnNormalizer::from_pattern(r"_L\d{3}.*$").unwrap();
        assert_eq!(n.normalize("sampleA_L001_R1.sorted"), "sampleA");
        assert_eq!(n.normalize("sampleB"), "sampleB");
        assert!(ColumnNormalizer::from_pattern("(").is_err());
    }
}
