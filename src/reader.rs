//! Loading edge-list files back into memory.
//!
//! The accepted format is the one the writer produces: `"source target"` per
//! line, separated by exactly one space. Blank lines and lines starting with
//! `#` are skipped so hand-annotated files still load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::EdgeListError;
use crate::{Node, UnweightedEdge};

/// Load from a file containing pairs of numbers: "source target"
///
/// # Errors
/// [`EdgeListError::Io`] when the file cannot be read and
/// [`EdgeListError::Malformed`] for the first line that is not an edge.
pub fn load_edge_list(path: &Path) -> Result<Vec<UnweightedEdge>, EdgeListError> {
    let io_error = |source| EdgeListError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = BufReader::new(File::open(path).map_err(io_error)?);

    let mut data = Vec::new();
    for (index, read_line) in file.lines().enumerate() {
        let line = read_line.map_err(io_error)?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let edge = parse_edge(&line).ok_or_else(|| EdgeListError::Malformed {
            line: index + 1,
            content: line.clone(),
        })?;
        data.push(edge);
    }
    Ok(data)
}

fn parse_edge(line: &str) -> Option<UnweightedEdge> {
    let (from, to) = line.split_once(' ')?;
    let digits = |text: &str| !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    if !digits(from) || !digits(to) {
        return None;
    }
    Some((from.parse::<Node>().ok()?, to.parse::<Node>().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn loads_edges_and_skips_comments() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("edges.txt");
        fs::write(&path, "# header\n0 1\n\n2 0\n")?;
        assert_eq!(load_edge_list(&path)?, vec![(0, 1), (2, 0)]);
        Ok(())
    }

    #[rstest]
    #[case("0 1 2")]
    #[case("0  1")]
    #[case("0\t1")]
    #[case("-1 2")]
    #[case("1 +2")]
    #[case("1 ")]
    #[case("a b")]
    fn rejects_lines_that_are_not_edges(#[case] line: &str) {
        assert_eq!(parse_edge(line), None);
    }

    #[test]
    fn malformed_line_is_reported_with_its_number() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("edges.txt");
        fs::write(&path, "0 1\n1 2 extra\n")?;
        let err = load_edge_list(&path).expect_err("second line is malformed");
        assert!(matches!(err, EdgeListError::Malformed { line: 2, .. }));
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_edge_list(Path::new("/no/such/edges.txt")).expect_err("missing file");
        assert!(matches!(err, EdgeListError::Io { .. }));
    }
}
