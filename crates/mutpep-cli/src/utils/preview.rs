use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// The first `limit` lines of a written artifact.
pub fn head_lines(path: &Path, limit: usize) -> io::Result<Vec<String>> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    BufReader::new(File::open(path)?)
        .lines()
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_lines_stops_at_limit_or_end_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbsaida.txt");
        std::fs::write(&path, ">NP_1\nAAAqBBBR\n>NP_2\nCCCeDDDK\n").unwrap();

        assert_eq!(head_lines(&path, 2).unwrap(), vec![">NP_1", "AAAqBBBR"]);
        assert_eq!(head_lines(&path, 10).unwrap().len(), 4);
        assert!(head_lines(&path, 0).unwrap().is_empty());
    }

    #[test]
    fn head_lines_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(head_lines(&dir.path().join("absent.txt"), 3).is_err());
    }
}
