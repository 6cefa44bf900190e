//! Plain-text board files.
//!
//! The first record is `rows,cols`; every following record `r,c` names one
//! live cell. Records are separated by newlines.

use std::fs;
use std::path::Path;

use tessera_data::BoardSpec;

use crate::error::{IoError, Result};

/// How to treat a record that is not two comma-separated integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip blank lines, reject anything else that does not parse.
    #[default]
    Strict,
    /// Treat the first malformed record (blank lines included) as the end of
    /// the list and ignore everything after it. Older board files relied on
    /// this, so it stays available behind an explicit opt-in.
    Lenient,
}

fn parse_record(record: &str) -> Option<(usize, usize)> {
    let (first, second) = record.split_once(',')?;
    if second.contains(',') {
        return None;
    }
    Some((first.trim().parse().ok()?, second.trim().parse().ok()?))
}

/// Parses board text. The header must be valid in both modes.
pub fn parse_board(content: &str, mode: ParseMode) -> Result<BoardSpec> {
    let mut lines = content.lines().enumerate();
    let (header_idx, header) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or_else(|| IoError::validation("board file is empty"))?;
    let (rows, cols) = parse_record(header).ok_or_else(|| IoError::parse(header_idx + 1, header))?;

    let mut board = BoardSpec::new(rows, cols);
    for (idx, line) in lines {
        match parse_record(line) {
            Some(cell) => board.alive.push(cell),
            None if mode == ParseMode::Lenient => {
                tracing::debug!(
                    line = idx + 1,
                    record = line,
                    "Board list ends at malformed record"
                );
                break;
            }
            None if line.trim().is_empty() => continue,
            None => return Err(IoError::parse(idx + 1, line)),
        }
    }
    Ok(board)
}

/// Renders a board in file format, one record per line.
pub fn format_board(board: &BoardSpec) -> String {
    let mut out = format!("{},{}\n", board.rows, board.cols);
    for (row, col) in &board.alive {
        out.push_str(&format!("{row},{col}\n"));
    }
    out
}

pub fn read_board<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<BoardSpec> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("reading {}", path.display())))?;
    let board =
        parse_board(&content, mode).map_err(|e| e.with_context(path.display().to_string()))?;
    tracing::info!(
        path = %path.display(),
        rows = board.rows,
        cols = board.cols,
        alive = board.alive.len(),
        "Board read"
    );
    Ok(board)
}

/// Writes a board file, creating parent directories as needed.
pub fn write_board<P: AsRef<Path>>(path: P, board: &BoardSpec) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format_board(board))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_board() {
        let board = parse_board("3,3\n1,1\n0,2\n", ParseMode::Strict).unwrap();
        assert_eq!(board.rows, 3);
        assert_eq!(board.cols, 3);
        assert_eq!(board.alive, vec![(1, 1), (0, 2)]);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_crlf() {
        let board = parse_board("4, 5\r\n 2 ,3\r\n\r\n1,1\r\n", ParseMode::Strict).unwrap();
        assert_eq!((board.rows, board.cols), (4, 5));
        assert_eq!(board.alive, vec![(2, 3), (1, 1)]);
    }

    #[test]
    fn test_strict_rejects_malformed_record() {
        let err = parse_board("3,3\n1,1\nfoo\n2,2\n", ParseMode::Strict).unwrap_err();
        match err {
            IoError::Parse { line, record } => {
                assert_eq!(line, 3);
                assert_eq!(record, "foo");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_board("3,3\n1,1,1\n", ParseMode::Strict).is_err());
        assert!(parse_board("3,3\n-1,1\n", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_lenient_stops_at_first_malformed_record() {
        let board = parse_board("3,3\n1,1\nfoo\n2,2\n", ParseMode::Lenient).unwrap();
        assert_eq!(board.alive, vec![(1, 1)]);
        let board = parse_board("3,3\n1,1\n\n2,2\n", ParseMode::Lenient).unwrap();
        assert_eq!(board.alive, vec![(1, 1)]);
    }

    #[test]
    fn test_header_is_required() {
        assert!(matches!(
            parse_board("", ParseMode::Lenient),
            Err(IoError::Validation(_))
        ));
        assert!(matches!(
            parse_board("rows,cols\n1,1\n", ParseMode::Lenient),
            Err(IoError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_format_matches_file_layout() {
        let board = BoardSpec::new(2, 3).with_alive([(0, 1), (1, 2)]);
        assert_eq!(format_board(&board), "2,3\n0,1\n1,2\n");
        assert_eq!(
            parse_board(&format_board(&board), ParseMode::Strict).unwrap(),
            board
        );
    }

    #[test]
    fn test_write_then_read() {
        let dir = std::env::temp_dir().join(format!("tessera_board_{}", std::process::id()));
        let path = dir.join("nested").join("board.txt");
        let board = BoardSpec::new(4, 4).with_alive([(3, 3)]);
        write_board(&path, &board).unwrap();
        assert_eq!(read_board(&path, ParseMode::Strict).unwrap(), board);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let err = read_board("/no/such/board.txt", ParseMode::Strict).unwrap_err();
        assert!(err.to_string().contains("/no/such/board.txt"));
    }
}
