//! Line and cell splitting shared by the validator and the row parser.
//!
//! Both sides must agree on what "row 3" means, so indexing always goes
//! through [`split_lines`].

/// Cell delimiter. Quoting and escaping are not supported.
pub const DELIMITER: char = ',';

/// Returns the trimmed, non-blank lines of `text`.
///
/// Blank lines (including leading/trailing ones) are dropped before indexing,
/// so line 0 is the first non-blank line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Splits one line into trimmed cells.
pub fn split_cells(line: &str) -> Vec<&str> {
    line.split(DELIMITER).map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blank_lines() {
        let text = "\n   \n  a,b  \n\n c \n   ";
        let lines: Vec<&str> = split_lines(text).collect();
        assert_eq!(lines, vec!["a,b", "c"]);
    }

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines: Vec<&str> = split_lines("a,b\r\nc,d\r\n").collect();
        assert_eq!(lines, vec!["a,b", "c,d"]);
    }

    #[test]
    fn test_split_cells_trims() {
        assert_eq!(split_cells(" x , 9.00 ,2"), vec!["x", "9.00", "2"]);
        assert_eq!(split_cells(",9.00,2"), vec!["", "9.00", "2"]);
    }
}
