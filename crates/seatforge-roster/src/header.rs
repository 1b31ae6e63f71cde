//! Header-row detection.

/// Number of leading non-empty rows searched for the header.
pub const MAX_HEADER_SEARCH_ROWS: usize = 5;

/// Substrings that mark a name column, compared case-insensitively.
pub const NAME_KEYS: [&str; 4] = ["姓名", "name", "学生姓名", "student name"];

/// Location of the header row and its name column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch {
    pub row: usize,
    pub column: usize,
}

/// Finds the first row, among the first [`MAX_HEADER_SEARCH_ROWS`], with a
/// cell naming a name column. The column is the first such cell.
pub fn find_header(rows: &[Vec<String>]) -> Option<HeaderMatch> {
    rows.iter()
        .take(MAX_HEADER_SEARCH_ROWS)
        .enumerate()
        .find_map(|(row, cells)| {
            cells
                .iter()
                .position(|cell| is_name_cell(cell))
                .map(|column| HeaderMatch { row, column })
        })
}

fn is_name_cell(cell: &str) -> bool {
    let cell = cell.to_lowercase();
    NAME_KEYS.iter().any(|key| cell.contains(&key.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_header_after_title_rows() {
        let rows = rows(&[&["Grade 7"], &["Term 2"], &["No.", "Student Name", "Score"]]);
        assert_eq!(find_header(&rows), Some(HeaderMatch { row: 2, column: 1 }));
    }

    #[test]
    fn test_chinese_header() {
        let rows = rows(&[&["学号", "学生姓名"], &["1", "张三"]]);
        assert_eq!(find_header(&rows), Some(HeaderMatch { row: 0, column: 1 }));
    }

    #[test]
    fn test_case_insensitive() {
        let rows = rows(&[&["ID", "NAME"]]);
        assert_eq!(find_header(&rows), Some(HeaderMatch { row: 0, column: 1 }));
    }

    #[test]
    fn test_first_matching_column_wins() {
        let rows = rows(&[&["Name", "Nickname"]]);
        assert_eq!(find_header(&rows).map(|h| h.column), Some(0));
    }

    #[test]
    fn test_header_beyond_search_window() {
        let rows = rows(&[&["a"], &["b"], &["c"], &["d"], &["e"], &["name"]]);
        assert_eq!(find_header(&rows), None);
    }
}
