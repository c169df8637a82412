/// Pipe table type with owned delimiter constants.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    /// A line needs at least this many pipes to count as a row.
    pub const MIN_PIPES: usize = 2;

    pub fn is_row(body: &str) -> bool {
        body.matches(Self::PIPE).count() >= Self::MIN_PIPES
    }

    /// Splits a header row into its non-empty trimmed cells.
    pub fn header_cells(row: &str) -> Vec<String> {
        row.split(Self::PIPE)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect()
    }
}
