use std::fmt::Formatter;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Row {
    index: u32,
}

impl Row {
    /// The first row of a worksheet, which holds its column headers.
    pub const HEADER: Row = Row { index: 0 };

    pub fn from_row(row: u32) -> Self {
        Row {
            index: row.saturating_sub(1), // Convert to zero-based index
        }
    }

    /// Returns the row number as a 1-based index, as used by A1 notation.
    /// # Examples
    /// ```
    /// use sheets_append::domain::sheets::row::Row;
    /// assert_eq!(Row::from_row(1).number(), 1);
    /// assert_eq!(Row::from_row(5).number(), 5);
    /// assert_eq!(Row::HEADER.number(), 1);
    /// ```
    pub fn number(&self) -> u32 {
        self.index.saturating_add(1)
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row(index: {}, row: {})", self.index(), self.number())
    }
}
