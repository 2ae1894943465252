use std::collections::HashMap;

/// One worksheet row keyed by the worksheet's header row.
pub type Record = HashMap<String, String>;

/// Turns a grid of cells into records. The first row is the header row; rows shorter
/// than the header are padded with empty strings and cells beyond it are dropped.
pub fn records_from_grid(mut grid: Vec<Vec<String>>) -> Vec<Record> {
    if grid.is_empty() {
        return Vec::new();
    }
    let headers = grid.remove(0);

    grid.into_iter()
        .map(|row| {
            let mut cells = row.into_iter();
            headers
                .iter()
                .map(|header| (header.clone(), cells.next().unwrap_or_default()))
                .collect()
        })
        .collect()
}
