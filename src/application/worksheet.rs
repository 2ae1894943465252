use error_stack::{report, ResultExt};
use serde_json::Value;
use tracing::instrument;

use crate::{
    domain::{
        output_row::OutputRow,
        sheets::{
            a1_notation::SheetRange,
            cell_text::IntoCellText,
            record::{records_from_grid, Record},
            row::Row,
        },
        spreadsheet_id::SpreadsheetId,
    },
    ports::spreadsheet::{SpreadsheetClient, SpreadsheetError},
};

/// A worksheet known to exist in a spreadsheet, addressed by title.
pub struct Worksheet<'a> {
    client: &'a dyn SpreadsheetClient,
    spreadsheet_id: &'a SpreadsheetId,
    title: String,
}

impl<'a> Worksheet<'a> {
    /// Fails with [`SpreadsheetError::WorksheetNotFound`] if no tab has exactly this title.
    #[instrument(skip(client))]
    pub async fn open(
        client: &'a dyn SpreadsheetClient,
        spreadsheet_id: &'a SpreadsheetId,
        title: &str,
    ) -> error_stack::Result<Worksheet<'a>, SpreadsheetError> {
        let titles = client.worksheet_titles(spreadsheet_id).await?;
        if !titles.iter().any(|existing| existing == title) {
            return Err(report!(SpreadsheetError::WorksheetNotFound(
                title.to_string()
            )))
            .attach_printable_lazy(|| format!("Available worksheets: {:?}", titles));
        }

        Ok(Worksheet {
            client,
            spreadsheet_id,
            title: title.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Every row below the header row, keyed by header.
    pub async fn get_all_records(&self) -> error_stack::Result<Vec<Record>, SpreadsheetError> {
        let grid: Vec<Vec<String>> = self
            .client
            .read_values(self.spreadsheet_id, &SheetRange::whole(self.title.as_str()))
            .await?
            .into_cell_text();

        Ok(records_from_grid(grid))
    }

    /// Displayed values of one row, without trailing empty cells.
    pub async fn row_values(&self, row: Row) -> error_stack::Result<Vec<String>, SpreadsheetError> {
        let grid = self
            .client
            .read_values(self.spreadsheet_id, &SheetRange::row(self.title.as_str(), row))
            .await?;

        Ok(grid
            .into_iter()
            .next()
            .map(<Vec<Value> as IntoCellText<Vec<String>>>::into_cell_text)
            .unwrap_or_default())
    }

    pub async fn append_row(&self, row: &OutputRow) -> error_stack::Result<(), SpreadsheetError> {
        self.client
            .append_row(
                self.spreadsheet_id,
                &SheetRange::whole(self.title.as_str()),
                row,
            )
            .await
    }
}
