use std::fmt::Debug;

use error_stack::{report, ResultExt};
use google_sheets4::api::{
    AddSheetRequest, BatchUpdateSpreadsheetRequest, ClearValuesRequest, DeleteSheetRequest,
    Request, SheetProperties, ValueRange,
};
use google_sheets4::{hyper, hyper_rustls, Sheets};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::instrument;

use crate::a1::A1Notation;
use crate::config::SpreadsheetConfig;
use crate::records::{rows_to_records, IntoCellStrings, Record};
use crate::value_range_factory::ValueRangeFactory;
use crate::{auth, http_client};

pub type SheetsHub = Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

/// Sheet id and title as reported by the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    pub id: i32,
    pub title: String,
}

#[derive(Error, Debug)]
pub enum SpreadsheetClientError {
    #[error("Failed to authenticate with the spreadsheet service")]
    FailedToAuthenticate,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("Failed to write range")]
    FailedToWriteRange,
    #[error("Failed to append rows")]
    FailedToAppendRows,
    #[error("Failed to clear range")]
    FailedToClearRange,
    #[error("Failed to list sheets")]
    FailedToListSheets,
    #[error("Failed to add sheet")]
    FailedToAddSheet,
    #[error("Failed to delete sheet")]
    FailedToDeleteSheet,
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}

/// Pass-through client for a single spreadsheet.
///
/// The authenticated hub is built lazily on first use: construction is cheap
/// and never touches the network. Every operation is one remote call; there
/// is no caching or retrying here.
pub struct SpreadsheetClient {
    pub config: SpreadsheetConfig,
    hub: OnceCell<SheetsHub>,
}

impl Debug for SpreadsheetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpreadsheetClient {{ spreadsheet_id: {:?} }}",
            self.config.spreadsheet_id
        )
    }
}

impl SpreadsheetClient {
    pub fn new(config: SpreadsheetConfig) -> Self {
        SpreadsheetClient {
            config,
            hub: OnceCell::new(),
        }
    }

    async fn hub(&self) -> error_stack::Result<&SheetsHub, SpreadsheetClientError> {
        self.hub
            .get_or_try_init(|| async {
                let client = http_client::http_client()
                    .change_context(SpreadsheetClientError::FailedToAuthenticate)?;
                let key = auth::decode_service_account_key(&self.config.credentials_b64)
                    .change_context(SpreadsheetClientError::FailedToAuthenticate)?;
                let authenticator = auth::authenticator(key, client.clone())
                    .await
                    .change_context(SpreadsheetClientError::FailedToAuthenticate)?;
                Ok(Sheets::new(client, authenticator))
            })
            .await
    }

    /// Appends a single row after the last data row of the sheet.
    #[instrument]
    pub async fn append_row(
        &self,
        sheet_title: &str,
        cells: Vec<Value>,
    ) -> error_stack::Result<(), SpreadsheetClientError> {
        self.append_rows(sheet_title, vec![cells]).await
    }

    #[instrument]
    pub async fn append_rows(
        &self,
        sheet_title: &str,
        rows: Vec<Vec<Value>>,
    ) -> error_stack::Result<(), SpreadsheetClientError> {
        let value_range = ValueRange::from_rows(rows);
        self.hub()
            .await?
            .spreadsheets()
            .values_append(value_range, &self.config.spreadsheet_id, sheet_title)
            .value_input_option("USER_ENTERED")
            .insert_data_option("INSERT_ROWS")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetClientError::FailedToAppendRows)
            .attach_printable_lazy(|| format!("Failed to append rows to sheet {}", sheet_title))
    }

    /// Appends a record as a row, laying the fields out in header order.
    #[instrument]
    pub async fn append_record(
        &self,
        sheet_title: &str,
        headers: &[String],
        record: &Record,
    ) -> error_stack::Result<(), SpreadsheetClientError> {
        self.append_row(sheet_title, crate::records::record_to_row(headers, record))
            .await
    }

    /// Raw cell values for a range. A range with no data yields an empty vec;
    /// rows are ragged, trailing empty cells are absent.
    #[instrument]
    pub async fn read_range_values(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetClientError> {
        let response = self
            .hub()
            .await?
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range.as_ref())
            .doit()
            .await
            .change_context(SpreadsheetClientError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch range {}", range))?;

        Ok(response.1.values.unwrap_or_default())
    }

    /// Same as [`read_range_values`](Self::read_range_values), rendered as
    /// display strings.
    #[instrument]
    pub async fn read_range(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<String>>, SpreadsheetClientError> {
        Ok(self.read_range_values(range).await?.into_cell_strings())
    }

    /// Reads a range and maps the first row as field names onto the rest.
    #[instrument]
    pub async fn read_records(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Record>, SpreadsheetClientError> {
        Ok(rows_to_records(self.read_range_values(range).await?))
    }

    #[instrument]
    pub async fn write_range(
        &self,
        range: &A1Notation,
        rows: Vec<Vec<Value>>,
    ) -> error_stack::Result<(), SpreadsheetClientError> {
        let value_range = ValueRange::from_rows(rows);
        self.hub()
            .await?
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, range.as_ref())
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetClientError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write to range {}", range))
    }

    /// Clears values in the range; formatting and the cells themselves stay.
    #[instrument]
    pub async fn clear_range(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<(), SpreadsheetClientError> {
        self.hub()
            .await?
            .spreadsheets()
            .values_clear(
                ClearValuesRequest::default(),
                &self.config.spreadsheet_id,
                range.as_ref(),
            )
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetClientError::FailedToClearRange)
            .attach_printable_lazy(|| format!("Failed to clear range {}", range))
    }

    #[instrument]
    pub async fn list_sheets(
        &self,
    ) -> error_stack::Result<Vec<SheetInfo>, SpreadsheetClientError> {
        let response = self
            .hub()
            .await?
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SpreadsheetClientError::FailedToListSheets)?;

        let sheets = response.1.sheets.unwrap_or_default();
        Ok(sheets
            .into_iter()
            .filter_map(|sheet| {
                let properties = sheet.properties?;
                Some(SheetInfo {
                    id: properties.sheet_id?,
                    title: properties.title?,
                })
            })
            .collect())
    }

    /// Resolves a sheet title to its id. Exact, case-sensitive match.
    #[instrument]
    pub async fn sheet_id(&self, title: &str) -> error_stack::Result<i32, SpreadsheetClientError> {
        let sheets = self.list_sheets().await?;
        sheets
            .iter()
            .find(|sheet| sheet.title == title)
            .map(|sheet| sheet.id)
            .ok_or_else(|| report!(SpreadsheetClientError::SheetNotFound(title.to_owned())))
            .attach_printable_lazy(|| {
                let titles: Vec<&str> = sheets.iter().map(|s| s.title.as_str()).collect();
                format!("Available sheets: {:?}", titles)
            })
    }

    /// Creates a new sheet with the given title and returns its id and title.
    #[instrument]
    pub async fn add_sheet(
        &self,
        title: &str,
    ) -> error_stack::Result<SheetInfo, SpreadsheetClientError> {
        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![Request {
                add_sheet: Some(AddSheetRequest {
                    properties: Some(SheetProperties {
                        title: Some(title.to_owned()),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let response = self
            .hub()
            .await?
            .spreadsheets()
            .batch_update(request, &self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SpreadsheetClientError::FailedToAddSheet)
            .attach_printable_lazy(|| format!("Failed to add sheet {}", title))?;

        let properties = response
            .1
            .replies
            .and_then(|mut replies| replies.pop())
            .and_then(|reply| reply.add_sheet)
            .and_then(|added| added.properties)
            .ok_or_else(|| report!(SpreadsheetClientError::FailedToAddSheet))
            .attach_printable_lazy(|| format!("No sheet properties in reply for {}", title))?;

        match (properties.sheet_id, properties.title) {
            (Some(id), Some(title)) => Ok(SheetInfo { id, title }),
            _ => Err(report!(SpreadsheetClientError::FailedToAddSheet))
                .attach_printable("Reply properties are missing the sheet id or title"),
        }
    }

    /// Deletes the sheet with the given title, resolving it to an id first.
    #[instrument]
    pub async fn delete_sheet(
        &self,
        title: &str,
    ) -> error_stack::Result<(), SpreadsheetClientError> {
        let sheet_id = self.sheet_id(title).await?;

        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![Request {
                delete_sheet: Some(DeleteSheetRequest {
                    sheet_id: Some(sheet_id),
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        self.hub()
            .await?
            .spreadsheets()
            .batch_update(request, &self.config.spreadsheet_id)
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetClientError::FailedToDeleteSheet)
            .attach_printable_lazy(|| format!("Failed to delete sheet {} (id {})", title, sheet_id))
    }
}
