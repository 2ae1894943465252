use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use tracing::instrument;

use super::http_client::HttpsConnector;
use crate::{domain::credentials::CredentialBundle, ports::spreadsheet::SpreadsheetError};

/// Read/write access to spreadsheets, plus drive access to open them by id.
pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

/// Builds a service-account authenticator and fetches a first token, so bad credentials
/// fail here instead of on the first spreadsheet call.
#[instrument(skip_all)]
pub async fn auth(
    credentials: &CredentialBundle,
    client: hyper::Client<HttpsConnector>,
) -> error_stack::Result<Authenticator<HttpsConnector>, SpreadsheetError> {
    let secret = oauth2::parse_service_account_key(credentials.as_str())
        .change_context(SpreadsheetError::Authentication)
        .attach_printable("Service account JSON could not be parsed")?;

    let authenticator = oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetError::Authentication)
        .attach_printable("Could not create an authenticator")?;

    authenticator
        .token(&SCOPES)
        .await
        .change_context(SpreadsheetError::Authentication)
        .attach_printable("Service account was not authorized for the requested scopes")?;

    Ok(authenticator)
}
