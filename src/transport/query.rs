use url::Url;

use crate::domain::{Operation, SessionId};

/// Build the GET target for `operation` under `base_url`.
///
/// `session_id` goes first when present; a caller-supplied `session_id` is
/// dropped so the stored token always wins. Parameters are form-encoded in the
/// order given.
pub fn encode_request_url(
    base_url: &Url,
    operation: Operation,
    session_id: Option<&SessionId>,
    params: &[(String, String)],
) -> Result<Url, url::ParseError> {
    let mut url = base_url.join(operation.path())?;
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        if let Some(session_id) = session_id {
            query.append_pair(SessionId::FIELD, session_id.as_str());
        }
        for (key, value) in params {
            if session_id.is_some() && key == SessionId::FIELD {
                continue;
            }
            query.append_pair(key, value);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url)
}

/// Normalise a base URL so relative operation paths join beneath it.
pub fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
