use crate::domain::{GatewayError, ParsedResponse};

/// Key that marks a failed call.
const ERROR_KEY: &str = "ERR";

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("malformed response line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },
}

/// Decode a plaintext gateway body made of `Key: Value` lines.
///
/// Blank lines are skipped. The first `ERR` line aborts decoding with the
/// gateway error; anything parsed before it is dropped.
pub fn decode_plain_text_response(body: &str) -> Result<ParsedResponse, DecodeError> {
    let mut parsed = ParsedResponse::new();

    for (idx, raw_line) in body.split('\n').enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = split_key_value(line).ok_or_else(|| DecodeError::MalformedLine {
            line_number: idx + 1,
            line: line.to_owned(),
        })?;

        if key == ERROR_KEY {
            return Err(GatewayError::from_err_value(value).into());
        }

        parsed.push(key, value);
    }

    Ok(parsed)
}

/// Split `Key: value`; the key is a run of ASCII letters.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some((key, value.trim_start()))
}
