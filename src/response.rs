//! Response envelope and the formatter producing it

use http::StatusCode;
use serde::{de::DeserializeOwned, ser::Error as _, Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::{collections::BTreeMap, error::Error as StdError, io};
use tracing::{debug, warn};

/// Content type declared for every response body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Header name carrying [`CONTENT_TYPE_JSON`], cased the way API Gateway clients see it.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

const NOT_BASE64_ENCODED: &str = "false";

/// Representation of the Lambda proxy response
///
/// Every field is textual, including the status code and the base64 flag.
/// Fields serialize in declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Always `"false"`: bodies are plain text
    pub is_base64_encoded: String,
    /// `"200"` or `"400"`
    pub status_code: String,
    /// Encoded result, or the error message
    pub body: String,
    /// Always `{"Content-Type": "application/json"}`
    pub headers: BTreeMap<String, String>,
}

impl Envelope {
    fn new(status: StatusCode, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string());

        Envelope {
            is_base64_encoded: NOT_BASE64_ENCODED.to_string(),
            status_code: status.as_str().to_string(),
            body,
            headers,
        }
    }

    /// Decode the body back into `T`.
    ///
    /// The returned error names the path of the field that failed.
    pub fn json_body<T>(&self) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
    where
        T: DeserializeOwned,
    {
        let deserializer = &mut serde_json::Deserializer::from_str(&self.body);
        serde_path_to_error::deserialize(deserializer)
    }
}

/// Build the envelope for an invocation outcome.
///
/// An error wins over any result: the envelope gets status `400` and the
/// error's message as body. Otherwise the result is encoded with status
/// `200`; an absent result encodes as `null`. Results that cannot be
/// represented as JSON fail instead of producing an envelope.
pub fn respond<T>(err: Option<&dyn StdError>, res: Option<&T>) -> Result<Envelope, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    if let Some(err) = err {
        warn!(error = %err, "responding with error");
        return Ok(Envelope::new(StatusCode::BAD_REQUEST, err.to_string()));
    }

    let body = to_body(&res)?;
    debug!(status = StatusCode::OK.as_u16(), "responding");
    Ok(Envelope::new(StatusCode::OK, body))
}

fn to_body<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(64);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Single-line JSON with `", "` and `": "` separators and non-ASCII text
/// escaped as `\uXXXX`.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
