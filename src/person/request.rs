use derive_more::Display;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::error::Error;

/// Body of a `POST /person` call. `status` is accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersonRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub person: PersonPayload,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersonPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

#[derive(Debug, Display)]
pub enum DecodeError {
    #[display(fmt = "request body is empty")]
    Empty,
    #[display(fmt = "malformed JSON: {}", _0)]
    Malformed(serde_json::Error),
    #[display(fmt = "expected a JSON object for {}", _0)]
    NotAnObject(&'static str),
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Empty | DecodeError::NotAnObject(_) => None,
            DecodeError::Malformed(e) => Some(e),
        }
    }
}

/// Parses the first JSON value in `body`. Anything after that value is left
/// unread, absent fields keep their zero value and `null` counts as absent.
/// A repeated key keeps its last value.
pub fn decode(body: &[u8]) -> Result<PersonRequest, DecodeError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();

    let value = match values.next() {
        Some(Ok(value)) => value,
        Some(Err(e)) => return Err(DecodeError::Malformed(e)),
        None => return Err(DecodeError::Empty),
    };

    // Derived struct visitors also accept sequences, so both levels are
    // checked for objects before handing over to serde.
    let request = match value {
        Value::Null => return Ok(PersonRequest::default()),
        Value::Object(request) => request,
        _ => return Err(DecodeError::NotAnObject("request")),
    };
    match request.get("person") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(_) => return Err(DecodeError::NotAnObject("person")),
    }

    serde_json::from_value(Value::Object(request)).map_err(DecodeError::Malformed)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
