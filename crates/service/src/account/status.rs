use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status codes carried in the response envelope.
///
/// Only `Bad`, `NotFound`, `Internal` and `Ok` are produced by the lookup;
/// the rest are reserved for sibling operations. Serialized as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum ReturnCode {
    Ok,
    Created,
    Accepted,
    Bad,
    Forbidden,
    NotFound,
    NotAllowed,
    Internal,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown return code: {0}")]
pub struct UnknownReturnCode(pub u16);

impl ReturnCode {
    pub fn code(self) -> u16 {
        match self {
            ReturnCode::Ok => 200,
            ReturnCode::Created => 201,
            ReturnCode::Accepted => 202,
            ReturnCode::Bad => 400,
            ReturnCode::Forbidden => 403,
            ReturnCode::NotFound => 404,
            ReturnCode::NotAllowed => 405,
            ReturnCode::Internal => 500,
        }
    }

    pub fn is_success(self) -> bool {
        self.code() < 300
    }
}

impl From<ReturnCode> for u16 {
    fn from(code: ReturnCode) -> Self { code.code() }
}

impl TryFrom<u16> for ReturnCode {
    type Error = UnknownReturnCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            200 => ReturnCode::Ok,
            201 => ReturnCode::Created,
            202 => ReturnCode::Accepted,
            400 => ReturnCode::Bad,
            403 => ReturnCode::Forbidden,
            404 => ReturnCode::NotFound,
            405 => ReturnCode::NotAllowed,
            500 => ReturnCode::Internal,
            other => return Err(UnknownReturnCode(other)),
        })
    }
}
