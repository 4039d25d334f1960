//! Lenient column decoding
//!
//! DJUCED is loose about column affinity: `length` is declared DATETIME but
//! holds seconds, numbers sometimes arrive as text and empty strings stand
//! in for NULL. These wrappers decode such values the way DJUCED means them.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};

/// Text column; NULL reads as empty, numbers as their decimal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlText(pub String);

impl FromSql for SqlText {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(SqlText(String::new())),
            ValueRef::Integer(i) => Ok(SqlText(i.to_string())),
            ValueRef::Real(r) => Ok(SqlText(r.to_string())),
            ValueRef::Text(_) => value.as_str().map(|s| SqlText(s.to_string())),
            ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

/// Integer column; NULL and empty text read as `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlInt(pub Option<i64>);

impl FromSql for SqlInt {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(SqlInt(None)),
            ValueRef::Integer(i) => Ok(SqlInt(Some(i))),
            ValueRef::Real(r) => Ok(SqlInt(Some(r.trunc() as i64))),
            ValueRef::Text(_) => {
                let text = value.as_str()?.trim();
                if text.is_empty() {
                    return Ok(SqlInt(None));
                }
                match text.parse::<i64>() {
                    Ok(i) => Ok(SqlInt(Some(i))),
                    Err(int_err) => text
                        .parse::<f64>()
                        .map(|r| SqlInt(Some(r.trunc() as i64)))
                        .map_err(|_| FromSqlError::Other(Box::new(int_err))),
                }
            }
            ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

/// Real column; NULL and empty text read as `None`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqlReal(pub Option<f64>);

impl FromSql for SqlReal {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(SqlReal(None)),
            ValueRef::Integer(i) => Ok(SqlReal(Some(i as f64))),
            ValueRef::Real(r) => Ok(SqlReal(Some(r))),
            ValueRef::Text(_) => {
                let text = value.as_str()?.trim();
                if text.is_empty() {
                    return Ok(SqlReal(None));
                }
                text.parse::<f64>()
                    .map(|r| SqlReal(Some(r)))
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}
