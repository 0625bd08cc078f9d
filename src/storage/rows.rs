//! Decoding of database rows into typed records
//!
//! Every decoder fails with [`ExportError::MalformedRow`] when a column is
//! missing, NULL or of an unexpected type. Nothing is defaulted.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tokio_postgres::types::{FromSql, Type};
use tokio_postgres::Row;

use crate::error::{ExportError, ExportResult};
use crate::models::{BalanceRow, SignupRow, TrustRelationRow};

/// Conversion from a raw row of a known query
pub trait FromRow: Sized {
    fn from_row(row: &Row, query: &'static str) -> ExportResult<Self>;
}

impl FromRow for SignupRow {
    fn from_row(row: &Row, query: &'static str) -> ExportResult<Self> {
        Ok(Self {
            safe_address: column(row, query, "safe_address")?,
            is_orga: column(row, query, "is_orga")?,
        })
    }
}

impl FromRow for TrustRelationRow {
    fn from_row(row: &Row, query: &'static str) -> ExportResult<Self> {
        Ok(Self {
            is_identity: column(row, query, "is_identity")?,
            can_send_to_address: column(row, query, "canSendToAddress")?,
            user_address: column(row, query, "userAddress")?,
            limit: numeric_column(row, query, "limit")?,
        })
    }
}

impl FromRow for BalanceRow {
    fn from_row(row: &Row, query: &'static str) -> ExportResult<Self> {
        Ok(Self {
            safe_address: column(row, query, "safe_address")?,
            token: column(row, query, "token")?,
            token_owner: column(row, query, "token_owner")?,
            amount: column(row, query, "amount")?,
        })
    }
}

/// Read a required column
pub(crate) fn column<'r, T>(row: &'r Row, query: &'static str, name: &str) -> ExportResult<T>
where
    T: FromSql<'r>,
{
    row.try_get(name)
        .map_err(|e| ExportError::malformed_row(query, format!("column \"{}\": {}", name, e)))
}

/// Read a required numeric column of any integer, numeric or float type
pub(crate) fn numeric_column(row: &Row, query: &'static str, name: &str) -> ExportResult<Decimal> {
    let ty = column_type(row, query, name)?;
    if ty == Type::INT2 {
        Ok(Decimal::from(column::<i16>(row, query, name)?))
    } else if ty == Type::INT4 {
        Ok(Decimal::from(column::<i32>(row, query, name)?))
    } else if ty == Type::INT8 {
        Ok(Decimal::from(column::<i64>(row, query, name)?))
    } else if ty == Type::NUMERIC {
        column::<Decimal>(row, query, name)
    } else if ty == Type::FLOAT4 {
        float_to_decimal(f64::from(column::<f32>(row, query, name)?), query, name)
    } else if ty == Type::FLOAT8 {
        float_to_decimal(column::<f64>(row, query, name)?, query, name)
    } else {
        Err(ExportError::malformed_row(
            query,
            format!("column \"{}\" has non-numeric type {}", name, ty),
        ))
    }
}

/// Read an optional integer column (used for the block height)
pub(crate) fn optional_integer_column(
    row: &Row,
    query: &'static str,
    name: &str,
) -> ExportResult<Option<i64>> {
    let ty = column_type(row, query, name)?;
    if ty == Type::INT2 {
        Ok(column::<Option<i16>>(row, query, name)?.map(i64::from))
    } else if ty == Type::INT4 {
        Ok(column::<Option<i32>>(row, query, name)?.map(i64::from))
    } else if ty == Type::INT8 {
        column::<Option<i64>>(row, query, name)
    } else if ty == Type::NUMERIC {
        column::<Option<Decimal>>(row, query, name)?
            .map(|value| integer_from_decimal(value, query, name))
            .transpose()
    } else {
        Err(ExportError::malformed_row(
            query,
            format!("column \"{}\" has non-integer type {}", name, ty),
        ))
    }
}

/// Whole numeric value as `i64`; fractions and out-of-range values are malformed
fn integer_from_decimal(value: Decimal, query: &'static str, name: &str) -> ExportResult<i64> {
    if !value.fract().is_zero() {
        return Err(ExportError::malformed_row(
            query,
            format!("column \"{}\" value {} is not an integer", name, value),
        ));
    }
    value.to_i64().ok_or_else(|| {
        ExportError::malformed_row(
            query,
            format!("column \"{}\" value {} is out of range", name, value),
        )
    })
}

fn column_type(row: &Row, query: &'static str, name: &str) -> ExportResult<Type> {
    row.columns()
        .iter()
        .find(|c| c.name() == name)
        .map(|c| c.type_().clone())
        .ok_or_else(|| ExportError::malformed_row(query, format!("missing column \"{}\"", name)))
}

fn float_to_decimal(value: f64, query: &'static str, name: &str) -> ExportResult<Decimal> {
    Decimal::try_from(value).map_err(|e| {
        ExportError::malformed_row(query, format!("column \"{}\" value {}: {}", name, value, e))
    })
}
