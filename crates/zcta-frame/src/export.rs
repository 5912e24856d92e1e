//! Preparing frames for flat output formats.

use polars::prelude::*;

use crate::cells::cell_text;
use crate::error::Result;

/// Replace every list column with its items joined by `separator`.
///
/// CSV cannot hold nested values, so `["00501", "00544"]` becomes
/// `"00501;00544"`. Null items keep their position as empty strings.
/// Returns the number of columns rewritten.
pub fn join_list_columns(df: &mut DataFrame, separator: &str) -> Result<usize> {
    let list_columns: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| matches!(column.dtype(), DataType::List(_)))
        .map(|column| column.name().clone())
        .collect();

    for name in &list_columns {
        let list = df.column(name.as_str())?.as_materialized_series().list()?;
        let mut joined: Vec<Option<String>> = Vec::with_capacity(list.len());
        for item in list.into_iter() {
            let value = match item {
                Some(series) => Some(join_series(&series, separator)?),
                None => None,
            };
            joined.push(value);
        }
        df.with_column(Column::new(name.clone(), joined))?;
    }
    Ok(list_columns.len())
}

fn join_series(series: &Series, separator: &str) -> Result<String> {
    let mut parts = Vec::with_capacity(series.len());
    for idx in 0..series.len() {
        parts.push(cell_text(series.get(idx)?).unwrap_or_default());
    }
    Ok(parts.join(separator))
}
