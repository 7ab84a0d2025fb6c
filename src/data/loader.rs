use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{CATEGORY_COLUMN, ExpenditureDataset, RawRow};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems with an input file. Row-level noise (missing fields,
/// unparseable values) never surfaces here; those rows are dropped.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("Input file missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the expenditure table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – the StatCan export, header row required (recommended)
/// * `.json`    – records orientation, `[{ "REF_DATE": ..., ... }, ...]`
/// * `.parquet` – flat Utf8/Float64 columns with the same names
pub fn load_file(path: &Path) -> Result<ExpenditureDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!(LoadError::UnsupportedExtension(other.to_string())),
    }
}

/// Build the snapshot from raw rows, logging how many were dropped.
fn collect_rows<I: IntoIterator<Item = RawRow>>(rows: I) -> ExpenditureDataset {
    let mut total = 0usize;
    let mut points = Vec::new();
    for row in rows {
        total += 1;
        if let Some(p) = row.into_point() {
            points.push(p);
        }
    }
    log::debug!("retained {} of {total} rows", points.len());
    ExpenditureDataset::from_points(points)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<ExpenditureDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file)
}

/// Parse the table from CSV text.  Header row required; embedded commas use
/// standard CSV quoting (the category header itself contains two).
pub fn read_csv<R: Read>(reader: R) -> Result<ExpenditureDataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?;
    if !headers.iter().any(|h| h == CATEGORY_COLUMN) {
        bail!(LoadError::MissingColumn(CATEGORY_COLUMN));
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize::<RawRow>() {
        match result {
            Ok(row) => rows.push(row),
            // Malformed records (wrong field count etc.) count as rows with
            // missing fields and are dropped.
            Err(e) => log::debug!("skipping malformed CSV record: {e}"),
        }
    }
    Ok(collect_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented export of the same table):
///
/// ```json
/// [
///   {
///     "REF_DATE": "2019",
///     "GEO": "Canada",
///     "Statistic": "Average expenditure per household",
///     "Food expenditures, summary-level categories": "Meat",
///     "VALUE": "1300"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<ExpenditureDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    read_json(&text)
}

/// Parse the table from a JSON records array.
pub fn read_json(text: &str) -> Result<ExpenditureDataset> {
    let rows: Vec<RawRow> = serde_json::from_str(text).context("parsing JSON")?;
    Ok(collect_rows(rows))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing the expenditure table.
///
/// Expected schema: `REF_DATE`, `GEO`, `Statistic` and the category column as
/// Utf8; `VALUE` as Utf8 or Float64/Float32 (numeric exports are common).
fn load_parquet(path: &Path) -> Result<ExpenditureDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let ref_date = column(&batch, "REF_DATE")?;
        let geo = column(&batch, "GEO")?;
        let statistic = column(&batch, "Statistic")?;
        let category = column(&batch, CATEGORY_COLUMN)?;
        let value = column(&batch, "VALUE")?;

        for row in 0..batch.num_rows() {
            rows.push(RawRow {
                ref_date: string_at(ref_date, row),
                geo: string_at(geo, row),
                statistic: string_at(statistic, row),
                category: string_at(category, row),
                value: value_at(value, row),
            });
        }
    }

    Ok(collect_rows(rows))
}

// -- Parquet / Arrow helpers --

/// Look up a required column by name.
fn column<'a>(
    batch: &'a arrow::record_batch::RecordBatch,
    name: &'static str,
) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name))?;
    Ok(batch.column(idx))
}

/// Extract an optional string cell from a Utf8 or LargeUtf8 column.
fn string_at(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|a| a.value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

/// Extract the VALUE cell as text.  Numeric columns are rendered to their
/// decimal form so the row goes through the same coercion as CSV input.
fn value_at(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => string_at(col, row),
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row).to_string()),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| (a.value(row) as f64).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{GEO_FILTER, STATISTIC_FILTER};
    use arrow::array::StringArray;
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    const HEADER: &str =
        "REF_DATE,GEO,Statistic,\"Food expenditures, summary-level categories\",VALUE";

    fn csv_of(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn csv_keeps_only_matching_rows() {
        let text = csv_of(&[
            "2018,Canada,Average expenditure per household,Meat,1200",
            "2019,Canada,Average expenditure per household,Meat,1300",
            "2018,Ontario,Average expenditure per household,Meat,990",
            "2018,Canada,Median expenditure,Meat,1100",
        ]);
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.categories, vec!["Meat"]);
        assert_eq!(ds.years, vec!["2018", "2019"]);
    }

    #[test]
    fn csv_handles_quoted_category_labels() {
        let text = csv_of(&[
            "2018,Canada,Average expenditure per household,\"Fruit, fruit preparations and nuts\",800",
        ]);
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.categories, vec!["Fruit, fruit preparations and nuts"]);
    }

    #[test]
    fn csv_drops_rows_with_missing_or_bad_values() {
        let text = csv_of(&[
            "2018,Canada,Average expenditure per household,Meat,",
            "2018,Canada,Average expenditure per household,Meat,n/a",
            "2018,Canada,Average expenditure per household,,500",
            "2018,Canada,Average expenditure per household,Meat,1200",
        ]);
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.points[0].value, 1200.0);
    }

    #[test]
    fn csv_missing_category_column_is_an_error() {
        let text = "REF_DATE,GEO,Statistic,VALUE\n2018,Canada,Average expenditure per household,1200";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing required column"));
    }

    #[test]
    fn json_records_match_csv_semantics() {
        let text = format!(
            r#"[
                {{"REF_DATE":"2018","GEO":"{geo}","Statistic":"{stat}","Food expenditures, summary-level categories":"Meat","VALUE":"1200"}},
                {{"REF_DATE":"2018","GEO":"Ontario","Statistic":"{stat}","Food expenditures, summary-level categories":"Meat","VALUE":"990"}},
                {{"REF_DATE":"2019","GEO":"{geo}","Statistic":"{stat}","Food expenditures, summary-level categories":"Meat"}}
            ]"#,
            geo = GEO_FILTER,
            stat = STATISTIC_FILTER,
        );
        let ds = read_json(&text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.points[0].date, "2018");
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("table.csv");
        std::fs::write(
            &csv_path,
            csv_of(&["2018,Canada,Average expenditure per household,Meat,1200"]),
        )
        .unwrap();
        assert_eq!(load_file(&csv_path).unwrap().len(), 1);

        let bad_path = dir.path().join("table.xlsx");
        std::fs::write(&bad_path, b"not a table").unwrap();
        let err = load_file(&bad_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn parquet_round_trips_the_same_snapshot() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("REF_DATE", DataType::Utf8, false),
            Field::new("GEO", DataType::Utf8, false),
            Field::new("Statistic", DataType::Utf8, false),
            Field::new(CATEGORY_COLUMN, DataType::Utf8, false),
            Field::new("VALUE", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["2018", "2019", "2018"])),
                Arc::new(StringArray::from(vec!["Canada", "Canada", "Quebec"])),
                Arc::new(StringArray::from(vec![
                    STATISTIC_FILTER,
                    STATISTIC_FILTER,
                    STATISTIC_FILTER,
                ])),
                Arc::new(StringArray::from(vec!["Meat", "Meat", "Meat"])),
                Arc::new(Float64Array::from(vec![Some(1200.0), Some(1300.0), None])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.years, vec!["2018", "2019"]);
        assert_eq!(ds.points[1].value, 1300.0);
    }

    #[test]
    fn parquet_missing_column_is_an_error() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "REF_DATE",
            DataType::Utf8,
            false,
        )]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(StringArray::from(vec!["2018"]))],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing required column"));
    }
}
