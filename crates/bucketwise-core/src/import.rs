//! Transaction file loading
//!
//! Two formats are accepted:
//! - JSON: an array of transactions, same shape as the API body
//! - CSV: header row with `date`, `merchant`, `amount` and optional `id`,
//!   `category` columns (any order, case-insensitive)

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Category, Transaction};

/// Supported transaction file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Load transactions from a `.json` or `.csv` file
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let format = FileFormat::from_path(path).ok_or_else(|| {
        Error::InvalidData(format!(
            "Unsupported transaction file (expected .json or .csv): {}",
            path.display()
        ))
    })?;
    let file = File::open(path)?;

    let transactions = match format {
        FileFormat::Json => parse_json(file)?,
        FileFormat::Csv => parse_csv(file)?,
    };

    debug!(
        path = %path.display(),
        count = transactions.len(),
        "Loaded transactions"
    );
    Ok(transactions)
}

/// Parse a JSON array of transactions
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Column positions resolved from the CSV header
struct Columns {
    id: Option<usize>,
    date: usize,
    merchant: usize,
    amount: usize,
    category: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| Error::InvalidData(format!("Missing column: {}", name)))
        };

        Ok(Self {
            id: find("id"),
            date: require("date")?,
            merchant: require("merchant")?,
            amount: require("amount")?,
            category: find("category"),
        })
    }
}

/// Parse CSV transactions
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = i + 2;

        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .ok_or_else(|| Error::InvalidData(format!("Line {}: missing {}", line, name)))
        };

        let date = parse_date(field(columns.date, "date")?)
            .map_err(|e| Error::InvalidData(format!("Line {}: {}", line, e)))?;
        let merchant = field(columns.merchant, "merchant")?.to_string();
        let amount = parse_amount(field(columns.amount, "amount")?)
            .map_err(|e| Error::InvalidData(format!("Line {}: {}", line, e)))?;

        let id = match columns.id.and_then(|idx| record.get(idx)) {
            Some(s) if !s.is_empty() => Some(
                s.parse::<i64>()
                    .map_err(|_| Error::InvalidData(format!("Line {}: invalid id: {}", line, s)))?,
            ),
            _ => None,
        };

        let category = columns
            .category
            .and_then(|idx| record.get(idx))
            .filter(|s| !s.is_empty())
            .map(Category::from);

        transactions.push(Transaction {
            id,
            date,
            merchant,
            amount,
            category,
        });
    }

    Ok(transactions)
}

/// Parse an ISO date (YYYY-MM-DD)
fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("invalid date: {}", s))
}

/// Parse an amount, tolerating a leading `$` and thousands separators
fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    let cleaned: String = s.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("invalid amount: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bucket;
    use std::io::Write;

    #[test]
    fn test_parse_csv_with_optional_columns() {
        let data = "\
Date,Merchant,Amount,Category
2025-11-01,Rent payment,1500,Needs
2025-11-03,Netflix,$16.00,
2025-11-04,Roth IRA contribution,\"1,200.50\",Future You
";
        let txs = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0].bucket(), Some(Bucket::Needs));
        assert_eq!(txs[1].amount, 16.0);
        assert!(txs[1].category.is_none());
        assert_eq!(txs[2].amount, 1200.5);
        assert_eq!(txs[2].bucket(), Some(Bucket::FutureYou));
        assert!(txs.iter().all(|t| t.id.is_none()));
    }

    #[test]
    fn test_parse_csv_columns_any_order() {
        let data = "amount,merchant,id,date\n20,Netflix,7,2025-11-02\n";
        let txs = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txs[0].id, Some(7));
        assert_eq!(txs[0].merchant, "Netflix");
        assert_eq!(txs[0].date, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let data = "date,amount\n2025-11-02,20\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing column: merchant"));
    }

    #[test]
    fn test_parse_csv_reports_line_of_bad_value() {
        let data = "date,merchant,amount\n2025-11-02,Netflix,20\n11/03/2025,Hulu,12\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 3: invalid date"));
    }

    #[test]
    fn test_parse_json_array() {
        let data = r#"[
            {"id": 1, "date": "2025-11-01", "merchant": "Rent payment", "amount": 1500, "category": "Needs"},
            {"date": "2025-11-03", "merchant": "Netflix", "amount": 16}
        ]"#;
        let txs = parse_json(data.as_bytes()).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].id, Some(1));
        assert!(txs[1].needs_category());
    }

    #[test]
    fn test_load_transactions_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("txns.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "date,merchant,amount\n2025-11-01,Netflix,16").unwrap();

        let txs = load_transactions(&path).unwrap();
        assert_eq!(txs.len(), 1);

        let other = dir.path().join("txns.xlsx");
        File::create(&other).unwrap();
        assert!(matches!(
            load_transactions(&other),
            Err(Error::InvalidData(_))
        ));
    }
}
