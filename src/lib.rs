//! GTCG inventory audit rules: TTK and Phôi evaluation (Rust)
//!
//! Port of the "Mục 18 - GTCG" review-worksheet logic.
//! See DESIGN.md for the grouping rules and scope decisions.

use chrono::{Days, NaiveDate};
use std::cmp::Ordering;
use std::collections::HashMap;

// Input columns, header names as exported by the core banking system.
pub const COL_ACC_NO: &str = "ACC_NO";
pub const COL_TRAN_DATE: &str = "INVT_TRAN_DATE";
pub const COL_SRL_NUM: &str = "INVT_SRL_NUM";
pub const COL_PASSBOOK_STATUS: &str = "PASSBOOK_STATUS";
pub const COL_LOCN_TO: &str = "INVT_LOCN_CODE_TO";
pub const COL_XFER_PARTICULAR: &str = "INVT_XFER_PARTICULAR";

// Review columns appended by `evaluate_ttk`; header text kept verbatim
// from the audit worksheet.
pub const COL_TTK_FAIL_COUNT: &str = "Số lần in hỏng";
pub const COL_TTK_FAIL_DAILY: &str = "TTK in hỏng nhiều lần trong 01 ngày";
pub const COL_TTK_EXHAUST_COUNT: &str = "Số lần in hết dòng";
pub const COL_TTK_EXHAUST_DAILY: &str = "TTK in hết dòng nhiều lần trong 01 ngày";
pub const COL_TTK_MIXED: &str = "TTK vừa in hỏng vừa in hết dòng trong 01 ngày";

// Review columns appended by `evaluate_phoi`.
pub const COL_PHOI_UNASSIGNED: &str = "(1) Phôi hỏng không gắn số";
pub const COL_PHOI_ISSUE_COUNT: &str = "(2) Số lần phát hành";
pub const COL_PHOI_ISSUE_DAILY: &str = "(3) PH nhiều lần trong 1 ngày";
pub const COL_PHOI_FAIL_COUNT: &str = "(4) Số lần in hỏng";
pub const COL_PHOI_FAIL_DAILY: &str = "(5) In hỏng nhiều lần trong 1 ngày";
pub const COL_PHOI_COMPOUND: &str = "(6) PH nhiều lần + có in hỏng";

#[derive(thiserror::Error, Debug)]
pub enum AuditError {
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// One row of an inventory export, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub values: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, col: &str) -> &str {
        self.values.get(col).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, col: &str, value: impl Into<String>) {
        self.values.insert(col.to_string(), value.into());
    }
}

/// Column-named table. Evaluators treat it as immutable and return a new
/// table with the review columns appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    fn require_columns(&self, cols: &[&str]) -> Result<(), AuditError> {
        for c in cols {
            if !self.has_column(c) {
                return Err(AuditError::MissingColumn((*c).to_string()));
            }
        }
        Ok(())
    }
}

/// Lenient date parsing: common text formats plus spreadsheet day serials.
/// Unparseable values yield `None` (unknown date); callers keep such rows
/// out of day-level grouping instead of failing.
pub fn parse_date_flex(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    const FORMATS: &[&str] = &[
        "%Y-%m-%d", "%Y/%m/%d", "%Y%m%d",
        "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S",
        "%m/%d/%Y", "%m/%d/%Y %H:%M:%S",
        "%d-%b-%y", "%d-%b-%Y",
    ];
    for f in FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return Some(d);
        }
    }
    // Excel day serial, anchored at 1899-12-30. The window 20000..=60000
    // covers 1954..2064 and keeps plain amounts from being read as dates.
    if let Ok(n) = s.parse::<f64>() {
        if (20000.0..=60000.0).contains(&n) {
            return NaiveDate::from_ymd_opt(1899, 12, 30)
                .and_then(|base| base.checked_add_days(Days::new(n.trunc() as u64)));
        }
    }
    None
}

/// Normalize a date-like column; same length as the input, `None` per
/// unparseable element.
pub fn normalize_dates<'a, I>(values: I) -> Vec<Option<NaiveDate>>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().map(parse_date_flex).collect()
}

/// First maximal token of `text` starting with `prefix`, ending before the
/// next whitespace or '/'. Matching is literal substring, never fuzzy.
pub fn extract_lot(text: &str, prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    let start = text.find(prefix)?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

fn flag(on: bool) -> &'static str {
    if on { "X" } else { "" }
}

fn with_appended(headers: &[String], extra: &[&str]) -> Vec<String> {
    let mut out = headers.to_vec();
    for h in extra {
        if !out.iter().any(|x| x == h) {
            out.push((*h).to_string());
        }
    }
    out
}

fn parse_int_like(s: &str) -> Option<i64> {
    let t = s.trim().replace(',', "");
    if t.is_empty() {
        return None;
    }
    if t.chars().all(|ch| ch.is_ascii_digit() || ch == '-') {
        return t.parse::<i64>().ok();
    }
    None
}

// Numeric-aware ordering for serial numbers; non-numeric values sort after
// numeric ones, then lexicographically.
fn cmp_serial(a: &str, b: &str) -> Ordering {
    match (parse_int_like(a), parse_int_like(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn is_print_failure(r: &Record) -> bool {
    r.get(COL_PASSBOOK_STATUS).trim() == "F" && r.get(COL_LOCN_TO).trim() == "IS"
}

fn is_line_exhaustion(r: &Record) -> bool {
    r.get(COL_PASSBOOK_STATUS).trim() == "U" && r.get(COL_LOCN_TO).trim() == "IS"
}

/// Passbook (TTK) print-anomaly evaluation.
///
/// Appends five review columns. Counts run over the whole record set per
/// account and are broadcast to every row of that account; the per-day
/// flags mark every row sharing an (account, day) key that accumulated two
/// or more matching events. Rows with unknown dates never carry day flags.
pub fn evaluate_ttk(input: &Table) -> Result<Table, AuditError> {
    input.require_columns(&[COL_ACC_NO, COL_TRAN_DATE, COL_PASSBOOK_STATUS, COL_LOCN_TO])?;

    let mut rows = input.rows.clone();
    for r in &mut rows {
        let acc = r.get(COL_ACC_NO).trim().to_string();
        r.set(COL_ACC_NO, acc);
    }
    // Stable ordering by serial number when the column exists; affects row
    // order in the output only, never the aggregates.
    if input.has_column(COL_SRL_NUM) {
        rows.sort_by(|a, b| cmp_serial(a.get(COL_SRL_NUM), b.get(COL_SRL_NUM)));
    }

    let dates = normalize_dates(rows.iter().map(|r| r.get(COL_TRAN_DATE)));

    // Pass 1: per-account totals and per-(account, day) event counts.
    let mut fail_total: HashMap<String, u32> = HashMap::new();
    let mut exhaust_total: HashMap<String, u32> = HashMap::new();
    let mut fail_daily: HashMap<(String, NaiveDate), u32> = HashMap::new();
    let mut exhaust_daily: HashMap<(String, NaiveDate), u32> = HashMap::new();
    for (i, r) in rows.iter().enumerate() {
        let acc = r.get(COL_ACC_NO);
        if is_print_failure(r) {
            *fail_total.entry(acc.to_string()).or_insert(0) += 1;
            if let Some(d) = dates[i] {
                *fail_daily.entry((acc.to_string(), d)).or_insert(0) += 1;
            }
        }
        if is_line_exhaustion(r) {
            *exhaust_total.entry(acc.to_string()).or_insert(0) += 1;
            if let Some(d) = dates[i] {
                *exhaust_daily.entry((acc.to_string(), d)).or_insert(0) += 1;
            }
        }
    }

    // Pass 2: annotate every row by key lookup.
    for (i, r) in rows.iter_mut().enumerate() {
        let acc = r.get(COL_ACC_NO).to_string();
        let fails = fail_total.get(&acc).copied().unwrap_or(0);
        let exhausts = exhaust_total.get(&acc).copied().unwrap_or(0);
        let day_fails = dates[i]
            .and_then(|d| fail_daily.get(&(acc.clone(), d)).copied())
            .unwrap_or(0);
        let day_exhausts = dates[i]
            .and_then(|d| exhaust_daily.get(&(acc.clone(), d)).copied())
            .unwrap_or(0);

        r.set(COL_TTK_FAIL_COUNT, fails.to_string());
        r.set(COL_TTK_FAIL_DAILY, flag(day_fails >= 2));
        r.set(COL_TTK_EXHAUST_COUNT, exhausts.to_string());
        r.set(COL_TTK_EXHAUST_DAILY, flag(day_exhausts >= 2));
        // The (account, day) group sums of the broadcast counts are both
        // positive exactly when both per-account totals are positive.
        r.set(COL_TTK_MIXED, flag(dates[i].is_some() && fails > 0 && exhausts > 0));

        if let Some(d) = dates[i] {
            r.set(COL_TRAN_DATE, d.format("%m/%d/%Y").to_string());
        }
    }

    let headers = with_appended(
        &input.headers,
        &[
            COL_TTK_FAIL_COUNT,
            COL_TTK_FAIL_DAILY,
            COL_TTK_EXHAUST_COUNT,
            COL_TTK_EXHAUST_DAILY,
            COL_TTK_MIXED,
        ],
    );
    Ok(Table { headers, rows })
}

/// Certificate blank (Phôi) issuance/spoilage evaluation.
///
/// The stock-lot key is extracted from the transfer particulars with the
/// `{sol}G` prefix. Issuance and failure counts run per lot over the whole
/// record set and are broadcast to every row of that lot; per-day flags
/// work on (lot, day) keys. The lot and day keys stay internal, they are
/// not emitted as columns.
pub fn evaluate_phoi(input: &Table, sol_code: &str) -> Result<Table, AuditError> {
    let sol = sol_code.trim();
    if sol.is_empty() {
        return Err(AuditError::InvalidInput("SOL code is empty".to_string()));
    }
    input.require_columns(&[COL_XFER_PARTICULAR, COL_TRAN_DATE, COL_LOCN_TO])?;
    let prefix = format!("{sol}G");

    let mut rows = input.rows.clone();
    let dates = normalize_dates(rows.iter().map(|r| r.get(COL_TRAN_DATE)));
    let lots: Vec<Option<String>> = rows
        .iter()
        .map(|r| extract_lot(r.get(COL_XFER_PARTICULAR), &prefix))
        .collect();

    // Pass 1: per-lot totals and per-(lot, day) issuance counts.
    let mut issue_total: HashMap<String, u32> = HashMap::new();
    let mut fail_total: HashMap<String, u32> = HashMap::new();
    let mut issue_daily: HashMap<(String, NaiveDate), u32> = HashMap::new();
    for (i, r) in rows.iter().enumerate() {
        let Some(lot) = &lots[i] else { continue };
        let dest = r.get(COL_LOCN_TO).trim();
        if dest == "IS" {
            *issue_total.entry(lot.clone()).or_insert(0) += 1;
            if let Some(d) = dates[i] {
                *issue_daily.entry((lot.clone(), d)).or_insert(0) += 1;
            }
        }
        if dest == "FAIL" || dest == "FAIL PRINT" {
            *fail_total.entry(lot.clone()).or_insert(0) += 1;
        }
    }
    // Failed-print day groups only count rows whose lot already shows two
    // or more failures overall.
    let mut fail_daily: HashMap<(String, NaiveDate), u32> = HashMap::new();
    for (i, r) in rows.iter().enumerate() {
        let Some(lot) = &lots[i] else { continue };
        if r.get(COL_LOCN_TO).trim() != "FAIL PRINT" {
            continue;
        }
        if fail_total.get(lot).copied().unwrap_or(0) < 2 {
            continue;
        }
        if let Some(d) = dates[i] {
            *fail_daily.entry((lot.clone(), d)).or_insert(0) += 1;
        }
    }

    // Pass 2: annotate every row by key lookup.
    for (i, r) in rows.iter_mut().enumerate() {
        let dest = r.get(COL_LOCN_TO).trim().to_string();
        let particulars = r.get(COL_XFER_PARTICULAR).to_string();
        let issues = lots[i]
            .as_ref()
            .and_then(|l| issue_total.get(l))
            .copied()
            .unwrap_or(0);
        let fails = lots[i]
            .as_ref()
            .and_then(|l| fail_total.get(l))
            .copied()
            .unwrap_or(0);
        let day_issues = lots[i]
            .as_ref()
            .zip(dates[i])
            .and_then(|(l, d)| issue_daily.get(&(l.clone(), d)))
            .copied()
            .unwrap_or(0);
        let day_fails = lots[i]
            .as_ref()
            .zip(dates[i])
            .and_then(|(l, d)| fail_daily.get(&(l.clone(), d)))
            .copied()
            .unwrap_or(0);

        r.set(
            COL_PHOI_UNASSIGNED,
            flag(dest.contains("FAIL") && !particulars.contains(&prefix)),
        );
        r.set(COL_PHOI_ISSUE_COUNT, issues.to_string());
        r.set(COL_PHOI_ISSUE_DAILY, flag(dest == "IS" && day_issues >= 2));
        r.set(COL_PHOI_FAIL_COUNT, fails.to_string());
        r.set(
            COL_PHOI_FAIL_DAILY,
            flag(dest == "FAIL PRINT" && fails >= 2 && day_fails >= 2),
        );
        r.set(COL_PHOI_COMPOUND, flag(issues > 1 && fails > 0));
    }

    let headers = with_appended(
        &input.headers,
        &[
            COL_PHOI_UNASSIGNED,
            COL_PHOI_ISSUE_COUNT,
            COL_PHOI_ISSUE_DAILY,
            COL_PHOI_FAIL_COUNT,
            COL_PHOI_FAIL_DAILY,
            COL_PHOI_COMPOUND,
        ],
    );
    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let rows = rows
            .iter()
            .map(|vals| {
                let mut r = Record::default();
                for (h, v) in headers.iter().zip(vals.iter()) {
                    r.set(h, *v);
                }
                r
            })
            .collect();
        Table { headers, rows }
    }

    fn col(t: &Table, name: &str) -> Vec<String> {
        t.rows.iter().map(|r| r.get(name).to_string()).collect()
    }

    #[test]
    fn parse_date_flex_accepts_text_and_serials() {
        assert_eq!(parse_date_flex("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date_flex("01-FEB-24"), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(parse_date_flex("03/15/2024"), NaiveDate::from_ymd_opt(2024, 3, 15));
        // Excel serial for 2024-01-01
        assert_eq!(parse_date_flex("45292"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_date_flex(""), None);
        assert_eq!(parse_date_flex("khong phai ngay"), None);
        // Amount-like numbers stay outside the serial window
        assert_eq!(parse_date_flex("1234.56"), None);
    }

    #[test]
    fn lot_extraction_stops_at_slash_or_whitespace() {
        assert_eq!(extract_lot("2205G001234/XYZ", "2205G").as_deref(), Some("2205G001234"));
        assert_eq!(extract_lot("cap phoi 2205G77 so 1", "2205G").as_deref(), Some("2205G77"));
        assert_eq!(extract_lot("khong co so to bia lo", "2205G"), None);
        assert_eq!(extract_lot("2205G9", "2205G").as_deref(), Some("2205G9"));
    }

    #[test]
    fn ttk_failure_count_is_broadcast_per_account() {
        let t = table(
            &[COL_ACC_NO, COL_TRAN_DATE, COL_PASSBOOK_STATUS, COL_LOCN_TO],
            &[
                &["001234", "2024-03-01", "F", "IS"],
                &["001234", "2024-03-05", "P", "IS"],
                &["001234", "2024-03-06", "F", "IS"],
                &["000777", "2024-03-01", "F", "HO"],
            ],
        );
        let out = evaluate_ttk(&t).unwrap();
        // Same value on every row of the account, including non-failed ones;
        // wrong destination never counts.
        assert_eq!(col(&out, COL_TTK_FAIL_COUNT), vec!["2", "2", "2", "0"]);
    }

    #[test]
    fn ttk_daily_failure_flag_marks_every_row_of_the_day() {
        let t = table(
            &[COL_ACC_NO, COL_TRAN_DATE, COL_PASSBOOK_STATUS, COL_LOCN_TO],
            &[
                &["001234", "2024-03-01", "F", "IS"],
                &["001234", "2024-03-01", "F", "IS"],
                &["001234", "2024-03-01", "P", "IS"],
                &["001234", "2024-03-02", "F", "IS"],
            ],
        );
        let out = evaluate_ttk(&t).unwrap();
        assert_eq!(col(&out, COL_TTK_FAIL_DAILY), vec!["X", "X", "X", ""]);
        assert_eq!(col(&out, COL_TTK_FAIL_COUNT), vec!["3", "3", "3", "3"]);
    }

    #[test]
    fn ttk_three_failures_same_day_all_flagged() {
        let t = table(
            &[COL_ACC_NO, COL_TRAN_DATE, COL_PASSBOOK_STATUS, COL_LOCN_TO],
            &[
                &["001234", "2024-04-10", "F", "IS"],
                &["001234", "2024-04-10", "F", "IS"],
                &["001234", "2024-04-10", "F", "IS"],
            ],
        );
        let out = evaluate_ttk(&t).unwrap();
        assert_eq!(col(&out, COL_TTK_FAIL_COUNT), vec!["3", "3", "3"]);
        assert_eq!(col(&out, COL_TTK_FAIL_DAILY), vec!["X", "X", "X"]);
    }

    #[test]
    fn ttk_mixed_flag_requires_both_failure_and_exhaustion() {
        let t = table(
            &[COL_ACC_NO, COL_TRAN_DATE, COL_PASSBOOK_STATUS, COL_LOCN_TO],
            &[
                &["111", "2024-05-01", "F", "IS"],
                &["222", "2024-05-01", "F", "IS"],
                &["222", "2024-05-01", "U", "IS"],
            ],
        );
        let out = evaluate_ttk(&t).unwrap();
        assert_eq!(col(&out, COL_TTK_MIXED), vec!["", "X", "X"]);
        assert_eq!(col(&out, COL_TTK_EXHAUST_COUNT), vec!["0", "1", "1"]);
    }

    #[test]
    fn ttk_orders_by_serial_and_renders_dates() {
        let t = table(
            &[COL_ACC_NO, COL_TRAN_DATE, COL_SRL_NUM, COL_PASSBOOK_STATUS, COL_LOCN_TO],
            &[
                &["9", "khong ro", "10", "F", "IS"],
                &["9", "2024-01-31", "2", "F", "IS"],
            ],
        );
        let out = evaluate_ttk(&t).unwrap();
        assert_eq!(out.rows[0].get(COL_SRL_NUM), "2");
        assert_eq!(out.rows[0].get(COL_TRAN_DATE), "01/31/2024");
        // Unparseable dates keep their original text and carry no day flag.
        assert_eq!(out.rows[1].get(COL_TRAN_DATE), "khong ro");
        assert_eq!(out.rows[1].get(COL_TTK_FAIL_DAILY), "");
    }

    #[test]
    fn ttk_missing_column_is_reported() {
        let t = table(&[COL_ACC_NO, COL_TRAN_DATE], &[]);
        let err = evaluate_ttk(&t).unwrap_err();
        assert!(matches!(err, AuditError::MissingColumn(c) if c == COL_PASSBOOK_STATUS));
    }

    #[test]
    fn phoi_unassigned_spoilage_flag() {
        let t = table(
            &[COL_XFER_PARTICULAR, COL_TRAN_DATE, COL_LOCN_TO],
            &[
                &["xuat huy phoi hong", "2024-05-02", "FAIL PRINT"],
                &["in hong 2205G000111", "2024-05-02", "FAIL PRINT"],
                &["phat hanh binh thuong", "2024-05-02", "IS"],
            ],
        );
        let out = evaluate_phoi(&t, "2205").unwrap();
        assert_eq!(col(&out, COL_PHOI_UNASSIGNED), vec!["X", "", ""]);
    }

    #[test]
    fn phoi_issue_counts_daily_and_compound_flags() {
        let t = table(
            &[COL_XFER_PARTICULAR, COL_TRAN_DATE, COL_LOCN_TO],
            &[
                &["2205G100 quyen 1", "2024-06-01", "IS"],
                &["2205G100 quyen 2", "2024-06-01", "IS"],
                &["2205G100 in hong", "2024-06-02", "FAIL PRINT"],
            ],
        );
        let out = evaluate_phoi(&t, "2205").unwrap();
        // Per-lot counts broadcast across dates and destinations.
        assert_eq!(col(&out, COL_PHOI_ISSUE_COUNT), vec!["2", "2", "2"]);
        assert_eq!(col(&out, COL_PHOI_FAIL_COUNT), vec!["1", "1", "1"]);
        // Day flag only on issuance rows of the doubled (lot, day).
        assert_eq!(col(&out, COL_PHOI_ISSUE_DAILY), vec!["X", "X", ""]);
        // One failure in total: no daily failure flag anywhere.
        assert_eq!(col(&out, COL_PHOI_FAIL_DAILY), vec!["", "", ""]);
        // Issuance > 1 and failure > 0 hold for every row of the lot.
        assert_eq!(col(&out, COL_PHOI_COMPOUND), vec!["X", "X", "X"]);
    }

    #[test]
    fn phoi_daily_failure_flag_needs_two_failed_prints_same_day() {
        let t = table(
            &[COL_XFER_PARTICULAR, COL_TRAN_DATE, COL_LOCN_TO],
            &[
                &["2205G200 to 1", "2024-07-01", "FAIL PRINT"],
                &["2205G200 to 2", "2024-07-01", "FAIL PRINT"],
                &["2205G300 to 1", "2024-07-01", "FAIL PRINT"],
                &["2205G300 to 2", "2024-07-01", "FAIL"],
            ],
        );
        let out = evaluate_phoi(&t, "2205").unwrap();
        // Lot 300 has two failures overall but only one FAIL PRINT that day.
        assert_eq!(col(&out, COL_PHOI_FAIL_DAILY), vec!["X", "X", "", ""]);
        assert_eq!(col(&out, COL_PHOI_FAIL_COUNT), vec!["2", "2", "2", "2"]);
    }

    #[test]
    fn phoi_rejects_empty_sol_and_missing_columns() {
        let t = table(&[COL_XFER_PARTICULAR, COL_TRAN_DATE, COL_LOCN_TO], &[]);
        assert!(matches!(
            evaluate_phoi(&t, "  ").unwrap_err(),
            AuditError::InvalidInput(_)
        ));
        let t2 = table(&[COL_XFER_PARTICULAR, COL_TRAN_DATE], &[]);
        assert!(matches!(
            evaluate_phoi(&t2, "2205").unwrap_err(),
            AuditError::MissingColumn(c) if c == COL_LOCN_TO
        ));
    }

    #[test]
    fn evaluators_are_idempotent_on_their_input() {
        let t = table(
            &[COL_ACC_NO, COL_TRAN_DATE, COL_PASSBOOK_STATUS, COL_LOCN_TO],
            &[
                &["001234", "2024-03-01", "F", "IS"],
                &["001234", "2024-03-01", "U", "IS"],
            ],
        );
        assert_eq!(evaluate_ttk(&t).unwrap(), evaluate_ttk(&t).unwrap());

        let p = table(
            &[COL_XFER_PARTICULAR, COL_TRAN_DATE, COL_LOCN_TO],
            &[
                &["2205G100", "2024-06-01", "IS"],
                &["2205G100", "2024-06-01", "FAIL"],
            ],
        );
        assert_eq!(
            evaluate_phoi(&p, "2205").unwrap(),
            evaluate_phoi(&p, "2205").unwrap()
        );
    }
}
