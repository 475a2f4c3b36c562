use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use gtcg_audit::{Record, Table};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

fn normalize_header(h: &str) -> String {
    h.trim().to_string()
}

fn xlsx_to_string<T: calamine::DataType>(cell: &T) -> String {
    // Prefer semantic date rendering only if the cell is marked as datetime
    // or contains ISO8601 datetime text. Avoid misinterpreting numeric
    // amounts as dates.
    if cell.is_datetime() || cell.is_datetime_iso() {
        if let Some(dt) = cell.as_date() {
            return dt.format("%Y-%m-%d").to_string();
        }
    }
    if let Some(s) = cell.as_string() {
        return s;
    }
    if let Some(i) = cell.as_i64() {
        return i.to_string();
    }
    if let Some(f) = cell.as_f64() {
        if (f.fract()).abs() < f64::EPSILON {
            return format!("{}", f as i64);
        }
        return f.to_string();
    }
    if let Some(b) = cell.get_bool() {
        return b.to_string();
    }
    String::new()
}

fn load_excel(path: &Path) -> Result<Table> {
    let mut wb = open_workbook_auto(path)
        .with_context(|| format!("Mở file Excel thất bại: {}", path.display()))?;
    // Pick first sheet
    let sheet_names = wb.sheet_names().to_owned();
    let name = sheet_names
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("File Excel không có sheet nào"))?;
    let range = wb.worksheet_range(&name)?;

    let mut rows_iter = range.rows();
    let headers_row = rows_iter
        .next()
        .ok_or_else(|| anyhow::anyhow!("Thiếu dòng tiêu đề"))?;
    let headers: Vec<String> = headers_row
        .iter()
        .map(xlsx_to_string)
        .map(|s| normalize_header(&s))
        .collect();

    let mut rows: Vec<Record> = Vec::new();
    for r in rows_iter {
        let mut rec = Record::default();
        for (i, cell) in r.iter().enumerate() {
            if let Some(h) = headers.get(i) {
                rec.set(h, xlsx_to_string(cell));
            }
        }
        // Skip completely empty rows
        if rec.values.values().all(|v| v.trim().is_empty()) {
            continue;
        }
        rows.push(rec);
    }
    Ok(Table { headers, rows })
}

fn load_csv(path: &Path) -> Result<Table> {
    let file =
        File::open(path).with_context(|| format!("Mở file CSV thất bại: {}", path.display()))?;
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);
    let headers = rdr
        .headers()?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();
    let mut rows: Vec<Record> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut out = Record::default();
        for (i, v) in rec.iter().enumerate() {
            if let Some(h) = headers.get(i) {
                out.set(h, v.trim().to_string());
            }
        }
        if out.values.values().all(|v| v.trim().is_empty()) {
            continue;
        }
        rows.push(out);
    }
    Ok(Table { headers, rows })
}

// Text-typed columns (ACC_NO in particular) keep leading zeros: trailing
// ".0" from numeric round-trips is stripped and "nan" placeholders become
// empty text.
fn normalize_text_column(table: &mut Table, col: &str) {
    if !table.has_column(col) {
        return;
    }
    for r in &mut table.rows {
        let v = r.get(col).trim().to_string();
        let v = if v.eq_ignore_ascii_case("nan") {
            String::new()
        } else if let Some(stripped) = v.strip_suffix(".0") {
            if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
                stripped.to_string()
            } else {
                v
            }
        } else {
            v
        };
        r.set(col, v);
    }
}

pub fn load_table(path: &Path, force_text: &[String]) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let mut table = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" => load_excel(path)?,
        "csv" => load_csv(path)?,
        _ => {
            if path.is_file() {
                // Try Excel first
                load_excel(path).or_else(|_| load_csv(path))?
            } else {
                anyhow::bail!("Không hỗ trợ định dạng file: {}", path.display());
            }
        }
    };
    for col in force_text {
        normalize_text_column(&mut table, col);
    }
    Ok(table)
}

/// Load and concatenate several exports into one table. Headers follow the
/// first file; columns seen only in later files are appended.
pub fn load_concat(paths: &[PathBuf], force_text: &[String]) -> Result<Table> {
    let mut merged = Table::default();
    for p in paths {
        let t = load_table(p, force_text)
            .with_context(|| format!("Đọc file thất bại: {}", p.display()))?;
        if merged.headers.is_empty() {
            merged.headers = t.headers.clone();
        } else {
            for h in &t.headers {
                if !merged.headers.contains(h) {
                    merged.headers.push(h.clone());
                }
            }
        }
        merged.rows.extend(t.rows);
    }
    Ok(merged)
}
