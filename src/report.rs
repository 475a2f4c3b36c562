use anyhow::{Context, Result};
use gtcg_audit::Table;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

pub const SHEET_TTK: &str = "tieu chi 1,2";
pub const SHEET_PHOI: &str = "tieu chi 3";

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

fn truncate_to_bytes(s: &str, max_bytes: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let b = ch.len_utf8();
        if used + b > max_bytes {
            break;
        }
        out.push(ch);
        used += b;
    }
    out
}

/// Write the evaluated tracks into one workbook: "tieu chi 1,2" for the TTK
/// sheet, "tieu chi 3" for the Phôi sheet. Only supplied tracks get sheets.
pub fn write_workbook(ttk: Option<&Table>, phoi: Option<&Table>, output: &Path) -> Result<()> {
    let mut wb = Workbook::new();
    if let Some(t) = ttk {
        let ws = wb.add_worksheet().set_name(SHEET_TTK)?;
        write_sheet(ws, t)?;
    }
    if let Some(t) = phoi {
        let ws = wb.add_worksheet().set_name(SHEET_PHOI)?;
        write_sheet(ws, t)?;
    }
    wb.save(output)
        .with_context(|| format!("Lưu Excel thất bại: {}", output.display()))?;
    Ok(())
}

fn write_sheet(ws: &mut Worksheet, table: &Table) -> Result<()> {
    for (c, h) in table.headers.iter().enumerate() {
        ws.write_string(0, c as u16, h)?;
    }
    for (i, r) in table.rows.iter().enumerate() {
        for (c, h) in table.headers.iter().enumerate() {
            let v = r.get(h);
            // Excel cell strings cap at 32767 characters; keep byte length
            // safe as well.
            let mut safe = truncate_chars(v, 32767);
            if safe.as_bytes().len() > 32767 {
                safe = truncate_to_bytes(&safe, 32767);
            }
            ws.write_string((i + 1) as u32, c as u16, &safe)?;
        }
    }
    Ok(())
}
