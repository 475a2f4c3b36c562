mod config;
mod ingest;
mod report;

use anyhow::{bail, Context, Result};
use clap::Parser;
use gtcg_audit::{evaluate_phoi, evaluate_ttk, Table};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "gtcg-audit",
    version,
    about = "Công cụ kiểm toán Mục 18 - GTCG: thẻ tiết kiệm (TTK) & phôi GTCG",
    long_about = "\
Xử lý kết xuất kho ấn chỉ và xuất một file Excel 2 sheet:\n\
- TTK: đếm số lần in hỏng / in hết dòng theo tài khoản, đánh dấu các ngày in nhiều lần (sheet 'tieu chi 1,2');\n\
- PHÔI: bóc số tờ bìa lô theo tiền tố {SOL}G, đếm phát hành / in hỏng theo lô (sheet 'tieu chi 3');\n\
- Có thể chỉ cung cấp một trong hai file; phần còn lại được bỏ qua và hai phần xử lý độc lập với nhau."
)]
struct Args {
    /// File TTK (Excel .xlsx/.xls hoặc CSV), ví dụ: Muc18_1403_GTCG.xlsx
    #[arg(long, value_name = "FILE")]
    ttk: Option<PathBuf>,

    /// Một hoặc nhiều file PHÔI (gộp chung trước khi xử lý), ví dụ: Muc18_2205_GTCG1_*.xlsx
    #[arg(long, num_args = 0.., value_name = "FILE")]
    phoi: Vec<PathBuf>,

    /// Mã SOL kiểm toán dùng để ghép tiền tố số tờ bìa lô {SOL}G (ví dụ 2205);
    /// ghi đè giá trị trong file cấu hình.
    #[arg(long, value_name = "CODE")]
    sol: Option<String>,

    /// File cấu hình JSON (tuỳ chọn): sol_code, force_text_columns
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Đường dẫn Excel đầu ra
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// In log chi tiết (mặc định tắt; khi thành công chỉ in đường dẫn file đầu ra)
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn run_ttk(path: &Path, force_text: &[String], verbose: bool) -> Result<Table> {
    let data = ingest::load_table(path, force_text)
        .with_context(|| format!("Đọc file TTK thất bại: {}", path.display()))?;
    if verbose {
        eprintln!("TTK: {} dòng dữ liệu", data.rows.len());
    }
    evaluate_ttk(&data).context("Xử lý phần TTK thất bại")
}

fn run_phoi(paths: &[PathBuf], sol: &str, verbose: bool) -> Result<Table> {
    // Giữ nguyên kiểu dữ liệu gốc của file PHÔI, không ép text cột nào.
    let data = ingest::load_concat(paths, &[])?;
    if verbose {
        eprintln!("PHÔI: {} dòng dữ liệu từ {} file", data.rows.len(), paths.len());
    }
    evaluate_phoi(&data, sol).context("Xử lý phần PHÔI thất bại")
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.ttk.is_none() && args.phoi.is_empty() {
        bail!("Cần ít nhất một file đầu vào: --ttk hoặc --phoi");
    }

    let cfg = match &args.config {
        Some(p) => config::load_config(p).context("Đọc file cấu hình thất bại")?,
        None => config::Config::default(),
    };
    let sol = args
        .sol
        .clone()
        .or_else(|| cfg.sol_code.clone())
        .unwrap_or_else(|| "2205".to_string());
    let force_text = cfg
        .force_text_columns
        .clone()
        .unwrap_or_else(|| vec![gtcg_audit::COL_ACC_NO.to_string()]);

    // Hai nhánh độc lập: lỗi một nhánh không chặn nhánh còn lại.
    let ttk_out: Option<Table> = match &args.ttk {
        Some(path) => match run_ttk(path, &force_text, args.verbose) {
            Ok(t) => Some(t),
            Err(e) => {
                eprintln!("Lỗi phần TTK: {e:#}");
                None
            }
        },
        None => {
            if args.verbose {
                eprintln!("Bỏ qua phần TTK vì chưa chọn file.");
            }
            None
        }
    };

    let phoi_out: Option<Table> = if args.phoi.is_empty() {
        if args.verbose {
            eprintln!("Bỏ qua phần PHÔI vì chưa chọn file.");
        }
        None
    } else {
        match run_phoi(&args.phoi, &sol, args.verbose) {
            Ok(t) => Some(t),
            Err(e) => {
                eprintln!("Lỗi phần PHÔI: {e:#}");
                None
            }
        }
    };

    if ttk_out.is_none() && phoi_out.is_none() {
        bail!("Không có kết quả nào để xuất.");
    }

    report::write_workbook(ttk_out.as_ref(), phoi_out.as_ref(), &args.output)
        .with_context(|| format!("Ghi kết quả thất bại: {}", args.output.display()))?;

    println!("{}", args.output.display());
    Ok(())
}
