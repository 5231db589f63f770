//! 相性表CSVパーサー
//!
//! 1行目がヘッダー（先頭セルは無視、残りがキャラクター名）、
//! 2行目以降が「番号. キャラクター名, スコア, スコア, ...」の行列形式CSVを
//! CompatibilityRecordの列に変換する

use crate::error::{Error, Result};
use crate::types::CompatibilityRecord;
use regex::Regex;

/// 読み込む最大行数（元データのCSVに合わせた固定値）
pub const DEFAULT_MAX_ROWS: usize = 87;

lazy_static::lazy_static! {
    /// 先頭の番号プレフィックス（例: "1. ブル"）
    static ref ORDINAL_PREFIX: Regex = Regex::new(r"^[0-9]+\.\s*").unwrap();
}

/// CSV文字列を行×セルの表に変換
///
/// 完全な空行は読み飛ばし、表の行番号にも数えない。
/// `max_rows` 行目より後から始まるレコードは読み込まない。
///
/// # Arguments
/// * `content` - CSVファイルの内容
/// * `max_rows` - 読み込む物理行の上限（1始まり、この行を含む）
pub fn read_table(content: &str, max_rows: usize) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut table = Vec::new();
    for result in reader.records() {
        let record = result?;

        if let Some(position) = record.position() {
            if position.line() > max_rows as u64 {
                break;
            }
        }

        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        table.push(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}

/// ヘッダー行から対戦相手の名前一覧を取り出す
///
/// 先頭セルを捨て、空白のみのセルを除いた残りを順番どおりに返す。
/// 返した一覧のk番目はデータ行のk+1列目に対応する。
pub fn header_names(row: &[String]) -> Vec<String> {
    row.iter()
        .skip(1)
        .filter(|cell| !cell.trim().is_empty())
        .cloned()
        .collect()
}

/// データ行の先頭セルからキャラクター名を取り出す
///
/// 空行（区切り行）や番号だけのセルは `None`
pub fn subject_name(cell: &str) -> Option<String> {
    if cell.trim().is_empty() {
        return None;
    }

    let name = ORDINAL_PREFIX.replace(cell, "");
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// セルをスコアとして解釈
///
/// 先頭の空白と符号の後に続く数字だけを読む（"3点" → 3, "7.5" → 7）。
/// 数字で始まらないセルは `None`。
/// i64に収まらない値も `None` として扱い、スコアから除外する
/// （JavaScriptの `parseInt` は巨大な値も近似値で返すため、ここだけ挙動が異なる）。
pub fn parse_score(cell: &str) -> Option<i64> {
    let s = cell.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let value: i64 = digits[..len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// 表から相性データを順に取り出す
///
/// idは表の行番号（ヘッダー = 0）。読み飛ばした行も番号は消費する。
/// 自分自身の列と、数値として読めないセルは含めない。
pub fn records(table: &[Vec<String>]) -> Result<impl Iterator<Item = CompatibilityRecord> + '_> {
    let (header_row, rows) = table.split_first().ok_or(Error::EmptyTable)?;
    let headers = header_names(header_row);

    Ok(rows
        .iter()
        .enumerate()
        .filter_map(move |(offset, row)| build_record(offset + 1, row, &headers)))
}

/// CSV文字列から相性データを一括で取り出す
pub fn parse_matrix(content: &str, max_rows: usize) -> Result<Vec<CompatibilityRecord>> {
    let table = read_table(content, max_rows)?;
    let parsed: Vec<_> = records(&table)?.collect();
    Ok(parsed)
}

fn build_record(id: usize, row: &[String], headers: &[String]) -> Option<CompatibilityRecord> {
    let name = subject_name(row.first()?)?;
    let mut record = CompatibilityRecord::new(id, name);

    for (index, other) in headers.iter().enumerate() {
        if *other == record.name {
            continue;
        }
        let cell = row.get(index + 1).map(String::as_str).unwrap_or("");
        if let Some(score) = parse_score(cell) {
            record.compatibility_scores.insert(other.as_str(), score);
        }
    }

    Some(record)
}
