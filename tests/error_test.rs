//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use brawl_compat_common::{NameMap, TypeContract};
use brawl_compat_gen::error::GenError;
use brawl_compat_gen::generator::{generate, GenerateOptions};
use std::path::Path;
use tempfile::tempdir;

fn options(input: &Path, output_dir: &Path) -> GenerateOptions {
    GenerateOptions {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        max_rows: 87,
        contract: TypeContract::default(),
        names: NameMap::builtin().clone(),
        dry_run: false,
        verbose: false,
    }
}

/// 入力CSVが存在しない場合
#[test]
fn test_missing_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_dir = dir.path().join("characters");

    let result = generate(&options(&dir.path().join("none.csv"), &output_dir));

    assert!(matches!(result, Err(GenError::FileNotFound(_))));
    // 出力ディレクトリも作られない
    assert!(!output_dir.exists());
}

/// 空のCSV（ヘッダー行なし）
#[test]
fn test_empty_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("empty.csv");
    std::fs::write(&input, "").unwrap();

    let result = generate(&options(&input, &dir.path().join("characters")));

    assert!(matches!(
        result,
        Err(GenError::Common(brawl_compat_common::Error::EmptyTable))
    ));
}

/// UTF-8でないCSV
#[test]
fn test_non_utf8_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("sjis.csv");
    std::fs::write(&input, [0x82, 0xa0, 0x2c, 0x82, 0xa2, 0x0a]).unwrap();

    let result = generate(&options(&input, &dir.path().join("characters")));

    assert!(matches!(result, Err(GenError::Io(_))));
}

/// 出力先がファイルで書き込めない場合、処理は中断される
#[test]
fn test_output_dir_is_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("BrawlCharacter.csv");
    std::fs::write(&input, ",ブル\n1. ブル,\n").unwrap();
    let blocker = dir.path().join("characters");
    std::fs::write(&blocker, "not a directory").unwrap();

    let result = generate(&options(&input, &blocker));

    assert!(matches!(result, Err(GenError::Io(_))));
}

/// エラーメッセージ
#[test]
fn test_error_display() {
    let err = GenError::FileNotFound("BrawlCharacter.csv".to_string());
    assert_eq!(format!("{}", err), "ファイルが見つかりません: BrawlCharacter.csv");

    let err = GenError::Config("maxRows".to_string());
    assert!(format!("{}", err).contains("設定エラー"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GenError = io_err.into();

    assert!(matches!(err, GenError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let err: GenError = brawl_compat_common::Error::EmptyTable.into();

    assert!(matches!(err, GenError::Common(_)));
    assert_eq!(format!("{}", err), "CSV has no header row");
}
