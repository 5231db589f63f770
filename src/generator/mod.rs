//! キャラクター別データファイルの生成
//!
//! CSV読み込み → 表の解析 → 1行ずつ名前変換・宣言生成・書き込み。
//! 途中で失敗した場合、それまでに書いたファイルは残る。

use crate::config::Config;
use crate::error::{GenError, Result};
use brawl_compat_common::{artifact_file_name, parser, render_declaration, NameMap, TypeContract};
use std::path::{Path, PathBuf};

/// 生成処理の入力
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub max_rows: usize,
    pub contract: TypeContract,
    pub names: NameMap,
    /// ファイルを書き込まない
    pub dry_run: bool,
    /// 対応表にない名前を警告する
    pub verbose: bool,
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            input: config.input.clone(),
            output_dir: config.output_dir.clone(),
            max_rows: config.max_rows,
            contract: config.contract(),
            names: config.name_map()?,
            dry_run: false,
            verbose: false,
        })
    }
}

/// 生成した1ファイル分の情報
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub id: usize,
    pub name: String,
    pub identifier: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub files: Vec<GeneratedFile>,
    /// 対応表になく小文字化で識別子を決めた名前
    pub fallbacks: Vec<String>,
}

impl GenerationSummary {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

pub fn generate(options: &GenerateOptions) -> Result<GenerationSummary> {
    if !options.input.exists() {
        return Err(GenError::FileNotFound(options.input.display().to_string()));
    }

    let content = std::fs::read_to_string(&options.input)?;
    let table = parser::read_table(&content, options.max_rows)?;
    let records = parser::records(&table)?;

    if !options.dry_run {
        ensure_output_dir(&options.output_dir)?;
    }

    let mut summary = GenerationSummary::default();

    for record in records {
        let identifier = options.names.resolve(&record.name);
        if !options.names.is_known(&record.name) {
            if options.verbose {
                eprintln!("⚠ 対応表にない名前: {} → {}", record.name, identifier);
            }
            summary.fallbacks.push(record.name.clone());
        }

        let declaration = render_declaration(&record, &identifier, &options.contract)?;
        let file_name = artifact_file_name(&identifier);
        let path = options.output_dir.join(&file_name);

        if options.dry_run {
            println!("Would generate: {} ({})", record.name, file_name);
        } else {
            std::fs::write(&path, declaration)?;
            println!("Generated: {} ({})", record.name, file_name);
        }

        summary.files.push(GeneratedFile {
            id: record.id,
            name: record.name,
            identifier,
            path,
        });
    }

    Ok(summary)
}

/// 出力ディレクトリを作成（既にあれば何もしない）
fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
