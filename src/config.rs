use crate::error::{GenError, Result};
use brawl_compat_common::{NameMap, TypeContract, DEFAULT_MAX_ROWS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カレントディレクトリで自動的に読み込む設定ファイル
pub const CONFIG_FILE_NAME: &str = "brawl-gen.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 相性表CSV
    pub input: PathBuf,
    /// 出力ディレクトリ
    pub output_dir: PathBuf,
    /// CSVの読み込み行数上限
    pub max_rows: usize,
    /// 生成ファイルが参照する型名
    pub type_name: String,
    /// 型定義のimport元
    pub import_path: String,
    /// 追加のキャラクター名対応表（JSON）
    pub aliases: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let contract = TypeContract::default();
        Self {
            input: PathBuf::from("BrawlCharacter.csv"),
            output_dir: PathBuf::from("characters"),
            max_rows: DEFAULT_MAX_ROWS,
            type_name: contract.type_name,
            import_path: contract.import_path,
            aliases: None,
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// 明示されたファイルは存在必須。指定がなければ `brawl-gen.json` があれば読み、
    /// なければデフォルト値。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(GenError::FileNotFound(path.display().to_string()));
                }
                Self::from_file(path)
            }
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 {
            return Err(GenError::Config("maxRows は1以上を指定してください".into()));
        }
        if self.type_name.trim().is_empty() {
            return Err(GenError::Config("typeName が空です".into()));
        }
        Ok(())
    }

    pub fn contract(&self) -> TypeContract {
        TypeContract {
            type_name: self.type_name.clone(),
            import_path: self.import_path.clone(),
        }
    }

    /// 組み込みの対応表に追加分をマージした対応表
    pub fn name_map(&self) -> Result<NameMap> {
        let mut names = NameMap::builtin().clone();

        if let Some(path) = &self.aliases {
            if !path.exists() {
                return Err(GenError::FileNotFound(path.display().to_string()));
            }
            names.merge(&NameMap::from_file(path)?);
        }

        Ok(names)
    }
}
