//! TypeScript宣言の生成
//!
//! 1キャラクター = 1ファイル。共有の型定義をimportし、
//! その型の定数を1つexportする。

use crate::error::Result;
use crate::types::CompatibilityRecord;
use serde::{Deserialize, Serialize};

/// 生成ファイルが参照する共有型定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeContract {
    /// 型名
    pub type_name: String,
    /// import元（生成ファイルからの相対パス）
    pub import_path: String,
}

impl Default for TypeContract {
    fn default() -> Self {
        Self {
            type_name: "CharacterCompatibility".into(),
            import_path: "../types/types".into(),
        }
    }
}

/// exportする定数名（例: "shelly" → "shellyData"）
pub fn binding_name(identifier: &str) -> String {
    format!("{}Data", identifier)
}

/// 出力ファイル名（例: "shelly" → "shellyData.ts"）
pub fn artifact_file_name(identifier: &str) -> String {
    format!("{}.ts", binding_name(identifier))
}

/// 相性データをTypeScriptの宣言に変換
///
/// JSONは2スペースインデント、末尾改行なし
pub fn render_declaration(
    record: &CompatibilityRecord,
    identifier: &str,
    contract: &TypeContract,
) -> Result<String> {
    let body = serde_json::to_string_pretty(record)?;

    Ok(format!(
        "import {{ {ty} }} from '{path}'\n\nexport const {binding}: {ty} = {body}",
        ty = contract.type_name,
        path = contract.import_path,
        binding = binding_name(identifier),
        body = body,
    ))
}
