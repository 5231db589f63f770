//! 相性データの型定義
//!
//! 生成されるTypeScriptの `CharacterCompatibility` と同じ形:
//! - id: 表の行番号（ヘッダー行 = 0）
//! - name: キャラクター名（番号プレフィックス除去済み）
//! - compatibilityScores: 相手キャラクター名 → スコア
//! - explanation: 解説用（生成時は常に空）

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 相性スコア表
///
/// ヘッダーの列順を保ったまま出力するため、HashMapではなくVecで保持する。
/// 同じ名前を再度挿入した場合は位置を変えずに値だけ上書きする。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: Vec<(String, i64)>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// スコアを追加（既存キーは値のみ更新）
    pub fn insert(&mut self, name: impl Into<String>, score: i64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((name, score)),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, score)| *score)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(key, score)| (key.as_str(), *score))
    }
}

impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, score) in &self.entries {
            map.serialize_entry(key, score)?;
        }
        map.end()
    }
}

/// キャラクター1体分の相性データ
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRecord {
    pub id: usize,
    pub name: String,
    pub compatibility_scores: ScoreTable,
    /// 解説（将来用、生成時は空）
    pub explanation: serde_json::Map<String, serde_json::Value>,
}

impl CompatibilityRecord {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }
}
