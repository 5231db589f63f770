//! キャラクター名変換モジュール
//!
//! 日本語の表示名をファイル名・変数名に使える英語の識別子に変換する。
//! 表にない名前は小文字化した名前をそのまま使う。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 組み込みのキャラクター名対応表（表示名, 識別子）
const CHARACTER_NAMES: &[(&str, &str)] = &[
    ("シェリー", "shelly"),
    ("ニタ", "nita"),
    ("コルト", "colt"),
    ("ブル", "bull"),
    ("ブロック", "brock"),
    ("エルプリモ", "elPrimo"),
    ("バーリー", "barley"),
    ("ポコ", "poco"),
    ("ローサ", "rosa"),
    ("ジェシー", "jessie"),
    ("ダイナマイク", "dynamike"),
    ("ティック", "tick"),
    ("8ビット", "eightBit"),
    ("リコ", "rico"),
    ("ダリル", "darryl"),
    ("ペニー", "penny"),
    ("カール", "carl"),
    ("ジャッキー", "jacky"),
    ("ガス", "gus"),
    ("ボウ", "bo"),
    ("Emz", "emz"),
    ("ストゥー", "stu"),
    ("エリザベス", "piper"),
    ("パム", "pam"),
    ("フランケン", "frank"),
    ("ビビ", "bibi"),
    ("ビー", "bea"),
    ("ナーニ", "nani"),
    ("エドガー", "edgar"),
    ("グリフ", "griff"),
    ("グロム", "grom"),
    ("ボニー", "bonnie"),
    ("ゲイル", "gale"),
    ("コレット", "colette"),
    ("ベル", "belle"),
    ("アッシュ", "ash"),
    ("ローラ", "lola"),
    ("サム", "sam"),
    ("マンディ", "mandy"),
    ("メイジー", "maisie"),
    ("ハンク", "hank"),
    ("パール", "pearl"),
    ("ラリー&ローリー", "larryandLawrie"),
    ("アンジェロ", "angelo"),
    ("ベリー", "berry"),
    ("シェイド", "shade"),
    ("モーティス", "mortis"),
    ("タラ", "tara"),
    ("ジーン", "gene"),
    ("MAX", "max"),
    ("ミスターP", "mrp"),
    ("スプラウト", "sprout"),
    ("バイロン", "byron"),
    ("スクウィーク", "squeak"),
    ("ルー", "lou"),
    ("ラフス", "ruffs"),
    ("バズ", "buzz"),
    ("ファング", "fang"),
    ("イヴ", "eve"),
    ("ジャネット", "janet"),
    ("オーティス", "otis"),
    ("バスター", "buster"),
    ("グレイ", "gray"),
    ("R-T", "rt"),
    ("ウィロー", "willow"),
    ("ダグ", "doug"),
    ("チャック", "chuck"),
    ("チャーリー", "charlie"),
    ("ミコ", "mico"),
    ("メロディー", "melodie"),
    ("リリー", "lily"),
    ("クランシー", "clancy"),
    ("モー", "moe"),
    ("ジュジュ", "juju"),
    ("スパイク", "spike"),
    ("クロウ", "crow"),
    ("レオン", "leon"),
    ("サンディ", "sandy"),
    ("アンバー", "amber"),
    ("メグ", "meg"),
    ("サージ", "surge"),
    ("チェスター", "chester"),
    ("コーデリアス", "cordelius"),
    ("キット", "kit"),
    ("ドラコ", "draco"),
    ("ケンジ", "kenji"),
];

lazy_static::lazy_static! {
    static ref BUILTIN: NameMap = NameMap {
        names: CHARACTER_NAMES
            .iter()
            .map(|&(display, id)| (display.to_string(), id.to_string()))
            .collect(),
    };
}

/// 表示名 → 識別子の対応表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    /// 組み込みの対応表
    pub fn builtin() -> &'static NameMap {
        &BUILTIN
    }

    /// JSONファイルから読み込み
    ///
    /// 形式は `{ "表示名": "identifier" }` のフラットなオブジェクト
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    ///
    /// 識別子が空（空白のみ）のエントリがあればエラー
    pub fn from_json(json: &str) -> Result<Self> {
        let map: Self = serde_json::from_str(json)?;

        if let Some((display, _)) = map.names.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(Error::Config(format!("識別子が空です: {}", display)));
        }

        Ok(map)
    }

    /// 対応表をマージ（後から追加した方が優先）
    pub fn merge(&mut self, other: &NameMap) {
        self.names.extend(other.names.clone());
    }

    /// 表示名を識別子に変換
    ///
    /// 完全一致のみ。見つからなければ小文字化した名前を返す。
    pub fn resolve(&self, name: &str) -> String {
        match self.names.get(name) {
            Some(id) => id.clone(),
            None => name.to_lowercase(),
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
