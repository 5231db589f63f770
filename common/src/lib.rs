//! Brawl Compatibility Common Library
//!
//! 相性表CSVの解析・キャラクター名変換・TypeScript宣言生成

pub mod types;
pub mod names;
pub mod error;
pub mod parser;
pub mod render;

pub use types::{CompatibilityRecord, ScoreTable};
pub use names::NameMap;
pub use error::{Error, Result};
pub use parser::{parse_matrix, read_table, records, DEFAULT_MAX_ROWS};
pub use render::{artifact_file_name, binding_name, render_declaration, TypeContract};
