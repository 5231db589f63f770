use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brawl-gen")]
#[command(about = "相性表CSVからキャラクター別TypeScriptデータを生成", long_about = None)]
pub struct Cli {
    /// 省略時は generate を設定どおりに実行
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時は ./brawl-gen.json があれば使用）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 相性表CSVからキャラクターごとのデータファイルを生成
    Generate {
        /// 入力CSVファイル（デフォルト: BrawlCharacter.csv）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力ディレクトリ（デフォルト: characters）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// CSVの読み込み行数上限（デフォルト: 87）
        #[arg(long)]
        max_rows: Option<usize>,

        /// 追加のキャラクター名対応表（JSON）
        #[arg(long)]
        aliases: Option<PathBuf>,

        /// ドライラン（ファイルを書き込まずに確認）
        #[arg(long)]
        dry_run: bool,
    },

    /// キャラクター名を識別子に変換して表示
    Resolve {
        /// キャラクター名（日本語表示名）
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
