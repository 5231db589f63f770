use anyhow::Context;
use brawl_compat_gen::{cli, config, generator};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラーが発生しました: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("設定の読み込みに失敗しました")?;

    match cli.command.unwrap_or(Commands::Generate {
        input: None,
        output: None,
        max_rows: None,
        aliases: None,
        dry_run: false,
    }) {
        Commands::Generate { input, output, max_rows, aliases, dry_run } => {
            let mut config = config;
            if let Some(input) = input {
                config.input = input;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(max_rows) = max_rows {
                config.max_rows = max_rows;
            }
            if aliases.is_some() {
                config.aliases = aliases;
            }
            config.validate()?;

            if cli.verbose {
                println!("📄 入力: {}", config.input.display());
                println!("📁 出力: {}", config.output_dir.display());
                println!("   読み込み行数上限: {}", config.max_rows);
            }

            let mut options = generator::GenerateOptions::from_config(&config)?;
            options.dry_run = dry_run;
            options.verbose = cli.verbose;

            let summary = generator::generate(&options)?;

            if cli.verbose {
                println!("\n✔ {}ファイル生成", summary.len());
                if !summary.fallbacks.is_empty() {
                    println!("  対応表にない名前: {}件", summary.fallbacks.len());
                }
            }
            if dry_run {
                println!("ドライラン完了（ファイルは書き込んでいません）");
            } else {
                println!("すべてのキャラクターデータの生成が完了しました！");
            }
        }

        Commands::Resolve { names } => {
            let map = config.name_map()?;
            for name in names {
                let identifier = map.resolve(&name);
                if map.is_known(&name) {
                    println!("{} → {}", name, identifier);
                } else {
                    println!("{} → {} (対応表になし)", name, identifier);
                }
            }
        }

        Commands::Config { show } => {
            if show {
                println!("設定:");
                println!("  入力CSV: {}", config.input.display());
                println!("  出力先: {}", config.output_dir.display());
                println!("  読み込み行数上限: {}", config.max_rows);
                println!("  型: {} ({})", config.type_name, config.import_path);
                println!(
                    "  追加対応表: {}",
                    config
                        .aliases
                        .as_ref()
                        .map(|p: &PathBuf| p.display().to_string())
                        .unwrap_or_else(|| "なし".into())
                );
            }
        }
    }

    Ok(())
}
