use anyhow::Context;
use checklist_common::{ChecklistSession, LoadState, ReportLayout};
use checklist_score::{apply_selection, cli, config, display, export, interactive, load_state, report_timestamp, source};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use source::ItemSource;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Config { set_source, set_title, show } => {
            if let Some(source) = set_source {
                config.set_source(source)?;
                println!("✔ 項目ソースを設定しました");
            }

            if let Some(title) = set_title {
                config.set_title(title)?;
                println!("✔ タイトルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  項目ソース: {}", config.resolve_source(cli.source.as_deref()));
                println!("  タイトル: {}", config.title);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
        command => run_checklist(command, &config, cli.source.as_deref()).await?,
    }

    Ok(())
}

async fn run_checklist(command: Commands, config: &Config, source_override: Option<&str>) -> anyhow::Result<()> {
    let source = ItemSource::parse(&config.resolve_source(source_override));
    let Some(mut session) = load_session(&source, Duration::from_secs(config.timeout_seconds)).await else {
        return Ok(());
    };

    match command {
        Commands::List => {
            println!("📋 {} ({}項目)", config.title, session.checklist().len());
            println!("{}", display::format_checklist(&session));
        }

        Commands::Score { select } => {
            let indices = cli::parse_selection(&select)?;
            apply_selection(&mut session, &indices);
            let snapshot = session.compute_score();
            println!("{}", display::format_score(snapshot));
        }

        Commands::Export { select, format, output, title, no_score } => {
            println!("📄 checklist - レポート出力\n");

            let indices = cli::parse_selection(&select)?;
            apply_selection(&mut session, &indices);
            if !no_score {
                let snapshot = session.compute_score();
                println!("{}", display::format_score(snapshot));
            }

            let layout = ReportLayout::a4(title.unwrap_or_else(|| config.title.clone()));
            let document = session.compose(&report_timestamp(), &layout);
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));

            export::export_report(&document, &layout, &format, &output_dir)?;

            println!("\n✅ 出力完了");
        }

        Commands::Interactive { output } => {
            let layout = ReportLayout::a4(config.title.clone());
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            interactive::run_interactive(&mut session, &layout, &output_dir)?;
        }

        // 設定コマンドは main で処理済み
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

/// 項目を取得してセッションを作成（取得失敗・0件はメッセージ表示のみ）
async fn load_session(source: &ItemSource, timeout: Duration) -> Option<ChecklistSession> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("データを読み込み中... ({})", source));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let state = load_state(source, timeout).await;
    spinner.finish_and_clear();

    match state {
        LoadState::Unavailable(message) => {
            println!("データ取得エラー: {}", message);
            None
        }
        LoadState::Empty => {
            println!("表示できる項目がありません");
            None
        }
        LoadState::Ready(session) => Some(session),
    }
}
