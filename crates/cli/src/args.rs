// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use gitver_domain::BaseVersion;

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "gitver",
    version = crate::VERSION,
    about = "Git タグからセマンティックバージョンを導出するツール"
)]
pub struct Args {
    /// バージョンを導出する作業ツリー
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    pub source_dir: PathBuf,

    /// タグ接頭辞 (例: v)
    #[arg(long, help_heading = "解決")]
    pub prefix: Option<String>,

    /// タグが見つからない場合の既定バージョン
    #[arg(long, default_value = "0.0.0", help_heading = "解決")]
    pub default_version: BaseVersion,

    /// タグと既定バージョンの不一致をエラーにする
    #[arg(long, help_heading = "解決")]
    pub fail_on_mismatch: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// フルバージョン文字列のみを出力
    #[arg(long, help_heading = "出力")]
    pub quiet: bool,
}
