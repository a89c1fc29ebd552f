// crates/cli/src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人間向けのキー/バリュー表示
    #[default]
    Table,
    /// 機械向けの JSON オブジェクト
    Json,
    /// ビルドスクリプト向けの cargo:rustc-env 指示行
    Env,
}
