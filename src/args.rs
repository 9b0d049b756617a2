// src/args.rs
use crate::parsers;
use clap::{ArgAction, Parser, ValueHint};
use pom_version_infra::xml::DEFAULT_INDENT;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pom_version",
    version,
    about = "Maven pom.xml の <version> を書き換えるツール",
    long_about = "<project> 直下の <version> を NEW_VERSION に書き換えます。\n\
                  ファイルは一時ファイル経由で置き換えられ、失敗時は何も書き込みません。"
)]
pub struct Args {
    /// 新しいバージョン文字列 (そのまま書き込まれる)
    #[arg(value_name = "NEW_VERSION")]
    pub new_version: Option<String>,

    /// 書き換える POM ファイル
    #[arg(short = 'f', long = "file", value_name = "PATH", default_value = "pom.xml", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// 出力時のインデント幅 (スペース数)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT, value_parser = parsers::parse_indent)]
    pub indent: usize,

    /// 詳細ログを stderr に出力 (複数指定でより詳細)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// 成功時の出力を抑制
    #[arg(short, long)]
    pub quiet: bool,
}
