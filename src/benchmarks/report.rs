//! 計測結果のレポート
//!
//! 結果を後続呼び出し時間の昇順（安定ソート）に並べ、表形式のテキストで出力する。

use crate::core::{CallArguments, TimingResult};
use std::io::{self, Write};

const HEADERS: [&str; 3] = ["Name", "FirstCall", "NextCalls"];

/// 1回の実行の結果一式
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    iterations: u64,
    arguments: CallArguments,
    expected_value: i32,
    results: Vec<TimingResult>,
}

impl BenchmarkReport {
    /// 結果を `next_calls` の昇順に並べてレポートを作成する
    pub fn new(iterations: u64, arguments: CallArguments, mut results: Vec<TimingResult>) -> Self {
        results.sort_by_key(|result| result.next_calls());
        Self {
            iterations,
            arguments,
            expected_value: arguments.expected(),
            results,
        }
    }

    pub fn results(&self) -> &[TimingResult] {
        &self.results
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn arguments(&self) -> CallArguments {
        self.arguments
    }

    pub fn expected_value(&self) -> i32 {
        self.expected_value
    }

    /// 最速の戦略
    pub fn fastest(&self) -> Option<&TimingResult> {
        self.results.first()
    }

    pub fn get(&self, name: &str) -> Option<&TimingResult> {
        self.results.iter().find(|result| result.name() == name)
    }

    fn rows(&self) -> Vec<[String; 3]> {
        self.results
            .iter()
            .map(|result| {
                [
                    result.name().to_string(),
                    format!("{:?}", result.first_call()),
                    format!("{:?}", result.next_calls()),
                ]
            })
            .collect()
    }

    /// 罫線付きの表を文字列として返す
    pub fn render_table(&self) -> String {
        let rows = self.rows();

        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        // "| " + セル + " " を列ごとに、末尾に "|"
        let border = format!(" {}\n", "-".repeat(widths.iter().map(|w| w + 3).sum::<usize>() + 1));
        let line = |cells: [&str; 3]| -> String {
            let mut line = String::from(" |");
            for (cell, width) in cells.iter().zip(widths) {
                let padding = width - cell.chars().count();
                line.push(' ');
                line.push_str(cell);
                line.push_str(&" ".repeat(padding));
                line.push_str(" |");
            }
            line.push('\n');
            line
        };

        let mut table = String::new();
        table.push_str(&border);
        table.push_str(&line(HEADERS));
        table.push_str(&border);
        for row in &rows {
            table.push_str(&line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
        }
        table.push_str(&border);
        table.push('\n');
        table.push_str(&format!(" Count: {}\n", rows.len()));
        table
    }

    /// 表を書き出す
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_table().as_bytes())
    }
}
