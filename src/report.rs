//! 계산 결과를 표와 비율 막대로 그리는 출력 도우미.

use crate::emission::{Category, EmissionFactors, EmissionOutput};
use crate::i18n::{keys, Translator};
use std::fmt::Write;

/// 결과 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowKind {
    Category(Category),
    Total,
    TotalTons,
}

/// 여덟 분류 다음에 합계와 톤 단위 합계가 오는 10행.
pub fn breakdown_rows(output: &EmissionOutput) -> Vec<(RowKind, f64)> {
    let mut rows: Vec<(RowKind, f64)> = output
        .categories()
        .map(|(c, v)| (RowKind::Category(c), v))
        .collect();
    rows.push((RowKind::Total, output.total()));
    rows.push((RowKind::TotalTons, output.total_tons()));
    rows
}

pub fn row_label(tr: &Translator, row: RowKind) -> &'static str {
    match row {
        RowKind::Category(c) => tr.category(c),
        RowKind::Total => tr.t(keys::ROW_TOTAL),
        RowKind::TotalTons => tr.t(keys::ROW_TOTAL_TONS),
    }
}

/// 절감 팁 번역 키 목록.
pub const REDUCTION_TIPS: [&str; 6] = [
    keys::TIP_EFFICIENT_APPLIANCES,
    keys::TIP_PUBLIC_TRANSPORT,
    keys::TIP_LESS_MEAT_DAIRY,
    keys::TIP_INDUCTION_SOLAR,
    keys::TIP_FEWER_FLIGHTS,
    keys::TIP_RECYCLE,
];

fn pad(label: &str, width: usize) -> String {
    let len = label.chars().count();
    let mut s = label.to_string();
    s.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    s
}

/// 고정폭 텍스트 표.
pub fn render_table(output: &EmissionOutput, tr: &Translator, decimals: usize) -> String {
    let rows = breakdown_rows(output);
    let width = rows
        .iter()
        .map(|(r, _)| row_label(tr, *r).chars().count())
        .max()
        .unwrap_or(0)
        .max(tr.t(keys::RESULTS_COLUMN_CATEGORY).chars().count());
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {:>14}",
        pad(tr.t(keys::RESULTS_COLUMN_CATEGORY), width),
        tr.t(keys::RESULTS_COLUMN_CO2)
    );
    for (row, value) in rows {
        let _ = writeln!(
            out,
            "{}  {:>14.prec$}",
            pad(row_label(tr, row), width),
            value,
            prec = decimals
        );
    }
    out
}

/// 분류별 비율을 가로 막대로 그린다. 합계 행은 포함하지 않는다.
pub fn render_bar_chart(output: &EmissionOutput, tr: &Translator, width: usize) -> String {
    let shares = output.shares();
    let label_width = shares
        .iter()
        .map(|(c, _)| tr.category(*c).chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (category, share) in shares {
        let filled = (share / 100.0 * width as f64).round() as usize;
        let bar: String = "█".repeat(filled.min(width));
        let _ = writeln!(
            out,
            "{} |{}{} {:>5.1}%",
            pad(tr.category(category), label_width),
            bar,
            " ".repeat(width - filled.min(width)),
            share
        );
    }
    out
}

/// 배출계수 표와 식단 기본값을 텍스트로 그린다.
pub fn render_factors(factors: &EmissionFactors, tr: &Translator) -> String {
    use crate::emission::DietType;
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::FACTORS_HEADING));
    for (key, value) in factors.iter() {
        let _ = writeln!(out, "{:<18} {:>8} / {}", key.as_str(), value, key.unit());
    }
    let _ = writeln!(out, "{}", tr.t(keys::FACTORS_DIET_HEADING));
    for diet in DietType::all() {
        let _ = writeln!(out, "{:<18} {:>8}", diet.to_string(), diet.base_emission());
    }
    out
}

pub fn render_tips(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::TIPS_HEADING));
    for key in REDUCTION_TIPS {
        let _ = writeln!(out, "- {}", tr.t(key));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emission::{compute, EmissionInput};

    #[test]
    fn rows_end_with_totals() {
        let out = compute(&EmissionInput::zero()).expect("compute");
        let rows = breakdown_rows(&out);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[8], (RowKind::Total, 1000.0));
        assert_eq!(rows[9], (RowKind::TotalTons, 1.0));
    }

    #[test]
    fn table_prints_two_decimals() {
        let tr = Translator::new("en");
        let out = compute(&EmissionInput::zero()).expect("compute");
        let table = render_table(&out, &tr, 2);
        assert!(table.contains("Total (tons)"));
        assert!(table.contains("1000.00"));
        assert!(table.contains("1.00"));
    }

    #[test]
    fn chart_has_one_bar_per_category() {
        let tr = Translator::new("en");
        let out = compute(&EmissionInput::zero()).expect("compute");
        let chart = render_bar_chart(&out, &tr, 20);
        assert_eq!(chart.lines().count(), 8);
        let diet_line = chart
            .lines()
            .find(|l| l.starts_with("Diet"))
            .expect("diet line");
        assert!(diet_line.contains(&"█".repeat(20)));
        assert!(diet_line.ends_with("100.0%"));
        assert!(!chart.contains("Total"));
    }

    #[test]
    fn tips_are_localized() {
        let tips = render_tips(&Translator::new("en"));
        assert_eq!(tips.lines().filter(|l| l.starts_with("- ")).count(), 6);
        assert!(tips.contains("Use public transport or EVs."));
    }
}
