//! チャート描画用のジオメトリ
//!
//! 描画ライブラリには依存せず、固定データからSVG座標を計算する。
//! Web側のコンポーネントはここで得た座標をそのまま `<svg>` に流す。

use crate::types::BatchMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// 値域
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const UNIT: Domain = Domain { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 0.0..=1.0 に正規化（範囲外は丸める）
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// 両端を含む等間隔の目盛り
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = (self.max - self.min) / (count - 1) as f64;
                (0..count).map(|i| self.min + step * i as f64).collect()
            }
        }
    }
}

/// ダッシュボードのタブ（バッチ別指標）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Rouge,
    Compression,
    Tokens,
    Similarity,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Rouge, Metric::Compression, Metric::Tokens, Metric::Similarity];

    /// タブ表示名
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Rouge => "ROUGE",
            Metric::Compression => "Compression %",
            Metric::Tokens => "Token Savings",
            Metric::Similarity => "Similarity",
        }
    }

    /// 凡例の系列名
    pub fn series_name(&self) -> &'static str {
        match self {
            Metric::Rouge => "ROUGE Score",
            Metric::Compression => "Compression Rate",
            Metric::Tokens => "Token Savings",
            Metric::Similarity => "Similarity Score",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Rouge => "ROUGE Score by Batch",
            Metric::Compression => "Compression % by Batch",
            Metric::Tokens => "Token Savings by Batch",
            Metric::Similarity => "Similarity Score by Batch",
        }
    }

    /// ツールチップの見出し
    pub fn tooltip_label(&self) -> &'static str {
        match self {
            Metric::Rouge => "ROUGE",
            Metric::Compression => "Compression",
            Metric::Tokens => "Tokens",
            Metric::Similarity => "Similarity",
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Metric::Rouge | Metric::Similarity => ChartKind::Line,
            Metric::Compression | Metric::Tokens => ChartKind::Bar,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Metric::Rouge => "#9747FF",
            Metric::Compression => "#47FFAE",
            Metric::Tokens => "#4AADFF",
            Metric::Similarity => "#FF47B3",
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Metric::Rouge => Domain::new(0.70, 0.85),
            Metric::Compression => Domain::new(40.0, 45.0),
            Metric::Tokens => Domain::new(600.0, 750.0),
            Metric::Similarity => Domain::new(0.75, 0.85),
        }
    }

    pub fn tick_count(&self) -> usize {
        match self {
            Metric::Rouge => 4,
            Metric::Compression | Metric::Tokens => 6,
            Metric::Similarity => 5,
        }
    }

    pub fn value(&self, point: &BatchMetrics) -> f64 {
        match self {
            Metric::Rouge => point.rouge,
            Metric::Compression => point.compression,
            Metric::Tokens => point.tokens,
            Metric::Similarity => point.similarity,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Metric::Compression => "%",
            _ => "",
        }
    }

    /// ツールチップの値表記
    pub fn format_value(&self, value: f64) -> String {
        format!("{}{}", value, self.suffix())
    }
}

/// 1系列分の値
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }

    pub fn from_metric(metric: Metric, data: &[BatchMetrics]) -> Self {
        Self::new(
            metric.series_name(),
            metric.color(),
            data.iter().map(|p| metric.value(p)).collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// SVG全体と描画領域
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl PlotArea {
    /// 軸ラベル分を含めた既定の余白
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin { top: 20.0, right: 30.0, bottom: 40.0, left: 60.0 },
        }
    }

    pub fn left(&self) -> f64 {
        self.margin.left
    }

    pub fn right(&self) -> f64 {
        (self.width - self.margin.right).max(self.margin.left)
    }

    pub fn top(&self) -> f64 {
        self.margin.top
    }

    pub fn bottom(&self) -> f64 {
        (self.height - self.margin.bottom).max(self.margin.top)
    }

    pub fn inner_width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn inner_height(&self) -> f64 {
        self.bottom() - self.top()
    }

    /// 値 → y座標（上が大きい値）
    pub fn y_for(&self, value: f64, domain: &Domain) -> f64 {
        self.bottom() - domain.normalize(value) * self.inner_height()
    }

    /// 値 → x座標（連続軸）
    pub fn x_for(&self, value: f64, domain: &Domain) -> f64 {
        self.left() + domain.normalize(value) * self.inner_width()
    }

    pub fn band_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.inner_width() / count as f64
    }

    /// カテゴリ軸のバンド中心
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        self.left() + self.band_width(count) * (index as f64 + 0.5)
    }

    /// 折れ線の `d` 属性
    pub fn line_path(&self, values: &[f64], domain: &Domain) -> String {
        self.line_points(values, domain)
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{}{:.2},{:.2}", cmd, x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn line_points(&self, values: &[f64], domain: &Domain) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (self.band_center(i, values.len()), self.y_for(*v, domain)))
            .collect()
    }

    /// 縦棒。`group_count` 本の系列をバンド内で並べる。
    pub fn bars(&self, values: &[f64], domain: &Domain, group_index: usize, group_count: usize) -> Vec<Rect> {
        let band = self.band_width(values.len());
        let group_count = group_count.max(1);
        // バンドの両端に10%ずつ余白
        let bar_width = band * 0.8 / group_count as f64;
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let y = self.y_for(*v, domain);
                Rect {
                    x: self.left() + band * i as f64 + band * 0.1 + bar_width * group_index as f64,
                    y,
                    width: bar_width,
                    height: self.bottom() - y,
                }
            })
            .collect()
    }

    /// 横棒（1本、描画領域の高さいっぱい）
    pub fn horizontal_bar(&self, value: f64, domain: &Domain) -> Rect {
        let thickness = self.inner_height() * 0.6;
        Rect {
            x: self.left(),
            y: self.top() + (self.inner_height() - thickness) / 2.0,
            width: self.x_for(value, domain) - self.left(),
            height: thickness,
        }
    }

    /// 散布図の点
    pub fn point(&self, x: f64, y: f64, x_domain: &Domain, y_domain: &Domain) -> (f64, f64) {
        (self.x_for(x, x_domain), self.y_for(y, y_domain))
    }
}

/// 目盛りラベル。値域の幅に応じて小数桁を決める。
pub fn format_tick(value: f64, domain: &Domain) -> String {
    let span = (domain.max - domain.min).abs();
    if span >= 10.0 {
        format!("{:.0}", value)
    } else if span >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockResults, ResultsProvider};

    const EPS: f64 = 1e-9;

    fn area() -> PlotArea {
        PlotArea::new(600.0, 300.0)
    }

    #[test]
    fn test_normalize_clamps() {
        let d = Domain::new(40.0, 45.0);
        assert!((d.normalize(42.5) - 0.5).abs() < EPS);
        assert_eq!(d.normalize(30.0), 0.0);
        assert_eq!(d.normalize(50.0), 1.0);
        assert_eq!(Domain::new(1.0, 1.0).normalize(1.0), 0.0);
    }

    #[test]
    fn test_ticks_include_both_ends() {
        let ticks = Metric::Rouge.domain().ticks(Metric::Rouge.tick_count());
        assert_eq!(ticks.len(), 4);
        assert!((ticks[0] - 0.70).abs() < EPS);
        assert!((ticks[1] - 0.75).abs() < EPS);
        assert!((ticks[3] - 0.85).abs() < EPS);
        assert!(Domain::UNIT.ticks(0).is_empty());
        assert_eq!(Domain::UNIT.ticks(1), vec![0.0]);
    }

    #[test]
    fn test_y_for_inverts_axis() {
        let a = area();
        let d = Domain::UNIT;
        assert_eq!(a.y_for(0.0, &d), a.bottom());
        assert_eq!(a.y_for(1.0, &d), a.top());
    }

    #[test]
    fn test_band_centers() {
        let a = area();
        // 内幅 510 / 10本
        assert!((a.band_center(0, 10) - (60.0 + 25.5)).abs() < EPS);
        assert!((a.band_center(9, 10) - (570.0 - 25.5)).abs() < EPS);
    }

    #[test]
    fn test_line_path_shape() {
        let a = area();
        let path = a.line_path(&[0.0, 1.0], &Domain::UNIT);
        assert!(path.starts_with('M'));
        assert_eq!(path.matches('L').count(), 1);
        assert_eq!(a.line_path(&[], &Domain::UNIT), "");
    }

    #[test]
    fn test_bars_stay_inside_plot() {
        let a = area();
        let data = MockResults.batch_metrics("job-3");
        let series = Series::from_metric(Metric::Tokens, &data);
        let rects = a.bars(&series.values, &Metric::Tokens.domain(), 0, 1);
        assert_eq!(rects.len(), 10);
        for r in &rects {
            assert!(r.x >= a.left() - EPS);
            assert!(r.x + r.width <= a.right() + EPS);
            assert!(r.height >= 0.0);
            assert!((r.y + r.height - a.bottom()).abs() < EPS);
        }
    }

    #[test]
    fn test_grouped_bars_do_not_overlap() {
        let a = area();
        let first = a.bars(&[0.33, 0.11, 0.19], &Domain::UNIT, 0, 2);
        let second = a.bars(&[0.32, 0.09, 0.17], &Domain::UNIT, 1, 2);
        for (l, r) in first.iter().zip(&second) {
            assert!((l.x + l.width - r.x).abs() < EPS);
        }
    }

    #[test]
    fn test_horizontal_bar_width() {
        let a = area();
        let r = a.horizontal_bar(5.0, &Domain::new(0.0, 100.0));
        assert!((r.width - a.inner_width() * 0.05).abs() < EPS);
    }

    #[test]
    fn test_metric_series() {
        let data = MockResults.batch_metrics("job-1");
        let s = Series::from_metric(Metric::Compression, &data);
        assert_eq!(s.name, "Compression Rate");
        assert_eq!(s.values[0], 41.2);
        assert_eq!(Metric::Compression.format_value(41.2), "41.2%");
        assert_eq!(Metric::Rouge.format_value(0.78), "0.78");
        assert_eq!(Metric::Rouge.kind(), ChartKind::Line);
        assert_eq!(Metric::Tokens.kind(), ChartKind::Bar);
    }

    /// ツールチップは系列名ではなく短い見出しを使う
    #[test]
    fn test_tooltip_label() {
        assert_eq!(Metric::Compression.tooltip_label(), "Compression");
        assert_ne!(Metric::Compression.tooltip_label(), Metric::Compression.series_name());
        assert_eq!(Metric::Tokens.tooltip_label(), "Tokens");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(600.0, &Metric::Tokens.domain()), "600");
        assert_eq!(format_tick(42.0, &Metric::Compression.domain()), "42.0");
        assert_eq!(format_tick(0.75, &Metric::Rouge.domain()), "0.75");
    }
}
