//! 折线图几何计算
//!
//! 只负责把数据映射到 SVG 坐标：绘图区、坐标轴刻度和每条折线的点。
//! 渲染交给前端组件。

/// 一条数据序列
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// CSS 颜色，如 `#0ea5e9`
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
}

/// 图表数据：横轴标签与若干序列
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// SVG 画布尺寸与四周留白
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 240.0,
            padding_left: 40.0,
            padding_right: 16.0,
            padding_top: 12.0,
            padding_bottom: 28.0,
        }
    }
}

/// 绘图区矩形
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XTick {
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YTick {
    pub y: f64,
    pub value: f64,
}

/// 已映射到画布坐标的序列
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<(f64, f64)>,
}

impl PlottedSeries {
    /// `<polyline points=...>` 的取值
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
    pub lines: Vec<PlottedSeries>,
}

const Y_TICK_INTERVALS: usize = 4;

/// 计算 "好看" 的刻度步长：1、2、2.5、5、10 乘以 10 的幂
fn nice_step(range: f64, intervals: usize) -> f64 {
    let rough = range / intervals as f64;
    let magnitude = 10f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// 纵轴范围，总是包含 0
fn y_domain(data: &ChartData) -> (f64, f64, f64) {
    let values = data
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite());

    let (min, max) = values.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let range = if max - min > 0.0 { max - min } else { 1.0 };
    let step = nice_step(range, Y_TICK_INTERVALS);
    let lower = (min / step).floor() * step;
    let mut upper = (max / step).ceil() * step;
    if upper <= lower {
        upper = lower + step;
    }
    (lower, upper, step)
}

/// 计算图表布局
pub fn layout(data: &ChartData, viewport: Viewport) -> ChartLayout {
    let plot = PlotArea {
        left: viewport.padding_left,
        top: viewport.padding_top,
        right: (viewport.width - viewport.padding_right).max(viewport.padding_left),
        bottom: (viewport.height - viewport.padding_bottom).max(viewport.padding_top),
    };

    let count = data.labels.len();
    let x_at = |i: usize| -> f64 {
        if count <= 1 {
            plot.left + plot.width() / 2.0
        } else {
            plot.left + plot.width() * i as f64 / (count - 1) as f64
        }
    };

    let (lower, upper, step) = y_domain(data);
    let y_at = |v: f64| -> f64 { plot.bottom - (v - lower) / (upper - lower) * plot.height() };

    let x_ticks = data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| XTick {
            x: x_at(i),
            label: label.clone(),
        })
        .collect();

    let tick_count = ((upper - lower) / step).round() as usize;
    let y_ticks = (0..=tick_count)
        .map(|i| {
            let value = lower + step * i as f64;
            YTick { y: y_at(value), value }
        })
        .collect();

    // 多余的值（没有对应标签）不绘制
    let lines = data
        .series
        .iter()
        .map(|s| PlottedSeries {
            name: s.name.clone(),
            color: s.color.clone(),
            points: s
                .values
                .iter()
                .take(count)
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| (x_at(i), y_at(*v)))
                .collect(),
        })
        .collect();

    ChartLayout {
        plot,
        x_ticks,
        y_ticks,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside(plot: &PlotArea, (x, y): (f64, f64)) -> bool {
        const EPS: f64 = 1e-9;
        x >= plot.left - EPS && x <= plot.right + EPS && y >= plot.top - EPS && y <= plot.bottom + EPS
    }

    fn weekly() -> ChartData {
        ChartData {
            labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            series: vec![Series::new(
                "patients",
                "#0ea5e9",
                vec![12.0, 19.0, 15.0, 22.0, 18.0, 8.0, 5.0],
            )],
        }
    }

    #[test]
    fn test_points_stay_inside_plot() {
        let layout = layout(&weekly(), Viewport::default());
        let line = &layout.lines[0];
        assert_eq!(line.points.len(), 7);
        for point in &line.points {
            assert!(inside(&layout.plot, *point), "{:?}", point);
        }
        // 第一个点在左边界，最后一个点在右边界
        assert_eq!(line.points[0].0, layout.plot.left);
        assert_eq!(line.points[6].0, layout.plot.right);
    }

    #[test]
    fn test_y_ticks_are_nice_and_cover_data() {
        let layout = layout(&weekly(), Viewport::default());
        let values: Vec<f64> = layout.y_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 10.0, 20.0, 30.0]);
        // 0 在底部
        assert_eq!(layout.y_ticks[0].y, layout.plot.bottom);
        assert_eq!(layout.y_ticks.last().unwrap().y, layout.plot.top);
    }

    #[test]
    fn test_higher_value_is_drawn_higher() {
        let layout = layout(&weekly(), Viewport::default());
        let points = &layout.lines[0].points;
        // 周四 22 高于周日 5（SVG 的 y 轴向下）
        assert!(points[3].1 < points[6].1);
    }

    #[test]
    fn test_flat_zero_series_has_finite_geometry() {
        let data = ChartData {
            labels: vec!["a".into(), "b".into()],
            series: vec![Series::new("zero", "#000", vec![0.0, 0.0])],
        };
        let layout = layout(&data, Viewport::default());
        assert!(layout.y_ticks.len() >= 2);
        for (x, y) in &layout.lines[0].points {
            assert!(x.is_finite() && y.is_finite());
        }
    }

    #[test]
    fn test_empty_data() {
        let layout = layout(&ChartData::default(), Viewport::default());
        assert!(layout.x_ticks.is_empty());
        assert!(layout.lines.is_empty());
        assert!(!layout.y_ticks.is_empty());
    }

    #[test]
    fn test_single_label_is_centered() {
        let data = ChartData {
            labels: vec!["only".into()],
            series: vec![Series::new("s", "#fff", vec![3.0, 4.0])],
        };
        let layout = layout(&data, Viewport::default());
        let plot = layout.plot;
        assert_eq!(layout.lines[0].points.len(), 1);
        assert_eq!(layout.lines[0].points[0].0, plot.left + plot.width() / 2.0);
    }

    #[test]
    fn test_svg_points_format() {
        let series = PlottedSeries {
            name: "s".into(),
            color: "#fff".into(),
            points: vec![(1.0, 2.24), (3.5, 4.0)],
        };
        assert_eq!(series.svg_points(), "1.0,2.2 3.5,4.0");
    }
}
