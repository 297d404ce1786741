use leptos::prelude::*;
use medchain_shared::chart::{self, ChartData, Viewport};

/// SVG 坐标保留一位小数
fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

/// 刻度值去掉无意义的小数位
fn format_tick(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// 内联 SVG 折线图
///
/// 几何由 `medchain_shared::chart::layout` 计算，这里只负责输出元素。
#[component]
pub fn LineChart(
    data: ChartData,
    /// 是否显示图例（多序列时有用）
    #[prop(optional)]
    legend: bool,
) -> impl IntoView {
    let viewport = Viewport::default();
    let layout = chart::layout(&data, viewport);
    let plot = layout.plot;
    let (left, right, bottom) = (coord(plot.left), coord(plot.right), coord(plot.bottom));
    let view_box = format!("0 0 {} {}", viewport.width, viewport.height);

    let grid = layout
        .y_ticks
        .iter()
        .map(|tick| {
            view! {
                <line
                    x1=left.clone()
                    x2=right.clone()
                    y1=coord(tick.y)
                    y2=coord(tick.y)
                    stroke="currentColor"
                    stroke-opacity="0.15"
                    stroke-dasharray="3 3"
                />
                <text
                    x=coord(plot.left - 6.0)
                    y=coord(tick.y + 4.0)
                    text-anchor="end"
                    font-size="10"
                    fill="currentColor"
                    fill-opacity="0.6"
                >
                    {format_tick(tick.value)}
                </text>
            }
        })
        .collect_view();

    let x_labels = layout
        .x_ticks
        .iter()
        .map(|tick| {
            view! {
                <text
                    x=coord(tick.x)
                    y=coord(plot.bottom + 18.0)
                    text-anchor="middle"
                    font-size="10"
                    fill="currentColor"
                    fill-opacity="0.6"
                >
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    let lines = layout
        .lines
        .iter()
        .map(|line| {
            view! {
                <polyline
                    points=line.svg_points()
                    fill="none"
                    stroke=line.color.clone()
                    stroke-width="2"
                    stroke-linejoin="round"
                    stroke-linecap="round"
                />
            }
        })
        .collect_view();

    let legend_items = data
        .series
        .iter()
        .map(|s| {
            let swatch = format!("background-color: {}", s.color);
            view! {
                <span class="flex items-center gap-1 text-xs">
                    <span class="inline-block w-3 h-3 rounded-full" style=swatch></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="w-full">
            <svg viewBox=view_box class="w-full h-auto" preserveAspectRatio="none" role="img">
                {grid}
                <line
                    x1=left
                    x2=right
                    y1=bottom.clone()
                    y2=bottom
                    stroke="currentColor"
                    stroke-opacity="0.3"
                />
                {x_labels}
                {lines}
            </svg>
            {legend
                .then(|| {
                    view! {
                        <div class="flex flex-wrap justify-center gap-4 mt-2">{legend_items}</div>
                    }
                })}
        </div>
    }
}
