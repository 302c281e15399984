use yew::prelude::*;

use crate::api::{CategoryTotal, PeriodTotal};
use crate::charts::{bar_layout, pie_slices, BarRect};

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub by_category: Vec<CategoryTotal>,
    pub by_week: Vec<PeriodTotal>,
    pub by_month: Vec<PeriodTotal>,
}

const BAR_WIDTH: f64 = 460.0;
const BAR_HEIGHT: f64 = 200.0;

fn bar_chart(title: &str, data: &[PeriodTotal]) -> Html {
    let bars = bar_layout(data, BAR_WIDTH, BAR_HEIGHT);
    html! {
        <div class="bg-slate-50 rounded-xl p-6 flex flex-col items-center">
            <h3 class="text-sm font-semibold text-slate-600 mb-4">{ title }</h3>
            if bars.is_empty() {
                <p class="text-sm text-slate-400">{"No data yet."}</p>
            } else {
                <svg width={BAR_WIDTH.to_string()} height={(BAR_HEIGHT + 24.0).to_string()}>
                    { for bars.iter().map(|bar: &BarRect| html! {
                        <>
                            <rect
                                x={bar.x.to_string()}
                                y={bar.y.to_string()}
                                width={bar.width.to_string()}
                                height={bar.height.to_string()}
                                rx="4"
                                fill="#8884d8"
                            >
                                <title>{ format!("{}: {:.2}", bar.name, bar.total) }</title>
                            </rect>
                            <text
                                x={(bar.x + bar.width / 2.0).to_string()}
                                y={(BAR_HEIGHT + 16.0).to_string()}
                                text-anchor="middle"
                                class="fill-slate-500 text-[10px]"
                            >
                                { bar.name.clone() }
                            </text>
                        </>
                    }) }
                </svg>
            }
        </div>
    }
}

/// The three aggregate views. Each dataset arrives whole from its own
/// endpoint and is redrawn from scratch whenever the dashboard refreshes.
#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let slices = pie_slices(&props.by_category, 150.0, 150.0, 100.0);

    html! {
        <div class="bg-white rounded-lg shadow-sm border border-slate-200 p-6 flex flex-wrap justify-center gap-8">
            <div class="bg-slate-50 rounded-xl p-6 flex flex-col items-center">
                <h3 class="text-sm font-semibold text-slate-600 mb-4">{"Expenses by Category"}</h3>
                if slices.is_empty() {
                    <p class="text-sm text-slate-400">{"No data yet."}</p>
                } else {
                    <svg width="300" height="300" viewBox="0 0 300 300">
                        { for slices.iter().map(|slice| html! {
                            <path d={slice.path.clone()} fill={slice.color} stroke="white" stroke-width="1">
                                <title>{ format!("{}: {:.2}", slice.name, slice.value) }</title>
                            </path>
                        }) }
                    </svg>
                    <ul class="mt-3 flex flex-wrap justify-center gap-3 text-xs text-slate-600">
                        { for slices.iter().map(|slice| html! {
                            <li class="flex items-center gap-1.5">
                                <span class="w-3 h-3 rounded-sm inline-block" style={format!("background-color: {}", slice.color)}></span>
                                { format!("{} ({:.2})", slice.name, slice.value) }
                            </li>
                        }) }
                    </ul>
                }
            </div>
            { bar_chart("Expenses by Week", &props.by_week) }
            { bar_chart("Expenses by Month", &props.by_month) }
        </div>
    }
}
