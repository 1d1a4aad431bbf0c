use crate::profile::Metric;
use leptos::*;
use serde::Serialize;

/// Column layout of a metrics grid, chosen from the number of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridColumns {
    Two,
    Three,
    Four,
}

impl GridColumns {
    pub const fn for_count(count: usize) -> Self {
        match count {
            2 => Self::Two,
            3 => Self::Three,
            _ => Self::Four,
        }
    }

    pub const fn count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Layout used below the narrow viewport breakpoint.
    pub const fn narrow(self) -> Self {
        match self {
            Self::Four => Self::Two,
            other => other,
        }
    }
}

/// Derived grid shape for a row of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsLayout {
    wide: GridColumns,
}

impl MetricsLayout {
    pub fn new(metrics: &[Metric]) -> Self {
        Self {
            wide: GridColumns::for_count(metrics.len()),
        }
    }

    pub fn columns(&self) -> usize {
        self.wide.count()
    }

    pub fn narrow_columns(&self) -> usize {
        self.wide.narrow().count()
    }

    pub fn grid_class(&self) -> String {
        let mut class = format!("metrics metrics--cols-{}", self.columns());
        if self.narrow_columns() != self.columns() {
            class.push_str(&format!(" metrics--narrow-{}", self.narrow_columns()));
        }
        class
    }
}

/// A row of headline numbers rendered as a responsive grid. Tooltip ids
/// derive from `id_prefix`, which must be unique on the page.
#[component]
pub fn MetricsBar(metrics: &'static [Metric], #[prop(into)] id_prefix: String) -> impl IntoView {
    let layout = MetricsLayout::new(metrics);

    let cells = metrics
        .iter()
        .enumerate()
        .map(|(index, metric)| {
            let tip_id = metric
                .tooltip
                .map(|_| format!("{id_prefix}-metric-{index}-tip"));
            let tooltip = metric.tooltip.map(|tooltip| {
                view! {
                    <span class="metric__tip" role="tooltip" id=tip_id.clone()>
                        {tooltip}
                    </span>
                }
            });

            view! {
                <div
                    class="metric"
                    tabindex=tip_id.as_ref().map(|_| "0")
                    aria-describedby=tip_id.clone()
                >
                    <span class="metric__value">{metric.value}</span>
                    <span class="metric__label">{metric.label}</span>
                    {tooltip}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=layout.grid_class() data-columns=layout.columns().to_string()>
            {cells}
        </div>
    }
}
