//! The aggregation engine: pure derived-view computations over the current
//! record snapshot. Everything here is deterministic, side-effect free, and
//! recomputed from scratch on every feed delivery or filter change.

pub mod budget;
pub mod category;
pub mod goals;
pub mod monthly;
pub mod totals;
pub mod trend;
pub mod view;

pub use budget::{BudgetTier, BudgetUsage};
pub use category::{category_options, rank_categories, top_spending, CategoryShare};
pub use goals::{goal_progress, GoalProgress};
pub use monthly::{monthly_flow, MonthlyFlow};
pub use totals::Totals;
pub use trend::{trend_series, TrendFilter, TrendPoint};
pub use view::DashboardView;
