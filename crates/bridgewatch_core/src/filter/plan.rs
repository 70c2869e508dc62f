use super::{Criteria, DateRange, text_matches};
use crate::model::ProjectPlan;
use serde::Serialize;

/// Query form of the regulator's plan list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanFilter {
    pub date_range: Option<DateRange>,
    pub project_package: Option<String>,
    pub district: Option<String>,
    pub inspection_unit: Option<String>,
}

impl Criteria<ProjectPlan> for PlanFilter {
    fn matches(&self, plan: &ProjectPlan) -> bool {
        if let Some(range) = self.date_range.as_ref() {
            // Plans carry an interval, so the range only has to touch it.
            let Ok(cycle) = plan.cycle() else {
                tracing::warn!(plan = %plan.id, cycle = %plan.inspection_cycle, "unparseable inspection cycle");
                return false;
            };
            if !range.overlaps(cycle.start, cycle.end) {
                return false;
            }
        }

        text_matches(self.project_package.as_deref(), &plan.project_package)
            && text_matches(self.district.as_deref(), &plan.district)
            && text_matches(self.inspection_unit.as_deref(), &plan.inspection_unit)
    }
}
