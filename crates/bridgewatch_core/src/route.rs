//! URL path → role view resolution.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegulatorPage {
    Dashboard,
    Projects,
    Tasks,
    Devices,
    CheckinDemo,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderPage {
    Dashboard,
    Devices,
    Personnel,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerPage {
    Home,
    Create,
    Tasks,
    Checkin,
    Working,
    Checkout,
    HistoryDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "page", rename_all = "snake_case")]
pub enum View {
    Regulator(RegulatorPage),
    Provider(ProviderPage),
    Worker(WorkerPage),
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            Self::Regulator(page) => match page {
                RegulatorPage::Dashboard => "/dashboard",
                RegulatorPage::Projects => "/projects",
                RegulatorPage::Tasks => "/tasks",
                RegulatorPage::Devices => "/devices",
                RegulatorPage::CheckinDemo => "/checkin-demo",
                RegulatorPage::History => "/history",
            },
            Self::Provider(page) => match page {
                ProviderPage::Dashboard => "/provider/dashboard",
                ProviderPage::Devices => "/provider/devices",
                ProviderPage::Personnel => "/provider/personnel",
                ProviderPage::Tasks => "/provider/tasks",
            },
            Self::Worker(page) => match page {
                WorkerPage::Home => "/worker/home",
                WorkerPage::Create => "/worker/create",
                WorkerPage::Tasks => "/worker/tasks",
                WorkerPage::Checkin => "/worker/checkin",
                WorkerPage::Working => "/worker/working",
                WorkerPage::Checkout => "/worker/checkout",
                WorkerPage::HistoryDetail => "/worker/history-detail",
            },
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            Self::Regulator(_) => "regulator",
            Self::Provider(_) => "provider",
            Self::Worker(_) => "worker",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.role(), self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub view: View,
    /// Set when the requested path was not the view's own path.
    pub redirected: bool,
}

/// Resolves a path. Matching ignores case. Index paths land on each shell's
/// home page, anything unknown lands on the regulator dashboard.
pub fn resolve(path: &str) -> Resolved {
    let trimmed = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let segments: Vec<&str> = trimmed.split('/').filter(|part| !part.is_empty()).collect();

    let view = match segments.as_slice() {
        ["worker", rest @ ..] => worker_view(rest),
        ["provider", rest @ ..] => provider_view(rest),
        rest => regulator_view(rest),
    }
    .unwrap_or(View::Regulator(RegulatorPage::Dashboard));

    let canonical = format!("/{}", segments.join("/"));
    Resolved {
        view,
        redirected: canonical != view.path(),
    }
}

fn worker_view(rest: &[&str]) -> Option<View> {
    let page = match rest {
        [] | ["home"] => WorkerPage::Home,
        ["create"] => WorkerPage::Create,
        ["tasks"] => WorkerPage::Tasks,
        ["checkin"] => WorkerPage::Checkin,
        ["working"] => WorkerPage::Working,
        ["checkout"] => WorkerPage::Checkout,
        ["history-detail"] => WorkerPage::HistoryDetail,
        _ => return None,
    };
    Some(View::Worker(page))
}

fn provider_view(rest: &[&str]) -> Option<View> {
    let page = match rest {
        [] | ["dashboard"] => ProviderPage::Dashboard,
        ["devices"] => ProviderPage::Devices,
        ["personnel"] => ProviderPage::Personnel,
        ["tasks"] => ProviderPage::Tasks,
        _ => return None,
    };
    Some(View::Provider(page))
}

fn regulator_view(rest: &[&str]) -> Option<View> {
    let page = match rest {
        [] | ["dashboard"] => RegulatorPage::Dashboard,
        ["projects"] => RegulatorPage::Projects,
        ["tasks"] => RegulatorPage::Tasks,
        ["devices"] => RegulatorPage::Devices,
        ["checkin-demo"] => RegulatorPage::CheckinDemo,
        ["history"] => RegulatorPage::History,
        _ => return None,
    };
    Some(View::Regulator(page))
}
