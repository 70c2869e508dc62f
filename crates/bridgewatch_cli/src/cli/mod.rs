use bridgewatch_core::config::ConfigOverrides;
use bridgewatch_core::model::{HistoryStatus, TaskStatus};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read records from a data set file instead of the built-in demo data
    #[arg(long, value_name = "PATH", global = true)]
    pub dataset: Option<PathBuf>,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE", global = true)]
    pub config_override: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a dashboard URL path to its view
    ///
    /// Example: bridgewatch route /provider
    Route {
        path: String,
    },
    #[command(flatten)]
    Dataset(DatasetCommand),
}

/// Commands that read the loaded data set.
#[derive(Subcommand, Debug)]
pub enum DatasetCommand {
    /// Query inspection plans (regulator)
    ///
    /// Example: bridgewatch plans --district 浦东
    /// Example: bridgewatch plans --from 2025-03-01 --to 2025-03-31
    Plans {
        #[command(flatten)]
        range: RangeArgs,
        /// Project package
        #[arg(long)]
        package: Option<String>,
        /// Administrative district
        #[arg(long)]
        district: Option<String>,
        /// Inspection unit
        #[arg(long)]
        unit: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Query finished field sessions (regulator)
    ///
    /// Example: bridgewatch history --operator 刘强 --status completed
    History {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        operator: Option<String>,
        #[arg(long)]
        package: Option<String>,
        #[arg(long, value_enum)]
        status: Option<HistoryStatusArg>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Query inspection tasks (provider)
    ///
    /// Example: bridgewatch tasks --status in-progress
    Tasks {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        operator: Option<String>,
        #[arg(long)]
        package: Option<String>,
        #[arg(long, value_enum)]
        status: Option<TaskStatusArg>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show one task with its videos, photos and trajectory
    ///
    /// Example: bridgewatch show task-01
    Show {
        id: String,
    },
    /// List devices
    Devices,
    /// List field personnel
    Personnel,
    /// Dashboard counts
    Stats,
    /// Rotate through recent alerts, newest first
    ///
    /// Example: bridgewatch alerts --ticks 4
    Alerts {
        /// Number of rotations to print after the first alert
        #[arg(long, default_value_t = 0)]
        ticks: usize,
    },
    /// Check in to a package / route / segment and try to start video
    ///
    /// Example: bridgewatch checkin pkg-pudong route-jinqiao segment-jinqiao-jinxiu
    Checkin {
        package: String,
        route: String,
        segment: String,
        /// Seed for the simulated stream start
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate binding a device serial to a person
    ///
    /// Example: bridgewatch bind-check JXP2-231021 --personnel per-004
    BindCheck {
        sn: String,
        /// Id of the person being edited
        #[arg(long)]
        personnel: Option<String>,
    },
    /// Validate the personnel form: name, phone and optional device binding
    ///
    /// Example: bridgewatch personnel-check 陈明 13800001111 --sn JXP2-231021 --personnel per-004
    PersonnelCheck {
        name: String,
        phone: String,
        /// Device serial to bind
        #[arg(long)]
        sn: Option<String>,
        /// Id of the person being edited
        #[arg(long)]
        personnel: Option<String>,
    },
    /// Distinct values offered by a list's filter form
    ///
    /// Example: bridgewatch options plans
    Options {
        #[arg(value_enum)]
        list: OptionsList,
    },
    /// Field worker views
    Worker {
        #[command(subcommand)]
        view: WorkerCommand,
    },
    /// Write the demo data set to a file
    ///
    /// Example: bridgewatch export demo.json
    Export {
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkerCommand {
    /// Tasks waiting to be picked up
    Pending,
    /// The session currently checked in to
    Current,
    /// Finished sessions
    History,
    /// Start a session on a pending task
    ///
    /// Example: bridgewatch worker checkin wt-002 --minutes 30
    Checkin {
        task_id: String,
        /// Minutes to run the work clock after checkin
        #[arg(long, default_value_t = 0)]
        minutes: u32,
    },
    /// Close the current session now
    ///
    /// Example: bridgewatch worker checkout --note "支座复查完成"
    Checkout {
        /// The trajectory was not recorded
        #[arg(long)]
        no_trajectory: bool,
        /// Work description
        #[arg(long)]
        note: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OptionsList {
    Plans,
    History,
    Tasks,
}

#[derive(Args, Debug, Default)]
pub struct RangeArgs {
    /// First day, YYYY-MM-DD (inclusive)
    #[arg(long, requires = "to")]
    pub from: Option<String>,
    /// Last day, YYYY-MM-DD (inclusive)
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum HistoryStatusArg {
    Completed,
    Abnormal,
    Interrupted,
}

impl From<HistoryStatusArg> for HistoryStatus {
    fn from(value: HistoryStatusArg) -> Self {
        match value {
            HistoryStatusArg::Completed => Self::Completed,
            HistoryStatusArg::Abnormal => Self::Abnormal,
            HistoryStatusArg::Interrupted => Self::Interrupted,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TaskStatusArg {
    Pending,
    InProgress,
    Completed,
    Alert,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(value: TaskStatusArg) -> Self {
        match value {
            TaskStatusArg::Pending => Self::Pending,
            TaskStatusArg::InProgress => Self::InProgress,
            TaskStatusArg::Completed => Self::Completed,
            TaskStatusArg::Alert => Self::Alert,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverrideTarget {
    Theme,
    UtcOffsetHours,
    PageSize,
    TickerIntervalMs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfigOverride {
    pub target: ConfigOverrideTarget,
    pub value: String,
}

/// Parse a raw `KEY=VALUE` override string into a structured target.
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let trimmed = raw.trim();
    let (key_raw, value_raw) = trimmed
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let value = value_raw.trim().to_string();
    let canonical_field =
        canonicalize_flag_name(key_raw).ok_or_else(|| "override key cannot be empty".to_string())?;

    let target = match canonical_field.as_str() {
        "theme" => ConfigOverrideTarget::Theme,
        "utc_offset_hours" | "utc_offset" => ConfigOverrideTarget::UtcOffsetHours,
        "page_size" => ConfigOverrideTarget::PageSize,
        "ticker_interval_ms" | "ticker_interval" => ConfigOverrideTarget::TickerIntervalMs,
        other => return Err(format!("unknown config field '{other}'")),
    };

    Ok(ParsedConfigOverride { target, value })
}

/// Folds every `--config-override` into one set of overrides; later flags win.
pub fn collect_overrides(raw: &[String]) -> Result<ConfigOverrides, String> {
    let mut overrides = ConfigOverrides::default();

    for entry in raw {
        let parsed = parse_config_override(entry)?;
        match parsed.target {
            ConfigOverrideTarget::Theme => overrides.theme = Some(parsed.value),
            ConfigOverrideTarget::UtcOffsetHours => {
                let hours = parsed
                    .value
                    .parse::<i8>()
                    .map_err(|_| format!("utc_offset_hours must be a whole number of hours, got '{}'", parsed.value))?;
                overrides.utc_offset_hours = Some(hours);
            }
            ConfigOverrideTarget::PageSize => {
                let size = parsed
                    .value
                    .parse::<usize>()
                    .map_err(|_| format!("page_size must be a positive number, got '{}'", parsed.value))?;
                overrides.page_size = Some(size);
            }
            ConfigOverrideTarget::TickerIntervalMs => {
                let millis = parsed
                    .value
                    .parse::<u64>()
                    .map_err(|_| format!("ticker_interval_ms must be milliseconds, got '{}'", parsed.value))?;
                overrides.ticker_interval_ms = Some(millis);
            }
        }
    }

    Ok(overrides)
}

fn canonicalize_flag_name(name: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
