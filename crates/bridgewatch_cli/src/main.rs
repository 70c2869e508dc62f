mod cli;
mod render;

use bridgewatch_core::checkin::attempt_checkin;
use bridgewatch_core::config::{self, Config, Palette, palette_for_theme};
use bridgewatch_core::dataset::Dataset;
use bridgewatch_core::error::AppError;
use bridgewatch_core::filter::{
    DateRange, HistoryFilter, PlanFilter, TaskFilter, distinct, filter,
};
use bridgewatch_core::model::{CurrentWork, WorkerTaskStatus};
use bridgewatch_core::page::{DEFAULT_PAGE_SIZE, PLAN_PAGE_SIZE, Page, paginate};
use bridgewatch_core::route::resolve;
use bridgewatch_core::storage::json_store;
use bridgewatch_core::ticker::AlertTicker;
use bridgewatch_core::{stats, validate};
use clap::{CommandFactory, Parser};
use cli::{
    Cli, Command, DatasetCommand, OptionsList, PageArgs, RangeArgs, WorkerCommand,
    collect_overrides,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::Path;
use time::{OffsetDateTime, UtcOffset};
use tracing_subscriber::EnvFilter;

/// Everything a command needs: the records plus the resolved presentation settings.
struct Session {
    dataset: Dataset,
    config: Config,
    offset: UtcOffset,
    palette: Palette,
    /// Clock for the whole command; the demo data set is built relative to it.
    now: OffsetDateTime,
}

fn open_session(raw_overrides: &[String], dataset: Option<&Path>) -> Result<Session, AppError> {
    let loaded = config::load_config_with_fallback();
    if let Some(err) = loaded.error.as_ref() {
        eprintln!("WARNING: config ignored: {}", err);
    }

    let overrides = collect_overrides(raw_overrides).map_err(AppError::invalid_input)?;
    let config = config::merge_overrides(&loaded.config, &overrides);
    let offset = config.utc_offset()?;
    let palette = palette_for_theme(config.theme.as_deref());

    let now = OffsetDateTime::now_utc();
    let source = json_store::dataset_source(dataset);
    let dataset = json_store::load(&source, now)?;

    Ok(Session {
        dataset,
        config,
        offset,
        palette,
        now,
    })
}

fn date_range(range: &RangeArgs, offset: UtcOffset) -> Result<Option<DateRange>, AppError> {
    match (range.from.as_deref(), range.to.as_deref()) {
        (Some(from), Some(to)) => Ok(Some(DateRange::parse(from, to)?.with_offset(offset))),
        (None, None) => Ok(None),
        _ => Err(AppError::invalid_input("both --from and --to are required")),
    }
}

fn page_of<'a, T>(
    items: &[&'a T],
    paging: &PageArgs,
    config: &Config,
    default_size: usize,
) -> Result<Page<&'a T>, AppError> {
    let size = paging
        .page_size
        .unwrap_or_else(|| config.page_size_or(default_size));
    paginate(items, paging.page, size)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let rendered =
        serde_json::to_string(value).map_err(|err| AppError::invalid_data(err.to_string()))?;
    println!("{}", rendered);
    Ok(())
}

fn print_page<T, F>(page: &Page<T>, json: bool, table: F) -> Result<(), AppError>
where
    T: Serialize,
    F: FnOnce(&[T]) -> String,
{
    if json {
        return print_json(page);
    }

    if page.items.is_empty() {
        println!("No matching records");
    } else {
        println!("{}", table(&page.items));
    }
    println!("{}", render::page_footer(page));
    Ok(())
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                args.push(std::mem::take(&mut current));
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(AppError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() {
        args.push(current);
    }

    Ok(args)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn print_route(path: &str, json: bool) -> Result<(), AppError> {
    let resolved = resolve(path);
    if json {
        return print_json(&resolved);
    }
    let suffix = if resolved.redirected { " (redirected)" } else { "" };
    println!("{}{}", resolved.view, suffix);
    Ok(())
}

fn run_command(cli: Cli) -> Result<(), AppError> {
    let Cli {
        command,
        json,
        dataset,
        config_override,
    } = cli;

    match command {
        Command::Route { path } => print_route(&path, json),
        Command::Dataset(command) => {
            let session = open_session(&config_override, dataset.as_deref())?;
            run_dataset_command(command, json, &session)
        }
    }
}

fn run_dataset_command(command: DatasetCommand, json: bool, session: &Session) -> Result<(), AppError> {
    let Session {
        dataset,
        config,
        offset,
        palette,
        now,
    } = session;
    let offset = *offset;

    match command {
        DatasetCommand::Plans {
            range,
            package,
            district,
            unit,
            paging,
        } => {
            let criteria = PlanFilter {
                date_range: date_range(&range, offset)?,
                project_package: package,
                district,
                inspection_unit: unit,
            };
            let matched = filter(&dataset.plans, &criteria);
            tracing::debug!(total = dataset.plans.len(), matched = matched.len(), "plans filtered");
            let page = page_of(&matched, &paging, config, PLAN_PAGE_SIZE)?;
            print_page(&page, json, render::plans)?;
        }
        DatasetCommand::History {
            range,
            operator,
            package,
            status,
            paging,
        } => {
            let criteria = HistoryFilter {
                date_range: date_range(&range, offset)?,
                operator_name: operator,
                project_package: package,
                status: status.map(Into::into),
            };
            let matched = filter(&dataset.history, &criteria);
            tracing::debug!(total = dataset.history.len(), matched = matched.len(), "history filtered");
            let page = page_of(&matched, &paging, config, DEFAULT_PAGE_SIZE)?;
            print_page(&page, json, |rows| render::history(rows, offset))?;
        }
        DatasetCommand::Tasks {
            range,
            operator,
            package,
            status,
            paging,
        } => {
            let criteria = TaskFilter {
                date_range: date_range(&range, offset)?,
                operator_name: operator,
                project_package: package,
                status: status.map(Into::into),
            };
            let matched = filter(&dataset.tasks, &criteria);
            tracing::debug!(total = dataset.tasks.len(), matched = matched.len(), "tasks filtered");
            let page = page_of(&matched, &paging, config, DEFAULT_PAGE_SIZE)?;
            print_page(&page, json, |rows| render::tasks(rows, offset, palette))?;
        }
        DatasetCommand::Show { id } => {
            let trimmed = id.trim();
            if trimmed.is_empty() {
                return Err(AppError::invalid_input("id is required"));
            }
            let task = dataset
                .tasks
                .iter()
                .find(|task| task.id == trimmed)
                .ok_or_else(|| AppError::invalid_input("task not found"))?;
            if json {
                print_json(task)?;
            } else {
                println!("{}", render::task_detail(task, offset));
            }
        }
        DatasetCommand::Devices => {
            if json {
                print_json(&dataset.devices)?;
            } else {
                println!("{}", render::devices(&dataset.devices, offset));
            }
        }
        DatasetCommand::Personnel => {
            if json {
                print_json(&dataset.personnel)?;
            } else {
                println!("{}", render::personnel(&dataset.personnel, offset));
            }
        }
        DatasetCommand::Stats => {
            let counts = stats::dashboard(dataset);
            if json {
                print_json(&counts)?;
            } else {
                println!("{}", render::stats(&counts));
            }
        }
        DatasetCommand::Alerts { ticks } => {
            let mut ticker = AlertTicker::new(&dataset.alerts, config.ticker_interval());
            let Some(first) = ticker.current().cloned() else {
                if json {
                    print_json(&Vec::<()>::new())?;
                } else {
                    println!("No alerts");
                }
                return Ok(());
            };

            let mut shown = vec![first];
            if !json {
                println!("{}", render::alert_line(&shown[0], offset, palette));
            }
            for _ in 0..ticks {
                std::thread::sleep(ticker.interval());
                if let Some(next) = ticker.advance() {
                    if !json {
                        println!("{}", render::alert_line(next, offset, palette));
                    }
                    shown.push(next.clone());
                }
            }
            if json {
                print_json(&shown)?;
            }
        }
        DatasetCommand::Checkin {
            package,
            route,
            segment,
            seed,
        } => {
            let selection = [package, route, segment];
            let result = match seed {
                Some(seed) => attempt_checkin(
                    &dataset.project_tree,
                    &selection,
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => attempt_checkin(&dataset.project_tree, &selection, &mut rand::rng()),
            }?;
            if json {
                print_json(&result)?;
            } else {
                let headline = if result.success {
                    "Checked in, video connected"
                } else {
                    "Checked in, video needs a manual start"
                };
                println!("{}: {}", headline, result.labels.join(" / "));
                println!("{}", result.message);
            }
        }
        DatasetCommand::BindCheck { sn, personnel } => {
            validate::device_binding(
                &sn,
                personnel.as_deref(),
                &dataset.devices,
                &dataset.personnel,
            )?;
            if json {
                print_json(&serde_json::json!({ "sn": sn.trim(), "ok": true }))?;
            } else {
                println!("Device {} can be bound", sn.trim());
            }
        }
        DatasetCommand::PersonnelCheck {
            name,
            phone,
            sn,
            personnel,
        } => {
            validate::personnel_form(&name, &phone)?;
            if let Some(sn) = sn.as_deref() {
                validate::device_binding(
                    sn,
                    personnel.as_deref(),
                    &dataset.devices,
                    &dataset.personnel,
                )?;
            }
            if json {
                print_json(&serde_json::json!({ "name": name.trim(), "ok": true }))?;
            } else {
                println!("Personnel form for {} is valid", name.trim());
            }
        }
        DatasetCommand::Options { list } => {
            let fields = filter_options(dataset, list);
            if json {
                let map: serde_json::Map<String, serde_json::Value> = fields
                    .iter()
                    .map(|(field, values)| (field.to_string(), serde_json::json!(values)))
                    .collect();
                print_json(&map)?;
            } else {
                println!("{}", render::options(&fields));
            }
        }
        DatasetCommand::Worker { view } => match view {
            WorkerCommand::Pending => {
                if json {
                    print_json(&dataset.worker_tasks)?;
                } else {
                    println!("{}", render::worker_tasks(&dataset.worker_tasks, offset));
                }
            }
            WorkerCommand::Current => match dataset.current_work.as_ref() {
                Some(work) if json => print_json(work)?,
                Some(work) => println!("{}", render::current_work(work, offset)),
                None if json => println!("null"),
                None => println!("No active session"),
            },
            WorkerCommand::History => {
                if json {
                    print_json(&dataset.worker_history)?;
                } else {
                    println!("{}", render::worker_history(&dataset.worker_history, offset));
                }
            }
            WorkerCommand::Checkin { task_id, minutes } => {
                let task = dataset
                    .worker_tasks
                    .iter()
                    .find(|task| task.id == task_id.trim())
                    .ok_or_else(|| AppError::invalid_input("worker task not found"))?;
                if task.status != WorkerTaskStatus::Pending {
                    return Err(AppError::invalid_input(format!(
                        "worker task {} is {}",
                        task.id,
                        task.status.as_str()
                    )));
                }

                let mut work = CurrentWork::begin(task, *now, None);
                if minutes > 0 {
                    // The stream is up well before the first minute passes.
                    work.video_connected();
                }
                for _ in 0..minutes {
                    work.tick();
                }
                tracing::debug!(task = %work.task_id, minutes = work.duration, "session started");

                if json {
                    print_json(&work)?;
                } else {
                    println!("{}", render::current_work(&work, offset));
                }
            }
            WorkerCommand::Checkout {
                no_trajectory,
                note,
            } => {
                let work = dataset
                    .current_work
                    .clone()
                    .ok_or_else(|| AppError::invalid_input("no active session"))?;
                let finished = work.checkout(*now, !no_trajectory, note)?;
                if json {
                    print_json(&finished)?;
                } else {
                    println!(
                        "{}",
                        render::worker_history(std::slice::from_ref(&finished), offset)
                    );
                }
            }
        },
        DatasetCommand::Export { path } => {
            json_store::export_dataset(&path, dataset)?;
            if json {
                print_json(&serde_json::json!({ "path": path.display().to_string() }))?;
            } else {
                println!("Exported data set to {}", path.display());
            }
        }
    }

    Ok(())
}

fn filter_options(dataset: &Dataset, list: OptionsList) -> Vec<(&'static str, Vec<&str>)> {
    match list {
        OptionsList::Plans => vec![
            ("project_package", distinct(&dataset.plans, |plan| plan.project_package.as_str())),
            ("district", distinct(&dataset.plans, |plan| plan.district.as_str())),
            ("inspection_unit", distinct(&dataset.plans, |plan| plan.inspection_unit.as_str())),
        ],
        OptionsList::History => vec![
            ("operator_name", distinct(&dataset.history, |record| record.operator_name.as_str())),
            ("project_package", distinct(&dataset.history, |record| record.project_package.as_str())),
        ],
        OptionsList::Tasks => {
            let mut operators = distinct(&dataset.tasks, |task| {
                task.operator_name.as_deref().unwrap_or_default()
            });
            operators.retain(|name| !name.is_empty());
            vec![
                ("operator_name", operators),
                ("project_package", distinct(&dataset.tasks, |task| task.project_package.as_str())),
            ]
        }
    }
}

fn run_interactive() -> Result<(), AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        let args = match split_command_line(line) {
            Ok(args) => args,
            Err(err) => {
                eprintln!("ERROR: {}", err);
                continue;
            }
        };

        if args.is_empty() {
            continue;
        }

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push("bridgewatch".to_string());
        argv.extend(args);

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                continue;
            }
        };

        if let Err(err) = run_command(cli) {
            eprintln!("ERROR: {}", err);
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        if let Err(err) = run_interactive() {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            print!("{err}");
            return;
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::split_command_line;

    #[test]
    fn split_keeps_quoted_words_together() {
        let args = split_command_line(r#"plans --package "浦东新区主干桥梁定检" --page 2"#).unwrap();
        assert_eq!(args, vec!["plans", "--package", "浦东新区主干桥梁定检", "--page", "2"]);
    }

    #[test]
    fn split_rejects_unterminated_quote() {
        let err = split_command_line(r#"history --operator "刘强"#).unwrap_err();
        assert_eq!(err.code(), "invalid_input");
    }
}
