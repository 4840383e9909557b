// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod logging;
mod render;

use clap::{error::ErrorKind, ArgAction, Parser, Subcommand};
use onlyfounders_app::views::{AdminTab, PortfolioTab};
use onlyfounders_app::{
    ActionError, CancelToken, Launchpad, Notification, Page, SimulatedBackend, WizardStep,
};
use onlyfounders_core::{load_config, ConfigError, ExitCode, LaunchpadConfig, MachineError};
use onlyfounders_model::{Catalog, DraftField, UserAction, ValidationError};
use onlyfounders_query::{CatalogFilter, FilterState, QueryError};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

pub const CRATE_NAME: &str = "onlyfounders-cli";

#[derive(Parser)]
#[command(name = "onlyfounders")]
#[command(version, about = "Browse and fund launchpad projects from the terminal")]
#[command(
    after_help = "Environment:\n  ONLYFOUNDERS_CONFIG       Config file path\n  ONLYFOUNDERS_LOG_LEVEL    Log filter override\n  ONLYFOUNDERS_LOG_JSON     Emit logs as JSON\n  ONLYFOUNDERS_LATENCY_MS   Simulated action latency"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline stats, the featured fund and trending projects.
    Home,
    Discover {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        sort: Option<String>,
    },
    /// Funding page for a project, with an optional amount preview.
    Project {
        id: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long, conflicts_with = "amount")]
        quick: Option<usize>,
    },
    Invest {
        id: String,
        amount: String,
    },
    Portfolio {
        #[arg(long, default_value = "investments")]
        tab: String,
    },
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    /// Fill the submission wizard and optionally submit it.
    Create {
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
        #[arg(long)]
        step: Option<u8>,
        #[arg(long, default_value_t = false)]
        submit: bool,
    },
    Navigate {
        page: String,
        #[arg(long)]
        project: Option<String>,
    },
    /// Catalog fingerprint and record counts.
    Catalog,
}

#[derive(Subcommand)]
enum AdminCommand {
    Pending {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        risk: Option<String>,
    },
    Users,
    Analytics,
    Approved,
    Approve {
        id: String,
    },
    Reject {
        id: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
    User {
        id: String,
        action: String,
    },
}

#[derive(Clone, Copy)]
struct OutputMode {
    json: bool,
}

#[derive(Debug)]
struct CliError {
    exit_code: ExitCode,
    machine: MachineError,
}

impl CliError {
    fn usage(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            machine: MachineError::new("usage_error", message),
        }
    }

    fn validation(code: &str, message: &str) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            machine: MachineError::new(code, message),
        }
    }

    fn internal(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Internal,
            machine: MachineError::new("internal_error", message),
        }
    }

    fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.machine = self.machine.with_detail(key, value);
        self
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        Self::validation("validation_error", &err.0)
    }
}

impl From<QueryError> for CliError {
    fn from(err: QueryError) -> Self {
        Self::validation("validation_error", &err.message)
            .with_detail("query_code", &format!("{:?}", err.code))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::validation("config_error", &err.0)
    }
}

impl From<ActionError> for CliError {
    fn from(err: ActionError) -> Self {
        let message = err.to_string();
        match err {
            ActionError::Rejected(_) | ActionError::Validation(_) => {
                Self::validation(err.code(), &message)
            }
            ActionError::Cancelled => Self {
                exit_code: ExitCode::DependencyFailure,
                machine: MachineError::new("cancelled", &message),
            },
            _ => Self::internal(&message),
        }
    }
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success.code()),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code.code())
        }
    }
}

fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("error: {}", error.machine.message);
    }
}

fn emit_json<T: Serialize>(payload: &T) -> Result<(), CliError> {
    let text = serde_json::to_string(payload).map_err(|e| CliError::internal(&e.to_string()))?;
    println!("{text}");
    Ok(())
}

fn emit_page(session: &Launchpad<SimulatedBackend>, mode: OutputMode) -> Result<(), CliError> {
    let view = session.render();
    if mode.json {
        emit_json(&view)
    } else {
        print!("{}", render::page_text(&view));
        Ok(())
    }
}

fn emit_notification(note: Option<&Notification>, mode: OutputMode) -> Result<(), CliError> {
    if mode.json {
        return emit_json(&json!({ "notification": note }));
    }
    match note {
        Some(n) => println!("{}", n.message),
        None => println!("No action taken."),
    }
    Ok(())
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError::usage("invalid command line arguments")
                    .with_detail("error", &err.to_string()));
            }
        },
    };
    let config = load_config(cli.config.as_deref())?;
    logging::init_tracing(cli.verbose, config.log_json);
    let mode = OutputMode { json: cli.json };
    let command = cli
        .command
        .ok_or_else(|| CliError::usage("missing command; see --help"))?;

    let catalog = Catalog::builtin()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| CliError::internal(&format!("failed to start runtime: {e}")))?;
    let backend = SimulatedBackend::from_config(&config);
    let mut session = Launchpad::new(catalog, config, backend);
    tracing::debug!(command = command_name(&command), "dispatch");
    runtime.block_on(dispatch(&mut session, command, mode))
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Home => "home",
        Commands::Discover { .. } => "discover",
        Commands::Project { .. } => "project",
        Commands::Invest { .. } => "invest",
        Commands::Portfolio { .. } => "portfolio",
        Commands::Admin { .. } => "admin",
        Commands::Create { .. } => "create",
        Commands::Navigate { .. } => "navigate",
        Commands::Catalog => "catalog",
    }
}

fn parse_field_assignment(raw: &str) -> Result<(DraftField, String), CliError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        CliError::usage("--field expects KEY=VALUE").with_detail("field", raw)
    })?;
    Ok((DraftField::parse(key)?, value.to_string()))
}

async fn dispatch(
    session: &mut Launchpad<SimulatedBackend>,
    command: Commands,
    mode: OutputMode,
) -> Result<(), CliError> {
    match command {
        Commands::Home => {
            session.navigate(Page::Home);
            emit_page(session, mode)
        }
        Commands::Discover {
            search,
            category,
            status,
            sort,
        } => {
            let sort = sort.unwrap_or_else(|| session.config().default_sort.clone());
            let state = FilterState::from_params(
                search.as_deref(),
                category.as_deref(),
                status.as_deref(),
                Some(sort.as_str()),
            )?;
            session.set_filters(state);
            session.navigate(Page::Discover);
            emit_page(session, mode)
        }
        Commands::Project { id, amount, quick } => {
            match id {
                Some(id) => session.open_project(&id)?,
                None => session.navigate(Page::Project),
            }
            if let Some(amount) = amount {
                session.set_investment_amount(amount);
            }
            if let Some(index) = quick {
                session.apply_quick_amount(index).ok_or_else(|| {
                    CliError::usage("quick amount index out of range")
                        .with_detail("index", &index.to_string())
                })?;
            }
            emit_page(session, mode)
        }
        Commands::Invest { id, amount } => {
            session.open_project(&id)?;
            session.set_investment_amount(amount);
            let note = session.invest(CancelToken::never()).await?;
            emit_notification(Some(&note), mode)
        }
        Commands::Portfolio { tab } => {
            session.set_portfolio_tab(PortfolioTab::from_name(&tab));
            session.navigate(Page::Portfolio);
            emit_page(session, mode)
        }
        Commands::Admin { command } => dispatch_admin(session, command, mode).await,
        Commands::Create {
            fields,
            step,
            submit,
        } => {
            session.navigate(Page::Create);
            for raw in &fields {
                let (field, value) = parse_field_assignment(raw)?;
                session.set_field(field, value);
            }
            if submit {
                session.wizard_mut().go_to(WizardStep::Review);
                let note = session.submit_project(CancelToken::never()).await?;
                return emit_notification(Some(&note), mode);
            }
            if let Some(n) = step {
                let step = WizardStep::from_number(n).ok_or_else(|| {
                    CliError::usage("--step must be between 1 and 4")
                        .with_detail("step", &n.to_string())
                })?;
                session.wizard_mut().go_to(step);
            }
            emit_page(session, mode)
        }
        Commands::Navigate { page, project } => {
            let page = Page::from_name(&page);
            match (page, project) {
                (Page::Project, Some(id)) => session.open_project(&id)?,
                (page, _) => session.navigate(page),
            }
            emit_page(session, mode)
        }
        Commands::Catalog => emit_catalog(session.catalog(), session.config(), mode),
    }
}

async fn dispatch_admin(
    session: &mut Launchpad<SimulatedBackend>,
    command: AdminCommand,
    mode: OutputMode,
) -> Result<(), CliError> {
    let tab = match command {
        AdminCommand::Pending {
            search,
            category,
            risk,
        } => {
            let filter = CatalogFilter::from_params(
                search.as_deref(),
                category.as_deref(),
                None,
                risk.as_deref(),
            )?;
            session.set_admin_filter(filter);
            AdminTab::Pending
        }
        AdminCommand::Users => AdminTab::Users,
        AdminCommand::Analytics => AdminTab::Analytics,
        AdminCommand::Approved => AdminTab::Approved,
        AdminCommand::Approve { id } => {
            let note = session.approve_project(&id, CancelToken::never()).await?;
            return emit_notification(Some(&note), mode);
        }
        AdminCommand::Reject { id, reason } => {
            let note = session
                .reject_project(&id, &reason, CancelToken::never())
                .await?;
            return emit_notification(note.as_ref(), mode);
        }
        AdminCommand::User { id, action } => {
            let action = UserAction::parse(&action)?;
            let note = session
                .moderate_user(&id, action, CancelToken::never())
                .await?;
            return emit_notification(Some(&note), mode);
        }
    };
    session.set_admin_tab(tab);
    session.navigate(Page::Admin);
    emit_page(session, mode)
}

#[derive(Serialize)]
struct CatalogSummary {
    fingerprint: String,
    projects: usize,
    investments: usize,
    launched: usize,
    pending: usize,
    users: usize,
    simulated_latency_ms: u64,
}

fn emit_catalog(
    catalog: &Catalog,
    config: &LaunchpadConfig,
    mode: OutputMode,
) -> Result<(), CliError> {
    let summary = CatalogSummary {
        fingerprint: catalog.fingerprint()?,
        projects: catalog.projects.len(),
        investments: catalog.investments.len(),
        launched: catalog.launched.len(),
        pending: catalog.pending.len(),
        users: catalog.users.len(),
        simulated_latency_ms: config.simulated_latency_ms,
    };
    if mode.json {
        return emit_json(&summary);
    }
    println!("fingerprint: {}", summary.fingerprint);
    println!(
        "projects={} investments={} launched={} pending={} users={}",
        summary.projects, summary.investments, summary.launched, summary.pending, summary.users
    );
    println!("simulated latency: {}ms", summary.simulated_latency_ms);
    Ok(())
}
