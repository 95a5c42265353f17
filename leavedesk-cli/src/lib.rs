//! Command-line operator for the HR module.
//!
//! The binary registers the module into a fresh host context (so route
//! and translation problems surface the same way they would in the shell)
//! and drives the module's state facades against the configured API.

pub mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use leavedesk_client::{HttpTransport, Transport};
use leavedesk_hr::{HrAbsenceTypeStore, HrAllowanceStore, HrLeaveStore, HrSystemStore, hr_module};
use leavedesk_module_host::{HostContext, register};
use leavedesk_module_sdk::{ModuleDescriptor, StateFacade};
use leavedesk_types::{
    AbsenceTypeFilter, AllowanceFilter, CalendarFilter, LeaveRequestFilter, LeaveRequestStatus,
    Paging, UserFilter,
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

pub use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "leavedesk")]
#[command(about = "Operate the leavedesk HR module from the command line")]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "leavedesk.toml")]
    pub config: PathBuf,

    /// Override `client.api_base_url`
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for the API
    #[arg(long, env = "LEAVEDESK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub page_size: Option<u32>,

    /// Fetch every record in one response
    #[arg(long, conflicts_with_all = ["page", "page_size"])]
    pub all: bool,
}

impl PageArgs {
    pub fn paging(&self) -> Paging {
        if self.all {
            Paging::unbounded()
        } else {
            Paging::new(self.page.unwrap_or(0), self.page_size.unwrap_or(0))
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register the module into an empty host and list the live routes
    Routes {
        /// Locale used to translate menu titles
        #[arg(long, default_value = "en-US")]
        locale: String,
    },
    /// Module health check
    Health,
    /// Dashboard statistics
    Stats,
    /// List absence types
    AbsenceTypes {
        #[arg(long)]
        query: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// List leave requests
    LeaveRequests {
        #[arg(long)]
        user_id: Option<u32>,
        /// Status filter, repeatable (`pending`, `approved`, ...)
        #[arg(long)]
        status: Vec<LeaveRequestStatus>,
        /// YYYY-MM-DD or RFC 3339
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show one leave request
    LeaveRequest { id: String },
    /// Approve a leave request
    Approve {
        id: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        approver_email: Option<String>,
        #[arg(long)]
        approver_name: Option<String>,
    },
    /// Reject a leave request
    Reject {
        id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel a leave request
    Cancel { id: String },
    /// Team calendar events
    Calendar {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        org_unit: Option<String>,
        #[arg(long)]
        user_id: Option<u32>,
    },
    /// List leave allowances
    Allowances {
        #[arg(long)]
        user_id: Option<u32>,
        #[arg(long)]
        absence_type_id: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Per-absence-type balance of one user
    Balance {
        user_id: u32,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Look up users through the admin API
    Users {
        #[arg(long)]
        query: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
}

/// A registered HR module bound to one transport.
pub struct Session {
    descriptor: ModuleDescriptor,
    host: HostContext,
}

impl Session {
    pub fn open(config: &AppConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(config.client.clone())
            .context("failed to build HTTP transport")?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: &AppConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let descriptor = hr_module(transport).context("invalid HR module descriptor")?;
        let mut host = HostContext::with_config(&config.host);
        register(&mut host, &descriptor).context("module registration failed")?;
        Ok(Self { descriptor, host })
    }

    #[must_use]
    pub fn host(&self) -> &HostContext {
        &self.host
    }

    fn facade<T: StateFacade>(&self, name: &str) -> Result<&T> {
        self.descriptor
            .facade_as::<T>(name)
            .ok_or_else(|| anyhow!("module has no '{name}' facade"))
    }

    /// Runs one command and returns its JSON result.
    pub async fn run(&self, command: &Command) -> Result<Value> {
        debug!("Running {:?}", command);
        match command {
            Command::Routes { locale } => Ok(self.routes(locale)),
            Command::Health => to_json(self.system()?.health().await?),
            Command::Stats => to_json(self.system()?.stats().await?),
            Command::AbsenceTypes { query, paging } => {
                let form = AbsenceTypeFilter {
                    query: query.clone(),
                };
                to_json(
                    self.absence_types()?
                        .list_absence_types(Some(&paging.paging()), Some(&form))
                        .await?,
                )
            }
            Command::LeaveRequests {
                user_id,
                status,
                start_date,
                end_date,
                paging,
            } => {
                let form = LeaveRequestFilter {
                    user_id: *user_id,
                    status: status.clone(),
                    start_date: start_date.clone(),
                    end_date: end_date.clone(),
                };
                to_json(
                    self.leave()?
                        .list_leave_requests(Some(&paging.paging()), Some(&form))
                        .await?,
                )
            }
            Command::LeaveRequest { id } => to_json(self.leave()?.get_leave_request(id).await?),
            Command::Approve {
                id,
                notes,
                approver_email,
                approver_name,
            } => to_json(
                self.leave()?
                    .approve_leave_request(
                        id,
                        notes.as_deref(),
                        approver_email.as_deref(),
                        approver_name.as_deref(),
                    )
                    .await?,
            ),
            Command::Reject { id, notes } => to_json(
                self.leave()?
                    .reject_leave_request(id, notes.as_deref())
                    .await?,
            ),
            Command::Cancel { id } => to_json(self.leave()?.cancel_leave_request(id).await?),
            Command::Calendar {
                start_date,
                end_date,
                org_unit,
                user_id,
            } => {
                let filter = CalendarFilter {
                    start_date: start_date.clone(),
                    end_date: end_date.clone(),
                    org_unit_name: org_unit.clone(),
                    user_id: *user_id,
                };
                to_json(self.leave()?.calendar_events(Some(&filter)).await?)
            }
            Command::Allowances {
                user_id,
                absence_type_id,
                year,
                paging,
            } => {
                let form = AllowanceFilter {
                    user_id: *user_id,
                    absence_type_id: absence_type_id.clone(),
                    year: *year,
                };
                to_json(
                    self.allowances()?
                        .list_allowances(Some(&paging.paging()), Some(&form))
                        .await?,
                )
            }
            Command::Balance { user_id, year } => {
                to_json(self.allowances()?.user_balance(*user_id, *year).await?)
            }
            Command::Users { query, paging } => {
                let form = UserFilter {
                    query: query.clone(),
                    ..UserFilter::default()
                };
                to_json(
                    self.system()?
                        .list_users(Some(&paging.paging()), Some(&form))
                        .await?,
                )
            }
        }
    }

    fn routes(&self, locale: &str) -> Value {
        let routes: Vec<Value> = self
            .host
            .router()
            .routes()
            .map(|route| {
                let title = route
                    .meta
                    .get("title")
                    .and_then(Value::as_str)
                    .and_then(|key| self.host.locales().translate(locale, key));
                json!({
                    "name": route.name,
                    "path": route.path,
                    "owner": route.owner,
                    "redirect": route.redirect,
                    "title": title,
                })
            })
            .collect();
        Value::Array(routes)
    }

    fn leave(&self) -> Result<&HrLeaveStore> {
        self.facade(HrLeaveStore::NAME)
    }

    fn absence_types(&self) -> Result<&HrAbsenceTypeStore> {
        self.facade(HrAbsenceTypeStore::NAME)
    }

    fn allowances(&self) -> Result<&HrAllowanceStore> {
        self.facade(HrAllowanceStore::NAME)
    }

    fn system(&self) -> Result<&HrSystemStore> {
        self.facade(HrSystemStore::NAME)
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("failed to render result")
}
