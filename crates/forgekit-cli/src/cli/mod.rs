//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use forgekit_core::domain::{CloudProvider, DatabaseType, FrameworkTemplate, ServiceType};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "forgekit",
    bin_name = "forgekit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Add services to a monorepo project",
    long_about = "forgekit adds single-page apps, Next.js apps and NestJS services \
                  to a project, allocating ports and keeping forgekit.json in sync.",
    after_help = "EXAMPLES:\n\
        \x20 forgekit init shop --cloud aws\n\
        \x20 forgekit add dashboard --type spa\n\
        \x20 forgekit add orders-service --type nestjs --database postgres\n\
        \x20 forgekit list --format json\n\
        \x20 forgekit completions bash > /usr/share/bash-completion/completions/forgekit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a service to the project.
    #[command(
        visible_alias = "new",
        about = "Add a service to the project",
        after_help = "EXAMPLES:\n\
            \x20 forgekit add                       # asks for type and name\n\
            \x20 forgekit add dashboard --type spa\n\
            \x20 forgekit add portal    --type nextjs-auth\n\
            \x20 forgekit add users-service --type nestjs --database postgres"
    )]
    Add(AddArgs),

    /// Create `forgekit.json` for a new project.
    #[command(
        about = "Initialise a project",
        after_help = "EXAMPLES:\n\
            \x20 forgekit init shop\n\
            \x20 forgekit init shop --cloud gcp --template fullstack-auth\n\
            \x20 forgekit init shop --force   # replace an existing document"
    )]
    Init(InitArgs),

    /// List the project's services.
    #[command(
        visible_alias = "ls",
        about = "List services",
        after_help = "EXAMPLES:\n\
            \x20 forgekit list\n\
            \x20 forgekit list --format json"
    )]
    List(ListArgs),

    /// Check a name without generating anything.
    #[command(
        about = "Check a service name or URL prefix",
        after_help = "EXAMPLES:\n\
            \x20 forgekit check orders-service --type nestjs\n\
            \x20 forgekit check dashboard\n\
            \x20 forgekit check orders --prefix"
    )]
    Check(CheckArgs),

    /// Report which external tools are installed.
    #[command(about = "Check installed tooling")]
    Doctor,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 forgekit completions bash > ~/.local/share/bash-completion/completions/forgekit\n\
            \x20 forgekit completions zsh  > ~/.zfunc/_forgekit\n\
            \x20 forgekit completions fish > ~/.config/fish/completions/forgekit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the forgekit settings file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 forgekit config show\n\
            \x20 forgekit config path\n\
            \x20 forgekit config init"
    )]
    Config(ConfigCommands),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `forgekit add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Service name. Asked for when omitted.
    #[arg(value_name = "NAME", help = "Service name (prompted when omitted)")]
    pub name: Option<String>,

    /// Service type. Asked for when omitted.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Service type"
    )]
    pub service_type: Option<ServiceKind>,

    /// Database for a NestJS service.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DB",
        value_enum,
        help = "Provision a database (nestjs only)"
    )]
    pub database: Option<Database>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `forgekit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; follows the service naming rules.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[arg(long = "description", value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    #[arg(long = "cloud", value_enum, help = "Target cloud provider")]
    pub cloud: Option<Cloud>,

    #[arg(long = "template", value_enum, help = "Project template")]
    pub template: Option<Template>,

    /// Overwrite an existing `forgekit.json`.
    #[arg(short = 'f', long = "force", help = "Replace an existing project document")]
    pub force: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `forgekit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array of service entries.
    Json,
    /// One name per line.
    Plain,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `forgekit check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(value_name = "NAME", help = "Name to check")]
    pub name: String,

    /// Also check the suffix rule and availability in this project.
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        help = "Service type the name is meant for"
    )]
    pub service_type: Option<ServiceKind>,

    /// Treat NAME as a global URL prefix.
    #[arg(
        long = "prefix",
        conflicts_with = "service_type",
        help = "Validate NAME as a global URL prefix"
    )]
    pub prefix: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `forgekit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `forgekit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings as TOML.
    Show,
    /// Print the path to the settings file.
    Path,
    /// Write the default settings file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
        /// Write to this path instead of the default location.
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Service types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    /// React + Vite single-page app.
    Spa,
    /// Next.js app.
    #[value(alias = "next")]
    Nextjs,
    /// Next.js app wired to the project's auth service.
    #[value(name = "nextjs-auth", alias = "next-auth")]
    NextjsAuth,
    /// NestJS backend; name must end with -service.
    #[value(alias = "nest")]
    Nestjs,
}

impl From<ServiceKind> for ServiceType {
    fn from(kind: ServiceKind) -> Self {
        match kind {
            ServiceKind::Spa => ServiceType::Spa,
            ServiceKind::Nextjs => ServiceType::NextJs,
            ServiceKind::NextjsAuth => ServiceType::NextJsAuth,
            ServiceKind::Nestjs => ServiceType::NestJs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Database {
    #[value(alias = "postgresql", alias = "pg")]
    Postgres,
    Mysql,
    #[value(alias = "mongo")]
    Mongodb,
}

impl From<Database> for DatabaseType {
    fn from(db: Database) -> Self {
        match db {
            Database::Postgres => DatabaseType::Postgres,
            Database::Mysql => DatabaseType::Mysql,
            Database::Mongodb => DatabaseType::Mongodb,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Cloud {
    Gcp,
    Aws,
    Azure,
}

impl From<Cloud> for CloudProvider {
    fn from(cloud: Cloud) -> Self {
        match cloud {
            Cloud::Gcp => CloudProvider::Gcp,
            Cloud::Aws => CloudProvider::Aws,
            Cloud::Azure => CloudProvider::Azure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Template {
    Auth,
    FullstackAuth,
}

impl From<Template> for FrameworkTemplate {
    fn from(template: Template) -> Self {
        match template {
            Template::Auth => FrameworkTemplate::Auth,
            Template::FullstackAuth => FrameworkTemplate::FullstackAuth,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
