mod api;
mod cli_messages;
mod commands;
mod config;
mod consts;
mod environment;
mod error_handler;
mod events;
mod forms;
mod logging;
mod models;
mod pretty;
mod session;
mod stats;
mod ui;

use crate::commands::BeneficioChanges;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::forms::BeneficioForm;
use crate::session::{run_tui_mode, setup_session};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// BenefitX: manage benefits and transfer balances between them
struct Args {
    /// Base URL of the API (overrides BENEFITX_API_URL and the saved configuration)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive terminal UI
    Start {
        /// Paint a dark background behind the UI
        #[arg(long, action = ArgAction::SetTrue)]
        with_background: bool,
    },
    /// List benefits
    List {
        /// Only benefits whose name contains this text
        #[arg(long)]
        nome: Option<String>,

        /// Only active benefits
        #[arg(long, action = ArgAction::SetTrue)]
        active: bool,
    },
    /// Show a single benefit
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Total, count and average over the active benefits
    Summary,
    /// Create a benefit
    Create {
        #[arg(long)]
        nome: String,

        /// Amount, with comma or dot as decimal separator
        #[arg(long)]
        valor: String,

        #[arg(long)]
        descricao: Option<String>,

        /// Create it inactive
        #[arg(long, action = ArgAction::SetTrue)]
        inactive: bool,
    },
    /// Edit a benefit; omitted fields keep their current value
    Update {
        #[arg(value_name = "ID")]
        id: i64,

        #[arg(long)]
        nome: Option<String>,

        #[arg(long)]
        valor: Option<String>,

        #[arg(long)]
        descricao: Option<String>,

        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "inactive")]
        active: bool,

        #[arg(long, action = ArgAction::SetTrue)]
        inactive: bool,
    },
    /// Inactivate a benefit
    Delete {
        #[arg(value_name = "ID")]
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Transfer balance between two active benefits
    Transfer {
        #[arg(long, value_name = "ID")]
        from: i64,

        #[arg(long, value_name = "ID")]
        to: i64,

        #[arg(long)]
        amount: String,
    },
    /// Save the API URL to the configuration file
    Configure {
        #[arg(long, value_name = "URL")]
        api_url: String,
    },
    /// Delete the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    match &args.command {
        Command::Configure { api_url } => {
            let environment = api_url.parse::<Environment>()?;
            Config::new(Some(environment.api_url())).save(&config_path)?;
            print_cmd_success!(
                "Configuration saved",
                "{} -> {}",
                environment.api_url(),
                config_path.display()
            );
            return Ok(());
        }
        Command::Reset => {
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared", "{}", config_path.display());
            return Ok(());
        }
        _ => {}
    }

    let session = setup_session(args.api_url.as_deref(), &config_path)?;
    let api = &session.client;

    match args.command {
        Command::Start { with_background } => run_tui_mode(session, with_background).await,
        Command::List { nome, active } => {
            commands::list(api, nome.as_deref(), active).await?;
            Ok(())
        }
        Command::Show { id } => {
            commands::show(api, id).await?;
            Ok(())
        }
        Command::Summary => {
            commands::summary(api).await?;
            Ok(())
        }
        Command::Create {
            nome,
            valor,
            descricao,
            inactive,
        } => {
            let mut form = BeneficioForm::new();
            form.nome = nome;
            form.valor = valor;
            form.descricao = descricao.unwrap_or_default();
            form.ativo = !inactive;
            commands::create(api, form).await?;
            Ok(())
        }
        Command::Update {
            id,
            nome,
            valor,
            descricao,
            active,
            inactive,
        } => {
            let ativo = match (active, inactive) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let changes = BeneficioChanges {
                nome,
                descricao,
                valor,
                ativo,
            };
            commands::update(api, id, changes).await?;
            Ok(())
        }
        Command::Delete { id, yes } => {
            let stdin = std::io::stdin();
            commands::delete(api, id, yes, &mut stdin.lock()).await?;
            Ok(())
        }
        Command::Transfer { from, to, amount } => {
            commands::transfer(api, from, to, &amount).await?;
            Ok(())
        }
        Command::Configure { .. } | Command::Reset => Ok(()),
    }
}
