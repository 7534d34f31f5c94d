//! CLI commands and handlers
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{error, info};

use crate::application::interactive;
use crate::application::services::SwapService;
use crate::application::view;
use crate::domain::gateway::VerificationRequest;
use crate::domain::session::VerificationStatus;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, ValidationError};
use crate::shared::utils::{format_amount, format_grouped, timestamp_now};

#[derive(Parser, Debug)]
#[command(name = "glyphswap", version)]
#[command(about = "GlyphSwap token swap client")]
pub struct Cli {
    /// Path to config file (optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Action endpoint URL (overrides config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in milliseconds (overrides config)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// CLI flags take priority over the config file
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.url = endpoint.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.endpoint.timeout_ms = timeout_ms;
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List tradable tokens
    Tokens,

    /// Estimate a swap without sending anything
    Quote {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
    },

    /// Fetch and show the liquidity pool
    Pool,

    /// Initiate a swap
    Swap {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
        /// Wallet that receives the swapped tokens
        #[arg(long)]
        wallet: String,
    },

    /// Submit a transaction ID for verification
    Verify {
        #[arg(long = "tx-id")]
        tx_id: String,
        #[arg(long)]
        wallet: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
    },

    /// Run the swap widget on the terminal
    Interactive,
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(command: Commands, config: AppConfig) -> Result<(), AppError> {
        let service = SwapService::from_config(config)?;
        match command {
            Commands::Tokens => {
                print!("{}", view::render_catalog(&service.config().catalog()));
                Ok(())
            }
            Commands::Quote { from, to, amount } => {
                print!("{}", Self::quote_text(&service, &from, &to, &amount)?);
                Ok(())
            }
            Commands::Pool => Self::execute_pool_command(&service).await,
            Commands::Swap { from, to, amount, wallet } => {
                Self::execute_swap_command(&service, &from, &to, &amount, &wallet).await
            }
            Commands::Verify { tx_id, wallet, from, to, amount } => {
                Self::execute_verify_command(&service, tx_id, wallet, &from, &to, amount).await
            }
            Commands::Interactive => {
                let stdin = BufReader::new(tokio::io::stdin());
                interactive::run(&service, stdin, tokio::io::stdout()).await
            }
        }
    }

    fn quote_text(service: &SwapService, from: &str, to: &str, amount: &str) -> Result<String, AppError> {
        let mut session = service.new_session()?;
        session.select_from(from)?;
        session.select_to(to)?;
        session.set_amount(amount)?;

        let q = session.quote_breakdown();
        let precision = service.config().display.precision;
        let from = &session.from_token().symbol;
        let to = &session.to_token().symbol;
        Ok(format!(
            "{} {} -> {} {}\n  rate: {} {} per {}\n  gross: {}\n  fee ({}%): {}\n  minimum input: {} {}\n",
            amount,
            from,
            format_amount(q.amount_out, precision),
            to,
            q.ratio,
            to,
            from,
            format_amount(q.gross, precision),
            session.calculator().fee_percent(),
            format_amount(q.fee, precision),
            format_amount(session.minimum_input(), precision),
            from,
        ))
    }

    async fn execute_pool_command(service: &SwapService) -> Result<(), AppError> {
        let balances = service.gateway().fetch_liquidity_pool().await?;
        let catalog = service.config().catalog();
        for token in catalog.tokens() {
            let balance = balances.get(&token.symbol).copied().unwrap_or(0.0);
            println!("{:<8} {}", token.symbol, format_grouped(balance));
        }
        let mut extra: Vec<_> = balances
            .iter()
            .filter(|(symbol, _)| catalog.get(symbol).is_none())
            .collect();
        extra.sort_by(|a, b| a.0.cmp(b.0));
        for (symbol, balance) in extra {
            println!("{:<8} {} (not in catalog)", symbol, format_grouped(*balance));
        }
        Ok(())
    }

    async fn execute_swap_command(
        service: &SwapService,
        from: &str,
        to: &str,
        amount: &str,
        wallet: &str,
    ) -> Result<(), AppError> {
        let mut session = service.new_session()?;
        session.select_from(from)?;
        session.select_to(to)?;
        session.set_amount(amount)?;
        session.set_wallet_address(wallet)?;

        if let Err(e) = session.submit(service.gateway()).await {
            error!("Swap was not initiated: {}", e);
            return Err(e.into());
        }

        let config = service.config();
        print!("{}", view::render_result(&session, &config.display, &config.swap));
        Ok(())
    }

    async fn execute_verify_command(
        service: &SwapService,
        tx_id: String,
        wallet: String,
        from: &str,
        to: &str,
        amount: String,
    ) -> Result<(), AppError> {
        let tx_id = tx_id.trim().to_string();
        if tx_id.is_empty() {
            return Err(ValidationError::MissingTransactionId.into());
        }
        let catalog = service.config().catalog();
        let request = VerificationRequest {
            transaction_id: tx_id,
            wallet_address: wallet.trim().to_string(),
            token_from: catalog.resolve(from)?.symbol.clone(),
            token_to: catalog.resolve(to)?.symbol.clone(),
            amount: amount.trim().to_string(),
            timestamp: timestamp_now(),
        };

        let status = match service.gateway().dispatch_verification(&request).await {
            Ok(()) => VerificationStatus::Success,
            Err(e) => {
                error!("Error verifying transaction: {}", e);
                VerificationStatus::Error
            }
        };

        match status {
            VerificationStatus::Success => {
                info!("Verification request sent for {}", request.transaction_id);
                println!("Your transaction has been submitted for verification.");
                Ok(())
            }
            _ => {
                println!(
                    "There was an error verifying your transaction. Please try again or contact support: {}",
                    service.config().swap.support_url
                );
                Err(AppError::GatewayError("verification request was not sent".to_string()))
            }
        }
    }
}
