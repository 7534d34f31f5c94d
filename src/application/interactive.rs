//! Line-driven swap widget over stdin/stdout

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::application::services::SwapService;
use crate::application::view;
use crate::domain::session::{Phase, SwapSession, VerificationStatus};
use crate::shared::errors::{AppError, SessionError};

/// One user event
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    From(String),
    To(String),
    Amount(String),
    Wallet(String),
    Swap,
    TransactionId(String),
    Verify,
    Back,
    Tokens,
    Show,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    let input = match cmd.to_ascii_lowercase().as_str() {
        "from" => Input::From(arg.to_string()),
        "to" => Input::To(arg.to_string()),
        "amount" => Input::Amount(arg.to_string()),
        "wallet" => Input::Wallet(arg.to_string()),
        "swap" | "submit" => Input::Swap,
        "txid" | "tx" => Input::TransactionId(arg.to_string()),
        "verify" => Input::Verify,
        "back" => Input::Back,
        "tokens" => Input::Tokens,
        "" | "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(format!("Unknown command: {} (type 'help')", other)),
    };
    Ok(input)
}

fn help(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => {
            "Commands: from <SYMBOL> | to <SYMBOL> | amount <N> | wallet <ADDRESS> | swap | tokens | show | quit\n"
        }
        Phase::ResultShown => "Commands: txid <ID> | verify | back | show | quit\n",
    }
}

/// Drive a session from `reader` until EOF or `quit`
pub async fn run<R, W>(service: &SwapService, reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = service.new_session()?;
    let mut pending_pool = service.spawn_pool_fetch();
    let config = service.config();

    writer.write_all(view::render(&session, &config.display, &config.swap).as_bytes()).await?;
    writer.write_all(help(session.phase()).as_bytes()).await?;
    writer.flush().await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if pending_pool.poll_into(&mut session) {
            debug!("Liquidity snapshot merged into session");
        }

        let input = match parse_line(&line) {
            Ok(input) => input,
            Err(msg) => {
                writer.write_all(format!("{}\n", msg).as_bytes()).await?;
                writer.flush().await?;
                continue;
            }
        };

        if input == Input::Quit {
            break;
        }

        let message = handle(service, &mut session, input).await;
        if let Some(message) = message {
            writer.write_all(format!("{}\n", message).as_bytes()).await?;
        }
        writer.write_all(view::render(&session, &config.display, &config.swap).as_bytes()).await?;
        writer.flush().await?;
    }

    info!(session = %session.id(), "Session closed");
    Ok(())
}

async fn handle(service: &SwapService, session: &mut SwapSession, input: Input) -> Option<String> {
    let result: Result<Option<String>, SessionError> = match input {
        Input::From(symbol) => session.select_from(&symbol).map(|_| None),
        Input::To(symbol) => session.select_to(&symbol).map(|_| None),
        Input::Amount(text) => session.set_amount(&text).map(|_| None),
        Input::Wallet(text) => session.set_wallet_address(&text).map(|_| None),
        Input::TransactionId(text) => session.set_transaction_id(&text).map(|_| None),
        Input::Swap => session.submit(service.gateway()).await.map(|_| None),
        Input::Verify => session.verify(service.gateway()).await.map(|status| match status {
            VerificationStatus::Error => Some("Verification request could not be sent.".to_string()),
            _ => None,
        }),
        Input::Back => session.back().map(|_| None),
        Input::Tokens => Ok(Some(view::render_catalog(session.catalog()))),
        Input::Help => Ok(Some(help(session.phase()).trim_end().to_string())),
        Input::Show | Input::Quit => Ok(None),
    };

    match result {
        Ok(message) => message,
        Err(e) => Some(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateway::{SwapGateway, SwapRequest, VerificationRequest};
    use crate::shared::config::AppConfig;
    use crate::shared::errors::GatewayError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::io::BufReader;

    #[derive(Default)]
    struct Recorder {
        swaps: Mutex<Vec<SwapRequest>>,
        verifications: Mutex<Vec<VerificationRequest>>,
    }

    #[async_trait]
    impl SwapGateway for Recorder {
        async fn fetch_liquidity_pool(&self) -> Result<HashMap<String, f64>, GatewayError> {
            Ok(HashMap::from([("RADCAT".to_string(), 1_000_000.0)]))
        }

        async fn dispatch_swap(&self, request: &SwapRequest) -> Result<(), GatewayError> {
            self.swaps.lock().unwrap().push(request.clone());
            Ok(())
        }

        async fn dispatch_verification(&self, request: &VerificationRequest) -> Result<(), GatewayError> {
            self.verifications.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("from pilim"), Ok(Input::From("pilim".to_string())));
        assert_eq!(parse_line("  amount   12.5 "), Ok(Input::Amount("12.5".to_string())));
        assert_eq!(parse_line("wallet"), Ok(Input::Wallet(String::new())));
        assert_eq!(parse_line("SWAP"), Ok(Input::Swap));
        assert_eq!(parse_line("txid abc 123"), Ok(Input::TransactionId("abc 123".to_string())));
        assert_eq!(parse_line(""), Ok(Input::Show));
        assert!(parse_line("dance").is_err());
    }

    #[tokio::test]
    async fn test_full_interaction() {
        let gateway = Arc::new(Recorder::default());
        let service = SwapService::new(AppConfig::default(), gateway.clone());
        let script = "amount 1000000\nswap\nwallet 1PhotonicWallet\nswap\nverify\ntxid abc123\nverify\nback\nquit\n";
        let mut output = Vec::new();

        run(&service, BufReader::new(script.as_bytes()), &mut output).await.unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Please enter your wallet address"));
        assert!(text.contains("You are swapping 1000000 RXD for approximately 169750.000000 RADCAT."));
        assert!(text.contains("YOUR_SWAP_WALLET_ADDRESS_HERE"));
        assert!(text.contains("Please enter your transaction ID"));
        assert!(text.contains("[Success]"));
        assert!(text.contains("https://discord.gg/pwBMDDzWWG"));
        assert!(text.trim_end().ends_with("Wallet: <enter your wallet address>"));

        assert_eq!(gateway.swaps.lock().unwrap().len(), 1);
        let verifications = gateway.verifications.lock().unwrap();
        assert_eq!(verifications.len(), 1);
        assert_eq!(verifications[0].transaction_id, "abc123");
    }

    #[tokio::test]
    async fn test_wrong_phase_reports_and_continues() {
        let gateway = Arc::new(Recorder::default());
        let service = SwapService::new(AppConfig::default(), gateway.clone());
        let mut output = Vec::new();

        run(&service, BufReader::new("back\nfrom DOGE\n".as_bytes()), &mut output)
            .await
            .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Cannot go back while idle"));
        assert!(text.contains("Unknown token: DOGE"));
        assert!(gateway.swaps.lock().unwrap().is_empty());
    }
}
