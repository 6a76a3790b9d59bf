//! sensu-tor-check Entry Point

use clap::error::ErrorKind;
use clap::Parser;
use sensu_tor_check::cli::{usage_error, Cli};
use sensu_tor_check::{event, health, logging, report};
use sensu_tor_check_common::HealthVerdict;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // 使い方の詳細は標準エラーへ、結果は1行だけ標準出力へ
                let _ = e.print();
                let verdict = HealthVerdict::from(usage_error(&e));
                return report::emit(&mut std::io::stdout().lock(), &verdict);
            }
        },
    };

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {}", e);
    }

    let verdict = match event::read_stdin_event() {
        Ok(event) => {
            let config = cli.into_config().with_event(event.as_ref());
            health::run_check(&config).await
        }
        Err(e) => HealthVerdict::from(e),
    };

    report::emit(&mut std::io::stdout().lock(), &verdict)
}
