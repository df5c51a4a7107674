use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use vocamuse_config::Config;
use vocamuse_core::BlobStore;
use vocamuse_repl::{Outcome, Terminal};

use crate::commands::open_vocabulary;

/// Interactive loop on stdin until the exit option, end of input or Ctrl+C
pub async fn run(config: Config) -> anyhow::Result<()> {
    let mut terminal = Terminal::new(open_vocabulary(&config), &config.terminal);

    // Prompt and pause only make sense for a person at a terminal
    let interactive = atty::is(atty::Stream::Stdin);
    let pause = Duration::from_millis(config.terminal.commit_pause_ms);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_unread(&mut terminal);
    loop {
        if interactive {
            print!("{}", config.terminal.prompt);
            io::stdout().flush().context("failed to flush stdout")?;
        }

        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read stdin")?,
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break;
            }
        };
        let Some(line) = line else {
            tracing::info!("Input closed");
            break;
        };

        let outcome = terminal.submit(&line);
        print_unread(&mut terminal);

        match outcome {
            Outcome::Stay => {}
            Outcome::Pending => {
                if interactive {
                    tokio::time::sleep(pause).await;
                }
                terminal.advance();
                print_unread(&mut terminal);
            }
            Outcome::Exit => break,
        }
    }

    Ok(())
}

fn print_unread<S: BlobStore>(terminal: &mut Terminal<S>) {
    for line in terminal.take_unread() {
        println!("{line}");
    }
}
