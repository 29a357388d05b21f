//! rc-logger - CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use rc_logger::{
    cli::{Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Error},
    format::{Column, FormatOptions},
    output::{Logger, ProgressBar},
    prompt::RESPONSE_KEY,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {:#}", console::style("ERROR").red().bold(), e);
            match e.downcast_ref::<Error>() {
                Some(Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_)) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Some(Error::Prompt(_)) => ExitCode::from(exit_codes::PROMPT_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> anyhow::Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let mut logger = Logger::from_config(&config);
    let code = execute(&mut logger, &config, args.command).await?;
    Ok(code)
}

async fn execute(logger: &mut Logger, config: &Config, command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Logo => logger.print_logo().await?,
        Command::Banner { title } => logger.print_banner(&title).await?,
        Command::Message { text, style } => logger.message(&text, style.as_deref())?,
        Command::Heading { level, text } => logger.heading(level, &text)?,
        Command::Bullet { items } => {
            for item in &items {
                logger.bullet(item)?;
            }
        }
        Command::Status { text } => logger.status(&text)?,
        Command::Success { text } => logger.success(&text)?,
        Command::Warning { text } => logger.warning(&text)?,
        Command::Error { text } => logger.error(&text)?,
        Command::Divider { fill, style } => logger.make_divider(fill, style)?,
        Command::Columns { texts } => logger.columns(&texts, FormatOptions::default())?,
        Command::Ask { question } => {
            let response = logger.prompt(question).await?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Confirm { message } => {
            if !logger.prompt_yn(message.as_deref()).await? {
                return Ok(exit_codes::ABORT);
            }
        }
        Command::Progress { steps, delay_ms } => {
            run_progress(config, steps, Duration::from_millis(delay_ms)).await?
        }
        Command::Showcase => showcase(logger, config).await?,
    }

    Ok(exit_codes::SUCCESS)
}

async fn run_progress(config: &Config, steps: u64, delay: Duration) -> rc_logger::Result<()> {
    let bar = ProgressBar::with_length(steps, &config.palette)?;
    bar.start()?;
    for _ in 0..steps {
        tokio::time::sleep(delay).await;
        bar.increment();
    }
    bar.stop()
}

async fn showcase(logger: &mut Logger, config: &Config) -> rc_logger::Result<()> {
    logger.print_logo().await?;
    logger.print_banner("rc logger").await?;

    logger.heading(1, "Headings")?;
    logger.heading(2, "Second level")?;
    logger.heading(3, "Third level")?;

    logger.message(
        "Messages are wrapped to the configured width, padded on both sides and \
         filled so that styled backgrounds line up. Long paragraphs flow onto as many \
         lines as they need.",
        FormatOptions::default(),
    )?;
    logger.bullet("bullets keep their marker")?;
    logger.bullet("and indent any continuation lines under the text")?;
    logger.make_space(1)?;

    logger.columns(
        &[
            Column::new("Column").with_options(FormatOptions::styled("primary").with_width(20)),
            Column::new("Every column is wrapped on its own before the row is laid out."),
        ],
        FormatOptions::default(),
    )?;

    logger.status("status line")?;
    logger.success("success line")?;
    logger.warning("warning line")?;
    logger.error("error block")?;
    logger.make_divider('-', "muted")?;

    run_progress(config, 50, Duration::from_millis(10)).await?;

    let answer = logger.prompt("Type anything").await?;
    if let Some(value) = answer.get(RESPONSE_KEY) {
        logger.message(&format!("You typed: {}", value), "highlight")?;
    }
    Ok(())
}
