// Main entry point
use clap::Parser;
use colored::Colorize;
use mt_translate::application::demo::{demo_lines, run_query};
use mt_translate::infrastructure::config::{self, load_config, Config};
use mt_translate::infrastructure::logging::init_logging;
use mt_translate::interfaces::cli::Cli;
use mt_translate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.status {
        print_status(&config);
        return Ok(());
    }

    // 缺少凭据时无法构造客户端，直接退出
    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(2);
        }
    };

    if cli.query.is_empty() {
        for line in demo_lines(&state.translator).await {
            println!("{}", line);
        }
        return Ok(());
    }

    let query = cli.query.join(" ");
    let output = run_query(&state.translator, &query, cli.model_id(), cli.json).await;
    println!("{}", output.line);
    if output.exit_code != 0 {
        std::process::exit(output.exit_code);
    }

    Ok(())
}

fn print_status(config: &Config) {
    println!("{}", "mt Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );

    match config.credentials() {
        Ok(credentials) => {
            println!("Watson API: Configured");
            println!("Service URL: {}", credentials.service_url);
        }
        Err(e) => println!("Watson API: {}", e.to_string().yellow()),
    }
    println!("API version: {}", config.watson.version);
    println!("Timeout: {}s", config.http.timeout_secs);
}
