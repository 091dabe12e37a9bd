mod api;
mod server;
mod youtube;

use clap::{Args, Parser, Subcommand};
use std::path::Path;

use commentscope::config::AppConfig;
use commentscope::insights::{generate_insights, InsightReport};
use commentscope::sentiment::score_comments;

#[derive(Parser)]
#[command(name = "commentscope", about = "YouTube comment sentiment analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long)]
    url: String,
    #[arg(long, default_value_t = 500)]
    max_comments: u32,
    #[arg(long)]
    keyword: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 5000)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => run_analyze(args).await,
        Command::Serve(args) => server::serve(args).await,
    }
}

async fn run_analyze(args: AnalyzeArgs) -> Result<(), String> {
    let (config, _) = AppConfig::load(None)?;
    let client = youtube::YouTubeClient::from_env(&config.fetch)?;

    let raw_comments = client
        .fetch_comments(&args.url, args.max_comments as usize)
        .await;
    if raw_comments.is_empty() {
        return Err("could not fetch any comments; check the URL or YOUTUBE_API_KEY".to_string());
    }

    let scored = score_comments(&raw_comments);
    let insights = generate_insights(&scored, args.keyword.as_deref(), config.analysis.top_words)?;

    if args.json {
        let payload = serde_json::to_string_pretty(&insights)
            .map_err(|err| format!("failed to serialize insights: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_report(&insights);
    Ok(())
}

fn print_report(insights: &InsightReport) {
    println!("Analyzed {} comments", insights.total_comments);
    println!(
        "Overall sentiment: {} ({:.3})",
        insights.overall_sentiment.label(),
        insights.overall_score
    );

    let breakdown = &insights.sentiment_breakdown;
    println!(
        "Breakdown: positive {} ({:.2}%) | neutral {} ({:.2}%) | negative {} ({:.2}%)",
        breakdown.positive.count,
        breakdown.positive.percentage,
        breakdown.neutral.count,
        breakdown.neutral.percentage,
        breakdown.negative.count,
        breakdown.negative.percentage
    );

    let opinions = &insights.top_opinions;
    if let Some(focus) = opinions.focus.as_deref() {
        println!("\nTop opinions ({})", focus);
    } else {
        println!("\nTop opinions");
    }
    if let Some(message) = opinions.message.as_deref() {
        println!("{}", message);
    }
    println!("Positive:");
    for comment in &opinions.positive {
        println!("- {}", comment);
    }
    println!("Negative:");
    for comment in &opinions.negative {
        println!("- {}", comment);
    }

    if !insights.word_frequencies.is_empty() {
        println!("\nTop words:");
        for entry in insights.word_frequencies.iter().take(10) {
            println!("  {} ({})", entry.text, entry.value);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
