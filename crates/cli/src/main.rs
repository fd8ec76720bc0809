// ABOUTME: CLI for fetching and parsing site-info pages into JSON.
// ABOUTME: Accepts domains to fetch, or a local HTML file, and prints one JSON envelope per target.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::json;
use siteinfo::{parse_bytes, Client, ParseOutcome};

/// Fetch website traffic statistics and output JSON.
#[derive(Parser, Debug)]
#[command(name = "siteinfo-cli")]
#[command(about = "Parse website traffic statistics and print JSON", long_about = None)]
struct Args {
    /// Domain(s) to look up (e.g. "example.com").
    domains: Vec<String>,

    /// Parse a local HTML file instead of fetching.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// User-Agent header for requests.
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.html.is_none() && args.domains.is_empty() {
        eprintln!("error: at least one domain is required, or use --html");
        return ExitCode::from(1);
    }
    if args.html.is_some() && !args.domains.is_empty() {
        eprintln!("error: cannot use both --html and positional domains");
        return ExitCode::from(1);
    }

    let mut results = Vec::new();
    let mut had_error = false;

    if let Some(path) = &args.html {
        match fs::read(path) {
            Ok(bytes) => {
                let outcome = parse_bytes(&bytes, None);
                had_error |= !outcome.is_complete();
                results.push(envelope(&path.display().to_string(), outcome));
            }
            Err(e) => {
                eprintln!("error reading file {:?}: {}", path, e);
                return ExitCode::from(1);
            }
        }
    } else {
        let mut builder = Client::builder().timeout(Duration::from_secs(args.timeout_secs));
        if let Some(ua) = &args.user_agent {
            builder = builder.user_agent(ua);
        }
        let client = builder.build();

        for domain in &args.domains {
            let outcome = client.site_info(domain).await;
            had_error |= !outcome.is_complete();
            results.push(envelope(domain, outcome));
        }
    }

    // Single target => emit its envelope directly; multiple => an array.
    let output = if results.len() == 1 {
        results.remove(0)
    } else {
        json!(results)
    };

    let rendered = if args.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    };
    match rendered {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("error serializing output: {}", e);
            return ExitCode::from(1);
        }
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// One JSON envelope per target: the partial record is kept even on error so
/// the output shows exactly how far extraction got.
fn envelope(target: &str, outcome: ParseOutcome) -> serde_json::Value {
    json!({
        "target": target,
        "ok": outcome.is_complete(),
        "error": outcome.error.as_ref().map(|e| e.to_string()),
        "site": outcome.site,
    })
}
