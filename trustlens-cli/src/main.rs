//! TrustLens CLI
//!
//! Replays recorded probe outcomes through the collector and scoring
//! engine, and prints the built-in scoring profiles.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use trustlens_core::{ContentDomain, Profile, RawValue, SignalCategory};
use trustlens_runtime::{Analyzer, CollectorConfig, ProbeError, StaticProbe, Subject};

#[derive(Parser)]
#[command(name = "trustlens")]
#[command(author, version, about = "TrustLens: content trust scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a recorded probe run
    Analyze {
        /// JSON file with recorded probe outcomes
        #[arg(short, long)]
        input: PathBuf,

        /// Content domain of the subject
        #[arg(short, long, value_enum)]
        domain: DomainArg,

        /// What the signals were measured against (shown in logs)
        #[arg(short, long, default_value = "<recorded>")]
        subject: String,

        /// Profile override file (JSON, validated on load)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Write the result JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save the result to a timestamped file when --output is not set
        #[arg(long)]
        save: bool,

        /// Per-probe timeout budget in milliseconds
        #[arg(long, default_value = "5000")]
        timeout_ms: u64,
    },

    /// Print the built-in scoring profiles
    Profiles {
        /// Limit output to one domain
        #[arg(short, long, value_enum)]
        domain: Option<DomainArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DomainArg {
    Url,
    Image,
    Text,
}

impl From<DomainArg> for ContentDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Url => ContentDomain::Url,
            DomainArg::Image => ContentDomain::Image,
            DomainArg::Text => ContentDomain::Text,
        }
    }
}

/// One recorded probe outcome, as captured from a collaborator run
#[derive(Debug, Deserialize)]
struct RecordedOutcome {
    name: String,
    category: SignalCategory,
    #[serde(default)]
    value: Option<RawValue>,
    #[serde(default)]
    error: Option<RecordedError>,
    /// Original probe latency, replayed against the timeout budget
    #[serde(default)]
    delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RecordedError {
    Timeout,
    Network,
    Parse,
    NotApplicable,
    Fault,
}

impl From<RecordedError> for ProbeError {
    fn from(error: RecordedError) -> Self {
        match error {
            RecordedError::Timeout => ProbeError::Timeout,
            RecordedError::Network => ProbeError::Network("recorded".to_string()),
            RecordedError::Parse => ProbeError::Parse("recorded".to_string()),
            RecordedError::NotApplicable => ProbeError::NotApplicable,
            RecordedError::Fault => ProbeError::Fault("recorded".to_string()),
        }
    }
}

impl RecordedOutcome {
    fn into_probe(self) -> Result<StaticProbe> {
        let probe = match (self.value, self.error) {
            (_, Some(error)) => StaticProbe::failing(&self.name, self.category, error.into()),
            (Some(value), None) => StaticProbe::value(&self.name, self.category, value),
            (None, None) => bail!("recorded outcome '{}' has neither value nor error", self.name),
        };
        Ok(match self.delay_ms {
            Some(ms) => probe.with_delay(Duration::from_millis(ms)),
            None => probe,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Analyze {
            input,
            domain,
            subject,
            profile,
            output,
            save,
            timeout_ms,
        } => {
            run_analyze(input, domain.into(), subject, profile, output, save, timeout_ms).await?;
        }
        Commands::Profiles { domain } => {
            print_profiles(domain.map(ContentDomain::from));
        }
    }

    Ok(())
}

async fn run_analyze(
    input: PathBuf,
    domain: ContentDomain,
    subject: String,
    profile_path: Option<PathBuf>,
    output: Option<PathBuf>,
    save: bool,
    timeout_ms: u64,
) -> Result<()> {
    let raw = fs::read_to_string(&input)
        .with_context(|| format!("reading recorded outcomes from {}", input.display()))?;
    let outcomes: Vec<RecordedOutcome> =
        serde_json::from_str(&raw).context("parsing recorded outcomes")?;
    if outcomes.is_empty() {
        bail!("no recorded outcomes in {}", input.display());
    }

    // Profile deserialization re-runs the fail-fast validation, so a
    // malformed override is rejected before any scoring happens.
    let override_profile: Option<Profile> = match &profile_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading profile override from {}", path.display()))?;
            Some(serde_json::from_str(&raw).context("invalid profile override")?)
        }
        None => None,
    };
    let profile = override_profile
        .as_ref()
        .unwrap_or_else(|| domain.profile());

    let mut analyzer = Analyzer::new(CollectorConfig {
        probe_timeout: Duration::from_millis(timeout_ms),
    });
    for outcome in outcomes {
        analyzer = analyzer.with_probe(outcome.into_probe()?);
    }

    let subject = match domain {
        ContentDomain::Url => Subject::Url { url: subject },
        ContentDomain::Image => Subject::Image {
            path: PathBuf::from(subject),
        },
        ContentDomain::Text => Subject::Text { text: subject },
    };

    let result = analyzer.run_with_profile(&subject, profile).await;

    println!("🔎 TrustLens analysis ({:?})", profile.domain());
    println!("   Score:   {}", result.trust_score);
    println!("   Verdict: {}", result.verdict);
    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    let json = serde_json::to_string_pretty(&result)?;
    let output_path = match (output, save) {
        (Some(path), _) => Some(path),
        (None, true) => {
            let timestamp = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S");
            Some(PathBuf::from(format!("trust_report_{}.json", timestamp)))
        }
        (None, false) => None,
    };

    match output_path {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("writing result to {}", path.display()))?;
            println!("📄 Result saved to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn print_profiles(domain: Option<ContentDomain>) {
    let domains = match domain {
        Some(d) => vec![d],
        None => vec![ContentDomain::Url, ContentDomain::Image, ContentDomain::Text],
    };

    for domain in domains {
        let profile = domain.profile();
        println!("📋 {:?} profile", domain);
        println!("   signals:");
        for spec in profile.signal_specs() {
            println!(
                "     {:<24} weight {:>5.2}  {:?}",
                spec.name, spec.base_weight, spec.rule
            );
        }
        println!("   verdicts:");
        for tier in profile.verdict_thresholds() {
            println!("     >= {:>3}  {}", tier.min_score, tier.label);
        }
        println!();
    }
}
