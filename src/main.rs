use clap::{Arg, Command};
use log::LevelFilter;
use stayguard::context::{
    BookingContext, BookingDetails, GuestProfile, HostProfile, PaymentInfo, PropertyInfo,
    VerificationStatus,
};
use stayguard::{EngineConfig, RiskEngine};
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("stayguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deterministic fraud-risk scoring for rental-booking transactions")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Engine configuration file (YAML); defaults apply when omitted"),
        )
        .arg(
            Arg::new("analyze")
                .long("analyze")
                .value_name("FILE")
                .help("Analyze a booking snapshot file (.yaml/.yml or .json) and print the result")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the analysis result")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the configuration and print a summary")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("sample-booking")
                .long("sample-booking")
                .value_name("FILE")
                .help("Write a fully-populated booking snapshot template")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-detector traces")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(path) = matches.get_one::<String>("generate-config") {
        generate_default_config(path);
        return;
    }

    if let Some(path) = matches.get_one::<String>("sample-booking") {
        generate_sample_booking(path);
        return;
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration: {e}");
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    if matches.get_flag("test-config") {
        print_config_summary(&config);
        return;
    }

    if let Some(path) = matches.get_one::<String>("analyze") {
        analyze_file(config, path, matches.get_flag("pretty"));
        return;
    }

    eprintln!("Nothing to do; see --help");
    process::exit(1);
}

fn analyze_file(config: EngineConfig, path: &str, pretty: bool) {
    let engine = match RiskEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error building engine: {e}");
            process::exit(1);
        }
    };

    let context = match read_context(path) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error reading booking snapshot {path}: {e}");
            process::exit(1);
        }
    };

    let result = match engine.analyze(&context) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Analysis failed: {e}");
            process::exit(1);
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error rendering result: {e}");
            process::exit(1);
        }
    }
}

/// Snapshot files are YAML or JSON, picked by extension.
fn read_context(path: &str) -> anyhow::Result<BookingContext> {
    let content = std::fs::read_to_string(path)?;
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let context = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };
    Ok(context)
}

fn print_config_summary(config: &EngineConfig) {
    println!("Configuration OK");
    println!(
        "  high-risk IP prefixes:     {}",
        config.high_risk_ip_prefixes.len()
    );
    println!(
        "  disposable email domains:  {}",
        config.disposable_email_domains.len()
    );
    println!(
        "  device marker patterns:    {}",
        config.device_marker_patterns.len()
    );
    println!(
        "  min fingerprint length:    {}",
        config.min_fingerprint_length
    );

    // Marker patterns are regexes; surface a bad one here rather than at
    // analysis time.
    match RiskEngine::new(config.clone()) {
        Ok(_) => println!("  detector set builds cleanly"),
        Err(e) => {
            eprintln!("  detector set failed to build: {e}");
            process::exit(1);
        }
    }
}

fn generate_default_config(path: &str) {
    match EngineConfig::default().to_file(path) {
        Ok(()) => println!("Default configuration written to {path}"),
        Err(e) => {
            eprintln!("Error writing configuration: {e}");
            process::exit(1);
        }
    }
}

/// A static, fully-populated template the caller can edit. Every optional
/// field is present so it is obvious what can be supplied; this is not a
/// data synthesizer.
fn sample_booking() -> BookingContext {
    use chrono::{NaiveDate, TimeZone, Utc};

    let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    BookingContext {
        guest: GuestProfile {
            name: "Avery Laurent".to_string(),
            email: "avery.laurent@example.com".to_string(),
            phone: Some("+33-555-0199".to_string()),
            registered_at: created_at - chrono::Duration::days(180),
            prior_bookings: 4,
            cancellation_rate: 0.1,
            verification: VerificationStatus::Verified,
            payment_methods: 1,
            ip_address: Some("198.51.100.23".to_string()),
            device_fingerprint: Some("fp_53ac09e1b2d74f88".to_string()),
        },
        host: HostProfile {
            name: "Tomas Keller".to_string(),
            email: "tomas@example.net".to_string(),
            property_count: 2,
            rating: 4.4,
            response_rate: 0.85,
        },
        booking: BookingDetails {
            check_in: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 24).unwrap(),
            created_at,
            amount: 480.0,
            currency: "EUR".to_string(),
            payment_method: "card".to_string(),
            guest_count: 2,
            nights: 4,
            price_per_night: 120.0,
            last_minute: false,
            hours_to_check_in: 460.0,
        },
        property: PropertyInfo {
            id: "prop-0911".to_string(),
            average_nightly_price: 130.0,
            location: "Marseille, FR".to_string(),
            rating: 4.6,
            review_count: 52,
        },
        payment: PaymentInfo {
            card_type: Some("mastercard".to_string()),
            card_country: Some("FR".to_string()),
            billing_country: Some("FR".to_string()),
            attempts: 1,
            prior_declines: 0,
        },
    }
}

fn generate_sample_booking(path: &str) {
    let write = || -> anyhow::Result<()> {
        let content = serde_yaml::to_string(&sample_booking())?;
        std::fs::write(path, content)?;
        Ok(())
    };
    match write() {
        Ok(()) => println!("Sample booking snapshot written to {path}"),
        Err(e) => {
            eprintln!("Error writing sample booking: {e}");
            process::exit(1);
        }
    }
}
