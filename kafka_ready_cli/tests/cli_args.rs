extern crate kafka_ready_cli;

use clap::Parser;
use kafka_ready::connection_settings::ConnectionSettings;
use kafka_ready_cli::cli_args::CliArgs;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn parses_positional_and_flags() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::try_parse_from([
        "kafka-ready",
        "3",
        "60",
        "-b",
        "broker1:9092,broker2:9092",
        "--config",
        "/etc/kafka/client.properties",
        "-s",
        "SASL_SSL",
    ])?;

    assert_eq!(args.min_num_brokers, 3);
    assert_eq!(args.timeout(), Duration::from_secs(60));

    let settings = ConnectionSettings::from(&args);
    assert_eq!(
        settings.bootstrap_servers.as_deref(),
        Some("broker1:9092,broker2:9092")
    );
    assert_eq!(
        settings.config_file,
        Some(PathBuf::from("/etc/kafka/client.properties"))
    );
    assert_eq!(settings.security_protocol.as_deref(), Some("SASL_SSL"));

    Ok(())
}

#[test]
fn zero_timeout_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::try_parse_from(["kafka-ready", "1", "0", "--bootstrap-servers", "h:9092"])?;

    assert_eq!(args.timeout(), Duration::ZERO);
    Ok(())
}

#[test]
fn invalid_min_brokers_is_rejected() {
    for value in ["not-a-number", "0", "1.5"] {
        let error = CliArgs::try_parse_from(["kafka-ready", value, "10", "-b", "h:9092"])
            .expect_err(value);

        assert!(
            error.to_string().contains("MIN_NUM_BROKERS"),
            "unexpected error for {value}: {error}"
        );
    }
}

#[test]
fn invalid_timeout_is_rejected() {
    for value in ["not-a-number", "2.5", "99999999999999999999"] {
        let error = CliArgs::try_parse_from(["kafka-ready", "1", value, "-b", "h:9092"])
            .expect_err(value);

        assert!(
            error.to_string().contains("TIMEOUT_SECS"),
            "unexpected error for {value}: {error}"
        );
    }
}

#[test]
fn positional_arguments_are_required() {
    assert!(CliArgs::try_parse_from(["kafka-ready"]).is_err());
    assert!(CliArgs::try_parse_from(["kafka-ready", "1"]).is_err());
}
