use blockfall::{parse_args, RunConfig};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn config_defaults_without_arguments() {
    let config = parse_args(&[], 42).unwrap().unwrap();
    assert_eq!(config, RunConfig::with_seed(42));
    assert_eq!(config.frame_ms, 16);
    assert!(!config.dump_snapshot);
}

#[test]
fn config_parses_all_flags() {
    let config = parse_args(
        &args(&["--seed", "7", "--frame-ms", "33", "--dump-snapshot"]),
        42,
    )
    .unwrap()
    .unwrap();

    assert_eq!(
        config,
        RunConfig {
            seed: 7,
            frame_ms: 33,
            dump_snapshot: true,
        }
    );
}

#[test]
fn config_help_returns_none() {
    assert!(parse_args(&args(&["--help"]), 1).unwrap().is_none());
    assert!(parse_args(&args(&["--seed", "3", "-h"]), 1).unwrap().is_none());
}

#[test]
fn config_rejects_bad_values() {
    let err = parse_args(&args(&["--seed"]), 1).unwrap_err();
    assert_eq!(err.to_string(), "config: missing value for --seed");

    let err = parse_args(&args(&["--seed", "-5"]), 1).unwrap_err();
    assert_eq!(err.to_string(), "config: invalid --seed value: -5");

    let err = parse_args(&args(&["--frame-ms", "0"]), 1).unwrap_err();
    assert_eq!(err.to_string(), "config: invalid --frame-ms value: 0");

    let err = parse_args(&args(&["--fast"]), 1).unwrap_err();
    assert_eq!(err.to_string(), "config: unknown argument: --fast");
}
