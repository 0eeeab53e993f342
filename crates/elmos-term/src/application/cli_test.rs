use super::*;

#[test]
fn it_builds_a_valid_command() {
    build().debug_assert();
}

#[test]
fn it_accepts_every_config_key_as_a_flag() {
    let matches = build()
        .try_get_matches_from(vec![
            "elmos-console",
            "--executable",
            "./elmos",
            "--log-level",
            "debug",
            "--tick-rate",
            "80",
        ])
        .unwrap();

    assert_eq!(
        matches.get_one::<String>("executable").map(|e| return e.as_str()),
        Some("./elmos")
    );
    assert_eq!(
        matches.get_one::<String>("log-level").map(|e| return e.as_str()),
        Some("debug")
    );
    assert_eq!(
        matches.get_one::<String>("tick-rate").map(|e| return e.as_str()),
        Some("80")
    );
}

#[test]
fn it_rejects_unknown_log_levels() {
    let res = build().try_get_matches_from(vec!["elmos-console", "--log-level", "loud"]);
    assert!(res.is_err());
}

#[test]
fn it_rejects_a_zero_tick_rate() {
    let res = build().try_get_matches_from(vec!["elmos-console", "--tick-rate", "0"]);
    assert!(res.is_err());
}

#[test]
fn it_parses_the_config_default_subcommand() {
    let matches = build()
        .try_get_matches_from(vec!["elmos-console", "config", "default"])
        .unwrap();

    let (name, sub) = matches.subcommand().unwrap();
    assert_eq!(name, "config");
    assert_eq!(sub.subcommand_name(), Some("default"));
}
