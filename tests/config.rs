// tests/config.rs
use idle_sim::SimError;
use idle_sim::config::SimConfig;
use std::io::Write;

#[test]
fn empty_file_is_the_reference_setup() {
    let cfg = SimConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, SimConfig::default());
    assert_eq!(cfg.economy.cost_factors.len(), 8);
    assert_eq!(cfg.economy.upgrades[0][0], (25u32, 3.0));
    assert_eq!(cfg.campaign.research, vec![0i64, 1, 2, -1, 1]);
    assert_eq!(cfg.campaign.max_total_ticks, None);
}

#[test]
fn partial_tables_keep_defaults() {
    let cfg = SimConfig::from_toml_str(
        "[campaign]\ntarget_experience = 1e6\nmax_total_ticks = 5000\n",
    )
    .unwrap();
    assert_eq!(cfg.campaign.target_experience, 1e6);
    assert_eq!(cfg.campaign.max_total_ticks, Some(5000));
    assert_eq!(cfg.campaign.start_experience, 20.0);
    assert_eq!(cfg.economy.base_cost, 10.0);
}

#[test]
fn custom_roster_parses() {
    let cfg = SimConfig::from_toml_str(
        "[economy]\ncost_factors = [1.2, 1.15]\nupgrades = [[[10, 2.0]], []]\n",
    )
    .unwrap();
    assert_eq!(cfg.economy.cost_factors, vec![1.2, 1.15]);
    assert_eq!(cfg.economy.upgrades, vec![vec![(10u32, 2.0)], vec![]]);
}

#[test]
fn impossible_economies_are_rejected() {
    let bad = [
        "[economy]\ncost_factors = [1.1, 0.9]\nupgrades = [[], []]\n",
        "[economy]\ncost_factors = [1.1]\nupgrades = [[], []]\n",
        "[economy]\nbase_cost = 0.0\n",
        "[campaign]\ncompletion_level = 0\n",
        "[campaign]\nstart_experience = -1.0\n",
    ];
    for text in bad {
        let err = SimConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)), "{text}: {err}");
    }
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = SimConfig::from_toml_str("[[[").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
    let err = SimConfig::from_toml_str("[economy]\nbase_cost = \"ten\"\n").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn load_reads_files_and_reports_io_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[campaign]\nstart_experience = 100.0").unwrap();
    let cfg = SimConfig::load(file.path()).unwrap();
    assert_eq!(cfg.campaign.start_experience, 100.0);

    let dir = tempfile::tempdir().unwrap();
    let err = SimConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
