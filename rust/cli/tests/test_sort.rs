mod helpers;

use helpers::cli_runner::CliRunner;
use std::fs;

const LINES: &str = "\
9C 9D 8D 7C 3C 2S KD TH 9H 8H
TC JC QC KC AC 9C TC JC QC KC
2C 5D 9H JS KC 2D 5H 9S JC KD
2H 3H 4H 5H 7H 7C 7D 7H 7S 2D
";

#[test]
fn sort_tallies_stdin() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["sort"], LINES);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout, "player1 win: 2\nplayer2 win: 1\ntie: 1\n");
    assert!(res.stderr.is_empty());
}

#[test]
fn sort_legacy_policy_double_counts_ties() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["sort", "--tie-policy", "legacy"], LINES);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "player1 win: 2\nplayer2 win: 2\ntie: 1\n");
}

#[test]
fn sort_empty_input_prints_zero_tally() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["sort"], "");
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "player1 win: 0\nplayer2 win: 0\ntie: 0\n");
}

#[test]
fn sort_aborts_on_malformed_line() {
    let cli = CliRunner::new();
    let input = format!("{}9C 9D 8D 7C 3C 2S KD TH 9H\n", LINES);
    let res = cli.run_with_input(&["sort"], &input);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty(), "no tally after abort");
    assert!(
        res.stderr
            .contains("Error: Invalid input: line 5: Expected 10 cards, got 9"),
        "stderr: {}",
        res.stderr
    );
}

#[test]
fn sort_skip_policy_reports_and_continues() {
    let cli = CliRunner::new();
    let input = format!("1X 9D 8D 7C 3C 2S KD TH 9H 8H\n{}", LINES);
    let res = cli.run_with_input(&["sort", "--on-error", "skip", "--json"], &input);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stderr.contains("WARNING: line 1: Invalid card '1X'"));

    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["player1"], 2);
    assert_eq!(json["player2"], 1);
    assert_eq!(json["ties"], 1);
    assert_eq!(json["lines"], 4);
    assert_eq!(json["skipped"], 1);
}

#[test]
fn sort_reads_plain_and_compressed_files() {
    let cli = CliRunner::new();
    fs::write(cli.workdir().join("hands.txt"), LINES).unwrap();
    let packed = zstd::bulk::compress(LINES.as_bytes(), 3).unwrap();
    fs::write(cli.workdir().join("hands.txt.zst"), packed).unwrap();

    let plain = cli.run(&["sort", "--input", "hands.txt"]);
    let compressed = cli.run(&["sort", "--input", "hands.txt.zst"]);
    assert_eq!(plain.exit_code, 0);
    assert_eq!(plain.stdout, compressed.stdout);
    assert!(plain.stdout.starts_with("player1 win: 2\n"));
}

#[test]
fn sort_missing_file_fails() {
    let cli = CliRunner::new();
    let res = cli.run(&["sort", "--input", "nope.txt"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Invalid input: "));
}

#[test]
fn sort_policies_come_from_config_file_and_env() {
    let cli = CliRunner::new();
    let cfg = cli.workdir().join("handsort.toml");
    fs::write(&cfg, "tie_policy = \"legacy\"\non_error = \"skip\"\n").unwrap();
    let cfg_path = cfg.to_string_lossy().into_owned();
    let input = format!("bad line\n{}", LINES);

    let res = cli.run_with_env(&["sort"], &[("HANDSORT_CONFIG", cfg_path.as_str())], &input);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(
        res.stdout,
        "player1 win: 2\nplayer2 win: 2\ntie: 1\nskipped: 1\n"
    );

    // env beats file, flag beats env
    let res = cli.run_with_env(
        &["sort", "--tie-policy", "separate"],
        &[
            ("HANDSORT_CONFIG", cfg_path.as_str()),
            ("HANDSORT_ON_ERROR", "abort"),
            ("HANDSORT_TIE_POLICY", "legacy"),
        ],
        LINES,
    );
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "player1 win: 2\nplayer2 win: 1\ntie: 1\n");
}

#[test]
fn sort_invalid_config_is_reported() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["sort"], &[("HANDSORT_TIE_POLICY", "coinflip")], LINES);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
}

#[test]
fn sort_debug_logging_goes_to_stderr() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["sort"], &[("HANDSORT_LOG", "debug")], LINES);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "player1 win: 2\nplayer2 win: 1\ntie: 1\n");
    assert!(res.stderr.contains("matchup evaluated"));
}
