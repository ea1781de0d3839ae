use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn prompts_and_prints_winning_arrangement() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin(
        "Militia#10;Spearmen#10;LightCavalry#10;HeavyCavalry#10;CavalryArcher#10\n\
         Spearmen#5;LightCavalry#5;FootArcher#5;Militia#5;CavalryArcher#5\n",
    );

    cmd.assert()
        .success()
        .stdout(str::contains("Welcome to the Medieval War Simulator!"))
        .stdout(str::contains("Enter own platoons: "))
        .stdout(str::contains("Enter enemy platoons: "))
        .stdout(str::contains("One possible winning arrangement:"))
        .stdout(str::contains(
            "Militia#10;Spearmen#10;LightCavalry#10;HeavyCavalry#10;CavalryArcher#10",
        ));
}

#[test]
fn reports_no_chance_of_winning() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin("Militia#1\nHeavyCavalry#100;HeavyCavalry#100;HeavyCavalry#100\n");

    cmd.assert()
        .success()
        .stdout(str::contains("There is no chance of winning."));
}

#[test]
fn reports_parse_errors_without_failing() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin("Militia10\nMilitia#1\n");
    cmd.assert()
        .success()
        .stdout(str::contains("Error: Invalid platoon format: 'Militia10'"));

    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin("Militia#1\nMilitia#ten\n");
    cmd.assert()
        .success()
        .stdout(str::contains("Error: Invalid number of soldiers in: 'Militia#ten'"));
}

#[test]
fn blank_answers_are_empty_input() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin("\n\n");

    cmd.assert()
        .success()
        .stdout(str::contains("Error: Input cannot be empty."));
}

#[test]
fn input_ending_before_answers_is_unexpected() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin("");
    cmd.assert()
        .success()
        .stdout(str::contains("An unexpected error occurred:"))
        .stdout(str::contains("EOF when reading a line"));

    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin("Militia#1\n");
    cmd.assert()
        .success()
        .stdout(str::contains("Enter enemy platoons: "))
        .stdout(str::contains("An unexpected error occurred:"))
        .stdout(str::contains("Input cannot be empty").not());
}

#[test]
fn reports_unexpected_errors_without_failing() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.write_stdin(vec![0xff, 0xfe, b'\n']);

    cmd.assert()
        .success()
        .stdout(str::contains("An unexpected error occurred:"));
}

#[test]
fn armies_from_arguments_skip_prompts() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.args([
        "--own",
        "Militia#5;Spearmen#5",
        "--enemy",
        "Spearmen#6;HeavyCavalry#6",
        "--min-wins",
        "2",
        "--show-battles",
    ]);

    cmd.assert()
        .success()
        .stdout(str::contains("Enter own platoons").not())
        .stdout(str::contains("Militia#5;Spearmen#5"))
        .stdout(str::contains("Militia#5 vs Spearmen#6: win"))
        .stdout(str::contains("Spearmen#5 vs HeavyCavalry#6: win"));
}

#[test]
fn default_min_wins_is_three() {
    let mut cmd = Command::cargo_bin("war_sim").unwrap();
    cmd.args(["--own", "Militia#5;Spearmen#5", "--enemy", "Spearmen#6;HeavyCavalry#6"]);

    cmd.assert()
        .success()
        .stdout(str::contains("There is no chance of winning."));
}
