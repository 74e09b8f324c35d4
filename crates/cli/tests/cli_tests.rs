use assert_cmd::Command;
use predicates::prelude::*;

fn widget_embed() -> Command {
    Command::cargo_bin("widget-embed").unwrap()
}

#[test]
fn test_cli_help() {
    widget_embed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Embeddable clock, weather and countdown widgets"));
}

#[test]
fn test_cli_serve_help() {
    widget_embed().arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_render_clock_defaults() {
    widget_embed()
        .args(["render", "clock"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"const timeZone = "America/New_York";"#))
        .stdout(predicate::str::contains("hour12: true"));
}

#[test]
fn test_render_weather_with_params() {
    widget_embed()
        .args(["render", "weather", "-P", "city=Lisbon", "--param", "forecast=3day"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<div class="city-name">Lisbon</div>"#))
        .stdout(predicate::str::contains(r#""day":"Wed""#));
}

#[test]
fn test_render_countdown_at_fixed_time() {
    widget_embed()
        .args(["render", "countdown", "--at", "2026-01-01T00:00:00Z", "-P", "event=Launch"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"const eventDate = "2026-01-02";"#))
        .stdout(predicate::str::contains("Launch"));
}

#[test]
fn test_render_rejects_unknown_type() {
    widget_embed()
        .args(["render", "stocks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid widget type"));
}

#[test]
fn test_render_rejects_malformed_param() {
    widget_embed().args(["render", "clock", "-P", "tz"]).assert().failure();
}

#[test]
fn test_timezones_lists_catalogue() {
    widget_embed()
        .arg("timezones")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"Asia/Tokyo\""))
        .stdout(predicate::str::contains("\"region\": \"africa\""));
}
