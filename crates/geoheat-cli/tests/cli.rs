use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn geoheat() -> Command {
    Command::cargo_bin("geoheat").unwrap()
}

#[test]
fn normalize_rewrites_known_labels() {
    geoheat()
        .args(["normalize", "United States of America"])
        .assert()
        .success()
        .stdout("United States\n");
}

#[test]
fn whole_name_mode_leaves_canonical_labels_alone() {
    geoheat()
        .args(["normalize", "Hong Kong SAR"])
        .assert()
        .success()
        .stdout("Hong Kong SAR SAR\n");
    geoheat()
        .args(["--whole-name", "normalize", "Hong Kong SAR"])
        .assert()
        .success()
        .stdout("Hong Kong SAR\n");
}

#[test]
fn color_prints_css_and_hex() {
    geoheat()
        .args(["color", "13"])
        .assert()
        .success()
        .stdout("rgb(243, 227, 81) #f3e351\n");
    geoheat()
        .args(["color", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#fffbe6"));
}

#[test]
fn fill_is_case_insensitive() {
    geoheat()
        .args(["fill", "united kingdom"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("United Kingdom: 25%"));
    geoheat()
        .args(["fill", "Czechia"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Czech Republic: 1%"));
    geoheat()
        .args(["fill", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no data"))
        .stdout(predicate::str::contains("#f8fafc"));
}

#[test]
fn nearest_accepts_negative_coordinates() {
    geoheat()
        .args(["nearest", "-0.12", "51.5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Basingstoke (United Kingdom)"));
}

#[test]
fn centers_filter_by_folded_name() {
    geoheat()
        .args(["centers", "SAO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sao Paulo (Brazil)"));
}

#[test]
fn connectors_for_bundled_sample() {
    geoheat()
        .arg("connectors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Czech Republic -> Prague"))
        .stdout(predicate::str::contains("Brazil").not());
}

#[test]
fn connectors_json_for_custom_input() {
    let mut f = tempfile::Builder::new().suffix(".geojson").tempfile().unwrap();
    write!(
        f,
        r#"{{"type":"FeatureCollection","features":[
            {{"type":"Feature","properties":{{"name":"France"}},
              "geometry":{{"type":"Polygon","coordinates":[[[1,45],[3,45],[3,47],[1,47]]]}}}}
        ]}}"#
    )
    .unwrap();

    let out = geoheat()
        .arg("--input")
        .arg(f.path())
        .args(["connectors", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["country"], "France");
    assert_eq!(v[0]["center"]["name"], "Villejust");
}

#[test]
fn config_file_overrides_centres() {
    let mut cfg = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        cfg,
        r#"{{"centers":[{{"name":"Hub","country":"Nowhere","coord":[0,0]}}]}}"#
    )
    .unwrap();

    geoheat()
        .arg("--config")
        .arg(cfg.path())
        .args(["nearest", "50", "50"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hub (Nowhere)"));
}

#[test]
fn missing_input_fails_with_context() {
    geoheat()
        .args(["--input", "/no/such/file.geojson", "render"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading geography"));
}

#[test]
fn impact_defaults_to_landing_page_headcount() {
    geoheat()
        .arg("impact")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hours at risk per year: 2013350"))
        .stdout(predicate::str::contains("DEX cost: £50m"));
}
