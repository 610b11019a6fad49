#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rtimecard::config::Config;
use rtimecard::models::RawScan;
use rtimecard::utils::date::parse_date_time;
use std::fs;
use std::path::{Path, PathBuf};

pub const TECH_SCANNER: &str = "100001";
pub const BUSINESS_SCANNER: &str = "105059";

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimecard")
}

/// `MM/DD/YYYY` + `HH:MM:SS` → timestamp.
pub fn ts(date: &str, time: &str) -> NaiveDateTime {
    parse_date_time(date, time).expect("valid test timestamp")
}

pub fn scan(name: &str, scanner: &str, date: &str, time: &str) -> RawScan {
    RawScan {
        name: name.to_string(),
        scanner: scanner.to_string(),
        timestamp: ts(date, time),
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Season 09/01/2016 – 05/01/2017, kick-off 01/07/2017, bag day 02/21/2017.
pub fn config_yaml(data_root: &Path, output: &Path) -> String {
    format!(
        r#"output: '{}'
dataRoot: '{}'
startDate: 09/01/2016
endDate: 05/01/2017
kickOff: 01/07/2017
bagDate: 02/21/2017
businessScanner: {}
tracks:
  Pre-season:
    hours: 10
  Technical:
    hours: 90
    goal: 60
    warn: 20
    training:
      CAD:
        - "01/10/2017 18:00 20:00"
  Business:
    hours: 10
  Post-Bag:
    hours: 32
"#,
        output.display(),
        data_root.display(),
        BUSINESS_SCANNER
    )
}

pub fn test_config() -> Config {
    Config::from_yaml_str(&config_yaml(Path::new("data"), Path::new("timecard.xlsx")))
        .expect("valid test config")
}

pub const SAMPLE_LOG: &str = "\
# name,scanner,time,date
Jane Doe,100001,09:00:00,01/09/2017
Jane Doe,100001,12:00:00,01/09/2017
John Smith,105059,17:00:00,01/09/2017
John Smith,105059,19:00:00,01/09/2017
Jane Doe,100001,18:00:00,01/10/2017
";

/// A season directory with `config.yaml` and one scan log under
/// `data/2017/`. Returns the config path.
pub fn write_season(dir: &Path) -> PathBuf {
    let data_root = dir.join("data");
    fs::create_dir_all(data_root.join("2017")).expect("create data root");
    fs::write(data_root.join("2017").join("SCANS.TXT"), SAMPLE_LOG).expect("write scan log");

    let config_path = dir.join("config.yaml");
    fs::write(
        &config_path,
        config_yaml(&data_root, &dir.join("timecard.xlsx")),
    )
    .expect("write config");
    config_path
}

pub fn config_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
