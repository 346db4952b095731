#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bar-data binary.
#[macro_export]
macro_rules! bar_data {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bar-data"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates the default `.bar-data.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bar-data.toml", content);
    }

    /// Writes `history.csv` with the battery log used across tests.
    pub fn create_battery_log(&self) {
        self.create_file("history.csv", BATTERY_LOG);
    }

    /// Writes a log with one int record per metric name.
    pub fn create_int_log(&self, relative_path: &str, metrics: &[&str]) {
        let mut content = String::from("metric,type,start_time,end_time,value,opt\n");
        for (i, metric) in metrics.iter().enumerate() {
            let _ = writeln!(content, "{metric},int,0,100,{i}");
        }
        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Battery log covering continuous, boolean and signal strength metrics.
pub const BATTERY_LOG: &str = "\
metric,type,start_time,end_time,value,opt
Temperature,int,1000,2000,301
Voltage,int,1000,2000,4100
Battery level,int,1000,2000,87
Screen,bool,1000,1500,true
Screen,bool,1500,2000,false
Phone signal strength,int,1000,1200,4
Phone signal strength,int,1200,1400,0
Phone signal strength,int,1400,1600,1
Phone signal strength,int,1600,1800,3
Phone signal strength,int,1800,2000,2
";

/// Orders the three battery metrics and hides voltage.
pub const BATTERY_CONFIG: &str = r#"
order = ["Temperature", "Voltage", "Battery level"]

[hidden]
Voltage = true
Screen = true
"Phone signal strength" = true
"#;
