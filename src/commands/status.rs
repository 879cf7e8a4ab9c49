use crate::commands::{Command, Outcome};
use crate::config::Config;
use crate::installer::Installer;
use anyhow::Result;
use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StatusDisplay {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Shows the current and recorded fingerprints. Never writes anything.
pub struct Status;

impl Command for Status {
    fn label(&self) -> &'static str {
        "status"
    }

    fn execute(&self, config: &Config) -> Result<Outcome> {
        let detector = config.detector()?;
        let status = detector.status()?;

        let recorded = match &status.recorded {
            Some(recorded) => recorded.to_string(),
            None => style("(none)").dim().to_string(),
        };
        let state = if status.in_sync() {
            style("✓ In sync").green().to_string()
        } else {
            style("⚠ Install required").yellow().to_string()
        };

        let rows = vec![
            StatusDisplay {
                item: "Lockfile".to_string(),
                value: detector.lockfile().display().to_string(),
            },
            StatusDisplay {
                item: "State file".to_string(),
                value: detector.state().path().display().to_string(),
            },
            StatusDisplay {
                item: "Install command".to_string(),
                value: detector.installer().describe(),
            },
            StatusDisplay {
                item: "Current".to_string(),
                value: status.current.to_string(),
            },
            StatusDisplay {
                item: "Recorded".to_string(),
                value: recorded,
            },
            StatusDisplay {
                item: "Status".to_string(),
                value: state,
            },
        ];

        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("\n{}\n", table);

        Ok(Outcome::Status {
            in_sync: status.in_sync(),
        })
    }
}
