//! Command implementations for the CDV CLI.
//!
//! Provides subcommands for inspecting a station dump and for printing the
//! month-of-year series and axis domain a chart would draw.

use cdv_data::domain::NullPolicy;
use cdv_data::index::GroupingIndex;
use cdv_data::view::ViewState;
use cdv_station::Property;
use clap::{Args, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub mod chart;
pub mod inspect;

/// Output format for the `series` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One summary row per year
    Table,
    /// One row per day
    Csv,
    /// The full chart model, domain included
    Json,
}

/// Filters shared by the chart subcommands.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// First year to include (defaults to the first year in the file)
    #[arg(long)]
    pub from: Option<i32>,

    /// Last year to include (defaults to the last year in the file)
    #[arg(long)]
    pub to: Option<i32>,

    /// Month, as a number (6) or a name (June)
    #[arg(short, long, default_value = "6", value_parser = cdv_utils::dates::parse_month)]
    pub month: u32,

    /// Measurement key (MAX_TEMPERATURE) or label ("Total Rain")
    #[arg(short, long, default_value = "MAX_TEMPERATURE")]
    pub property: Property,

    /// Year to draw in the highlight colour
    #[arg(long)]
    pub highlight: Option<i32>,

    /// How days without a value are drawn: zero or skip (a gap)
    #[arg(long, default_value = "skip")]
    pub null_policy: NullPolicy,
}

impl FilterArgs {
    /// Resolve the filters against a loaded index; a reversed range is swapped.
    pub fn to_state(&self, index: &GroupingIndex) -> ViewState {
        let defaults = ViewState::for_index(index);
        let (first, last) = defaults.year_range;
        let mut state = defaults
            .with_year_range(self.from.unwrap_or(first), self.to.unwrap_or(last))
            .with_month(self.month)
            .with_property(self.property)
            .with_highlighted_year(self.highlight)
            .with_null_policy(self.null_policy);
        state.normalize_year_range();
        state
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a station dump: days loaded, stations, years and months
    Summary {
        /// Station dump (.json or .json.gz), path or file:// URL
        #[arg(short = 'f', long)]
        file: String,
    },

    /// List the measurements that can be charted
    Properties,

    /// Print one series per year for a month
    Series {
        /// Station dump (.json or .json.gz), path or file:// URL
        #[arg(short = 'f', long)]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print the axis domain (min,max) of a measurement for a month
    Domain {
        /// Station dump (.json or .json.gz), path or file:// URL
        #[arg(short = 'f', long)]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

fn open_output(output: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { file } => {
            let mut out = open_output(None)?;
            inspect::run_summary(&file, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Properties => {
            let mut out = open_output(None)?;
            inspect::write_properties(&mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Series {
            file,
            filter,
            format,
            output,
        } => {
            let mut out = open_output(output.as_deref())?;
            chart::run_series(&file, &filter, format, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Domain { file, filter } => {
            let mut out = open_output(None)?;
            chart::run_domain(&file, &filter, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parses_series_arguments() {
        let cli = TestCli::try_parse_from([
            "cdv-cli", "series", "-f", "station.json", "--from", "1960", "--to", "2024", "-m",
            "July", "-p", "total_rain", "--highlight", "2021", "--null-policy", "zero",
            "--format", "csv",
        ])
        .unwrap();
        match cli.command {
            Command::Series {
                file,
                filter,
                format,
                output,
            } => {
                assert_eq!(file, "station.json");
                assert_eq!(filter.from, Some(1960));
                assert_eq!(filter.to, Some(2024));
                assert_eq!(filter.month, 7);
                assert_eq!(filter.property, Property::TotalRain);
                assert_eq!(filter.highlight, Some(2021));
                assert_eq!(filter.null_policy, NullPolicy::Zero);
                assert_eq!(format, OutputFormat::Csv);
                assert_eq!(output, None);
            }
            _ => panic!("expected the series subcommand"),
        }
    }

    #[test]
    fn test_domain_defaults() {
        let cli = TestCli::try_parse_from(["cdv-cli", "domain", "-f", "station.json"]).unwrap();
        match cli.command {
            Command::Domain { filter, .. } => {
                assert_eq!(filter.month, 6);
                assert_eq!(filter.property, Property::MaxTemperature);
                assert_eq!(filter.null_policy, NullPolicy::Skip);
                assert_eq!(filter.from, None);
            }
            _ => panic!("expected the domain subcommand"),
        }
    }

    #[test]
    fn test_rejects_unknown_property() {
        let parsed = TestCli::try_parse_from(["cdv-cli", "domain", "-f", "x.json", "-p", "WIND_CHILL"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_filter_resolves_against_index() {
        let index = GroupingIndex::default();
        let filter = FilterArgs {
            from: Some(2024),
            to: Some(1960),
            month: 6,
            property: Property::MeanTemperature,
            highlight: None,
            null_policy: NullPolicy::Skip,
        };
        let state = filter.to_state(&index);
        assert_eq!(state.year_range, (1960, 2024));
        assert_eq!(state.property, Property::MeanTemperature);
    }
}
