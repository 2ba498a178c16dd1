//! Dataset inspection: what was loaded and what can be charted.

use cdv_data::session::{Dataset, Session};
use cdv_station::Property;
use log::info;
use std::io::Write;

/// Load a station dump and describe it.
pub fn run_summary<W: Write>(file: &str, out: &mut W) -> anyhow::Result<()> {
    let mut session = Session::new();
    let dataset = session.load_url(file)?;
    write_summary(dataset, out)?;
    info!("Summary complete for {}", dataset.source.display());
    Ok(())
}

/// Days loaded, station names, year bounds and the months present per year.
pub fn write_summary<W: Write>(dataset: &Dataset, out: &mut W) -> anyhow::Result<()> {
    let days = dataset.days_loaded();
    writeln!(
        out,
        "Loaded {} {} of data.",
        days,
        if days == 1 { "day" } else { "days" }
    )?;
    for name in &dataset.stations {
        writeln!(out, "Station: {}", name)?;
    }
    let index = &dataset.index;
    match index.year_bounds() {
        Some((first, last)) => writeln!(out, "Years: {}-{} ({} with data)", first, last, index.years().count())?,
        None => writeln!(out, "Years: none")?,
    }
    for year in index.years() {
        let months = index
            .months(year)
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "  {}: {} days, months {}", year, index.year(year).len(), months)?;
    }
    Ok(())
}

/// The chartable measurements, in selection order.
pub fn write_properties<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for property in Property::ALL {
        writeln!(out, "{:<22} {} ({})", property.key(), property.label(), property.unit())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdv_station::RecordCollection;
    use std::path::PathBuf;

    const STATION_DUMP: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"id": "A.2020.6.1", "type": "Feature",
             "geometry": {"type": "Point", "coordinates": [-123.12, 49.29]},
             "properties": {"ID": "A.2020.6.1", "CLIMATE_IDENTIFIER": "A", "STATION_NAME": "HARBOUR",
                            "LOCAL_DATE": "2020-06-01 00:00:00", "LOCAL_YEAR": 2020, "LOCAL_MONTH": 6,
                            "LOCAL_DAY": 1, "MAX_TEMPERATURE": 10.0}},
            {"id": "A.2020.7.1", "type": "Feature",
             "geometry": {"type": "Point", "coordinates": [-123.12, 49.29]},
             "properties": {"ID": "A.2020.7.1", "CLIMATE_IDENTIFIER": "A", "STATION_NAME": "HARBOUR",
                            "LOCAL_DATE": "2020-07-01 00:00:00", "LOCAL_YEAR": 2020, "LOCAL_MONTH": 7,
                            "LOCAL_DAY": 1, "MAX_TEMPERATURE": 24.0}}
        ],
        "numberMatched": 2,
        "numberReturned": 2,
        "links": [],
        "timeStamp": "2024-08-06T00:00:00Z"
    }"#;

    #[test]
    fn test_summary_lists_years_and_months() {
        let collection = RecordCollection::from_json_str(STATION_DUMP).unwrap();
        let dataset = Dataset::from_collection(collection, PathBuf::from("station.json"));
        let mut out = Vec::new();
        write_summary(&dataset, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Loaded 2 days of data."));
        assert!(text.contains("Station: HARBOUR"));
        assert!(text.contains("Years: 2020-2020 (1 with data)"));
        assert!(text.contains("2020: 2 days, months 6,7"));
    }

    #[test]
    fn test_properties_lists_every_key_in_order() {
        let mut out = Vec::new();
        write_properties(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let keys: Vec<&str> = text.lines().filter_map(|l| l.split_whitespace().next()).collect();
        let expected: Vec<&str> = Property::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_summary_of_missing_file_fails() {
        let mut out = Vec::new();
        assert!(run_summary("/definitely/not/here.json", &mut out).is_err());
        assert!(out.is_empty());
    }
}
