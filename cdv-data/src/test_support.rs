use cdv_station::Record;

/// A minimal record for one station-day with an optional max temperature.
pub fn day(year: i32, month: u32, day: u32, max_temperature: Option<f64>) -> Record {
    let id = format!("1108447.{year}.{month}.{day}");
    let mut record = Record {
        id: id.clone(),
        kind: "Feature".to_string(),
        ..Default::default()
    };
    record.geometry.kind = "Point".to_string();
    record.geometry.coordinates = vec![-123.1217, 49.2958];
    let p = &mut record.properties;
    p.id = id;
    p.climate_identifier = "1108447".to_string();
    p.station_name = "VANCOUVER HARBOUR CS".to_string();
    p.local_date = format!("{year:04}-{month:02}-{day:02} 00:00:00");
    p.local_year = year;
    p.local_month = month;
    p.local_day = day;
    p.max_temperature = max_temperature;
    record
}
