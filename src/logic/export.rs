//! CSV export of a stored fixture.

use crate::models::Fixture;
use chrono::NaiveDate;
use std::io;

/// Write `round,home,away,date` rows. `date` is the tournament's single fixture date, or empty.
pub fn write_fixture_csv<W: io::Write>(
    fixture: &[Fixture],
    date: Option<NaiveDate>,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["round", "home", "away", "date"])?;
    let date = date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    for f in fixture {
        wtr.write_record([
            f.round.to_string().as_str(),
            f.home.name.as_str(),
            f.away.name.as_str(),
            date.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
