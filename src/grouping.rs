use std::fmt::{Display, Formatter};

use crate::categories::color_for_duration;
use crate::stations::{LatLng, StationVisit};

/// A station visit with its display fields computed. Rebuilt from scratch on
/// every destination selection, never cached.
#[derive(Debug, Clone)]
pub struct EnrichedStation {
    pub global_id: String,
    pub name: String,
    pub color: &'static str,
    pub position: LatLng,
    pub tooltip: String,
}

/// All stations reachable with the same number of changes, in input order.
#[derive(Debug)]
pub struct ChangeGroup {
    pub changes: u32,
    pub stations: Vec<EnrichedStation>,
}

struct TooltipFormatter<'a> {
    visit: &'a StationVisit,
}

impl Display for TooltipFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "<strong>{}</strong><br>Duration: {} min<br>Changes: {}<br>Transportation: {}<br>",
            self.visit.station.name,
            self.visit.duration,
            self.visit.changes,
            self.visit.transportation_summary(),
        ))?;
        if self.visit.duration < 0.0 {
            f.write_str("<em>No data found for this station.</em>")?;
        }
        Ok(())
    }
}

/// Partitions the visits into groups keyed by number of changes, in
/// first-seen order. Null placeholders and the destination itself are
/// skipped.
pub fn group_stations(stations: &[Option<StationVisit>], destination_id: &str) -> Vec<ChangeGroup> {
    let mut groups: Vec<ChangeGroup> = Vec::new();

    for visit in stations.iter().flatten() {
        if visit.station.global_id == destination_id {
            continue;
        }

        let enriched = EnrichedStation {
            global_id: visit.station.global_id.clone(),
            name: visit.station.name.clone(),
            color: color_for_duration(visit.duration),
            position: visit.position(),
            tooltip: TooltipFormatter { visit }.to_string(),
        };

        match groups.iter_mut().find(|group| group.changes == visit.changes) {
            Some(group) => group.stations.push(enriched),
            None => groups.push(ChangeGroup {
                changes: visit.changes,
                stations: vec![enriched],
            }),
        }
    }

    groups
}
