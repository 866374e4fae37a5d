//! What the map shows for one selected zone.

use geo::Point;
use serde_json::{json, Value};

use crate::{
    map::{Atlas, Continent, Zone, ZoneLevel},
    roster::{Deputy, Roster},
};

/// Fill for a zone with deputies but no single group colour.
pub const DEFAULT_FILL: &str = "#00bbcc";

/// Fill for a zone without any deputy after filtering.
pub const EMPTY_FILL: &str = "#808080";

/// The zone at `path`, or Metropolitan France when the path does not resolve.
pub fn resolve<'a>(atlas: &'a Atlas, path: &str) -> &'a Zone {
    atlas.parse_url(path).unwrap_or_else(|| atlas.continent(Continent::Metropole))
}

/// A deputy-count marker placed at a zone's centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin<'a> {
    pub zone: &'a Zone,
    pub center: Point<f64>,
    pub count: usize,
}

/// A selected zone with everything needed to draw it: the displayed set,
/// the ghost siblings around it, and the filtered deputies inside it.
#[derive(Debug, Clone)]
pub struct ZoneView<'a> {
    atlas: &'a Atlas,
    pub zone: &'a Zone,
    pub displayed: Vec<&'a Zone>,
    pub ghosts: Vec<&'a Zone>,
    pub breadcrumb: Vec<&'a Zone>,
    pub deputies: Vec<&'a Deputy>,
}

impl<'a> ZoneView<'a> {
    /// `filtered` is the already filtered roster; only deputies elected
    /// within `zone` are kept.
    pub fn new(atlas: &'a Atlas, zone: &'a Zone, filtered: &[&'a Deputy]) -> Self {
        Self {
            atlas,
            zone,
            displayed: atlas.displayed(zone),
            ghosts: atlas.ghosts(zone),
            breadcrumb: atlas.breadcrumb(zone),
            deputies: atlas.deputies_in(zone, filtered),
        }
    }

    pub fn title(&self) -> String { self.atlas.title(self.zone) }

    pub fn url(&self) -> String { self.atlas.feature_to_url(self.zone) }

    pub fn parent_url(&self) -> Option<String> { self.atlas.parent_url(self.zone) }

    /// The zone's deputies elected within `area`.
    pub fn deputies_in(&self, area: &Zone) -> Vec<&'a Deputy> {
        self.atlas.deputies_in(area, &self.deputies)
    }

    /// Colour of a displayed zone: its deputy's group colour for a district
    /// with a single deputy, grey when no deputy is left.
    pub fn fill_color<'r>(&self, area: &Zone, roster: &'r Roster) -> &'r str {
        let deputies = self.deputies_in(area);
        match deputies.as_slice() {
            [] => EMPTY_FILL,
            [deputy] if area.level() == ZoneLevel::District => {
                roster.group_of(deputy).map_or(DEFAULT_FILL, |g| g.color.as_str())
            }
            _ => DEFAULT_FILL,
        }
    }

    /// One pin per displayed zone with a centroid, northernmost first.
    pub fn pins(&self) -> Vec<Pin<'a>> {
        let mut pins: Vec<Pin<'a>> = self.displayed.iter()
            .filter_map(|&zone| {
                let center = zone.centroid?;
                Some(Pin { zone, center, count: self.deputies_in(zone).len() })
            })
            .collect();
        pins.sort_by(|a, b| b.center.y().total_cmp(&a.center.y()));
        pins
    }

    /// Summary handed to the rendering layer.
    pub fn to_json(&self, roster: &Roster) -> Value {
        let displayed: Vec<Value> = self.displayed.iter()
            .map(|zone| json!({
                "id": zone.id.to_string(),
                "name": &*zone.name,
                "url": self.atlas.feature_to_url(zone),
                "color": self.fill_color(zone, roster),
                "deputies": self.deputies_in(zone).len(),
            }))
            .collect();

        let ghosts: Vec<String> = self.ghosts.iter().map(|z| z.id.to_string()).collect();
        let breadcrumb: Vec<Value> = self.breadcrumb.iter()
            .map(|z| json!({ "name": &*z.name, "url": self.atlas.feature_to_url(z) }))
            .collect();
        let deputies: Vec<&str> = self.deputies.iter().map(|d| d.slug.as_str()).collect();

        json!({
            "id": self.zone.id.to_string(),
            "title": self.title(),
            "url": self.url(),
            "parent": self.parent_url(),
            "breadcrumb": breadcrumb,
            "displayed": displayed,
            "ghosts": ghosts,
            "deputies": deputies,
        })
    }
}
