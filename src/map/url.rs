//! Conversion between zones and URL paths.
//!
//! One segment per level below the pseudo-continent, the continent itself
//! being implied by the codes: `11/75/3` is the 3rd district of Paris,
//! `971/2` the 2nd district of Guadeloupe. A pseudo-continent is addressed by
//! its own code (`0`, `1`, `2`) and the world root by the empty path.

use smallvec::SmallVec;

use super::{continent::Continent, hierarchy::compare_features, layer::Zone, map::Atlas, zone_id::ZoneId, zone_level::ZoneLevel};

/// Path segments of a zone; never more than four.
pub type Segments = SmallVec<[String; 4]>;

impl Atlas {
    pub fn segments(&self, zone: &Zone) -> Segments {
        self.breadcrumb(zone).into_iter()
            .filter(|z| z.level() != ZoneLevel::Continent || compare_features(z, zone))
            .map(|z| z.id.segment())
            .collect()
    }

    /// Canonical URL path for a zone, without leading or trailing slash.
    pub fn feature_to_url(&self, zone: &Zone) -> String {
        self.segments(zone).join("/")
    }

    /// Resolve URL path segments back to a zone.
    ///
    /// Partial paths resolve to the deepest level they name (`["11", "75"]`
    /// is the Paris department). Any unknown code, or a code that does not
    /// belong to the zone named by the previous segment, yields `None` so
    /// the caller can redirect to a default zone. An empty path is the world root.
    pub fn url_to_feature<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Zone> {
        let mut parts = segments.iter().map(|s| s.as_ref().trim()).filter(|s| !s.is_empty());

        let Some(first) = parts.next() else { return Some(self.root()) };
        let mut current = self.resolve_top(first)?;

        for part in parts {
            current = self.children(current).into_iter().find(|child| child.id.matches_segment(part))?;
        }
        Some(current)
    }

    /// Resolve a slash separated path (e.g. `"/11/75/"`).
    pub fn parse_url(&self, path: &str) -> Option<&Zone> {
        let segments: Segments = path.split('/').map(str::to_string).collect();
        self.url_to_feature(&segments)
    }

    /// URL of `zone` when it resolves back to the zone, `None` for a zone
    /// left out of its parent's children by missing data.
    pub fn zone_url(&self, zone: &Zone) -> Option<String> {
        let url = self.feature_to_url(zone);
        self.parse_url(&url)
            .is_some_and(|found| compare_features(found, zone))
            .then_some(url)
    }

    /// URL of the zone one level up, `None` for the world root.
    pub fn parent_url(&self, zone: &Zone) -> Option<String> {
        self.parent(zone).and_then(|parent| self.zone_url(parent))
    }

    /// URL of a district given its department code and number, as linked
    /// from a deputy's page.
    pub fn url_from_codes(&self, department: &str, number: u32) -> Option<String> {
        self.get(&ZoneId::district(department, number)).and_then(|zone| self.zone_url(zone))
    }

    /// Every path reachable from the root by following children, parents
    /// before their children. The root's empty path is not included.
    pub fn routes(&self) -> Vec<String> {
        let mut routes = Vec::with_capacity(self.len());
        let mut stack: Vec<&Zone> = self.children(self.root()).into_iter().rev().collect();

        while let Some(zone) = stack.pop() {
            routes.push(self.feature_to_url(zone));
            stack.extend(self.children(zone).into_iter().rev());
        }
        routes
    }

    /// First segment: a continent code, or a region/department sitting
    /// directly under a pseudo-continent.
    fn resolve_top(&self, segment: &str) -> Option<&Zone> {
        if let Ok(continent) = segment.parse::<Continent>() {
            return Some(self.continent(continent));
        }

        let top_level = |id: ZoneId| {
            self.get(&id).filter(|z| self.parent(z).is_some_and(|p| p.level() == ZoneLevel::Continent))
        };
        top_level(ZoneId::region(segment)).or_else(|| top_level(ZoneId::department(segment)))
    }
}
