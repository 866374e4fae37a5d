//! Parent, child and ghost resolution between zones.

use tracing::debug;

use crate::roster::Deputy;

use super::{layer::Zone, map::Atlas, zone_id::ZoneId, zone_level::ZoneLevel};

/// Two zones are the same when all their identifying codes match,
/// whatever instance they come from.
#[inline]
pub fn compare_features(a: &Zone, b: &Zone) -> bool { a.id == b.id }

impl Atlas {
    /// The zone one level up, `None` only for the world root.
    ///
    /// Departments outside Metropolitan France hang directly off their
    /// pseudo-continent. A missing or dangling parent code degrades to the
    /// pseudo-continent root so that navigation always has a way back.
    pub fn parent(&self, zone: &Zone) -> Option<&Zone> {
        match &zone.id {
            ZoneId::World => None,
            ZoneId::Continent(_) => Some(self.root()),
            ZoneId::Region(code) => Some(self.continent(super::Continent::of_region(code))),
            ZoneId::Department(code) => {
                let continent = super::Continent::of_department(code);
                if !continent.has_regions() {
                    return Some(self.continent(continent));
                }
                let region = zone.parents.get(ZoneLevel::Region).and_then(|id| self.get(&id));
                match region {
                    Some(region) => Some(region),
                    None => {
                        debug!(zone = %zone.id, region = ?zone.parents.region, "[Atlas::parent] unresolved region, using continent root");
                        Some(self.continent(continent))
                    }
                }
            }
            ZoneId::District { department, .. } => {
                match self.get(&ZoneId::Department(department.clone())) {
                    Some(dpt) => Some(dpt),
                    None => {
                        debug!(zone = %zone.id, "[Atlas::parent] unresolved department, using continent root");
                        Some(self.continent(super::Continent::of_department(department)))
                    }
                }
            }
        }
    }

    /// Zones one level below whose parent resolves to `zone`, sorted by code.
    /// Empty for districts.
    ///
    /// Metropolitan France lists its regions, followed by any department whose
    /// region could not be resolved. The overseas and abroad roots list their
    /// departments directly.
    pub fn children(&self, zone: &Zone) -> Vec<&Zone> {
        let candidates: Vec<&Zone> = match &zone.id {
            ZoneId::World => self.zones(ZoneLevel::Continent).iter().collect(),
            ZoneId::Continent(c) if c.has_regions() => self.zones(ZoneLevel::Region).iter()
                .chain(self.zones(ZoneLevel::Department))
                .collect(),
            ZoneId::Continent(_) | ZoneId::Region(_) => self.zones(ZoneLevel::Department).iter().collect(),
            ZoneId::Department(_) => self.zones(ZoneLevel::District).iter().collect(),
            ZoneId::District { .. } => return Vec::new(),
        };

        let mut children: Vec<&Zone> = candidates.into_iter()
            .filter(|child| self.parent(child).is_some_and(|p| compare_features(p, zone)))
            .collect();
        children.sort_by(|a, b| a.id.cmp(&b.id));
        children
    }

    /// The zones drawn as the primary layer when `zone` is selected: its
    /// children, or the district itself at the bottom of the hierarchy.
    pub fn displayed<'a>(&'a self, zone: &'a Zone) -> Vec<&'a Zone> {
        match zone.level() {
            ZoneLevel::District => vec![zone],
            _ => self.children(zone),
        }
    }

    /// Same-level neighbours of `zone` (the other children of its parent),
    /// shown for context only. Never contains `zone` itself nor anything from
    /// its displayed set. Orphan departments listed under Metropolitan France
    /// are not neighbours of its regions.
    pub fn ghosts<'a>(&'a self, zone: &'a Zone) -> Vec<&'a Zone> {
        let Some(parent) = self.parent(zone) else { return Vec::new() };
        let displayed = self.displayed(zone);

        self.children(parent).into_iter()
            .filter(|z| z.level() == zone.level() && !compare_features(z, zone))
            .filter(|z| !displayed.iter().any(|d| compare_features(d, z)))
            .collect()
    }

    /// Ancestors of `zone` from its pseudo-continent down to the zone itself.
    /// Empty for the world root.
    pub fn breadcrumb<'a>(&'a self, zone: &'a Zone) -> Vec<&'a Zone> {
        let mut chain = Vec::new();
        let mut current = Some(zone);
        while let Some(z) = current {
            if z.level() == ZoneLevel::World { break }
            chain.push(z);
            current = self.parent(z);
        }
        chain.reverse();
        chain
    }

    /// The region a department resolves to, if it has one.
    pub fn region_of_department(&self, code: &str) -> Option<&Zone> {
        let department = self.get(&ZoneId::department(code))?;
        self.parent(department).filter(|p| p.level() == ZoneLevel::Region)
    }

    /// Whether `deputy`'s district lies within `zone`, by code containment.
    pub fn contains_deputy(&self, zone: &Zone, deputy: &Deputy) -> bool {
        match &zone.id {
            ZoneId::World => true,
            ZoneId::Continent(c) => super::Continent::of_department(&deputy.department) == *c,
            ZoneId::Region(_) => self.region_of_department(&deputy.department)
                .is_some_and(|region| compare_features(region, zone)),
            ZoneId::Department(code) => deputy.department.as_str() == &**code,
            ZoneId::District { department, number } => {
                deputy.department.as_str() == &**department && deputy.district == *number
            }
        }
    }

    /// The deputies of `list` elected within `zone`.
    pub fn deputies_in<'d>(&self, zone: &Zone, list: &[&'d Deputy]) -> Vec<&'d Deputy> {
        list.iter().copied().filter(|d| self.contains_deputy(zone, d)).collect()
    }

    /// Human-readable title for a zone, e.g. "Paris (3e circonscription)".
    pub fn title(&self, zone: &Zone) -> String {
        match &zone.id {
            ZoneId::District { department, number } => {
                let department_name = self.get(&ZoneId::Department(department.clone()))
                    .map(|d| d.name.to_string())
                    .unwrap_or_else(|| department.to_string());
                let ordinal = if *number == 1 { "1re".to_string() } else { format!("{number}e") };
                format!("{department_name} ({ordinal} circonscription)")
            }
            _ => zone.name.to_string(),
        }
    }
}
