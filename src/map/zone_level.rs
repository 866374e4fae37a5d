use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneLevel {
    World,      // Root of the hierarchy
    Continent,  // Continent -> World
    Region,     // Region -> Continent
    Department, // Department -> Region (or Continent outside the mainland)
    District,   // Lowest-level zone, elects one deputy
}

impl ZoneLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            ZoneLevel::World => "world",
            ZoneLevel::Continent => "continent",
            ZoneLevel::Region => "region",
            ZoneLevel::Department => "department",
            ZoneLevel::District => "district",
        }
    }

    pub fn order() -> [ZoneLevel; 5] {
        [
            ZoneLevel::World,
            ZoneLevel::Continent,
            ZoneLevel::Region,
            ZoneLevel::Department,
            ZoneLevel::District,
        ]
    }

    /// The nominal level directly below this one, `None` for districts.
    pub fn child(&self) -> Option<ZoneLevel> {
        match self {
            ZoneLevel::World => Some(ZoneLevel::Continent),
            ZoneLevel::Continent => Some(ZoneLevel::Region),
            ZoneLevel::Region => Some(ZoneLevel::Department),
            ZoneLevel::Department => Some(ZoneLevel::District),
            ZoneLevel::District => None,
        }
    }
}

impl fmt::Display for ZoneLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ZoneLevel;

    #[test]
    fn order_is_root_first() {
        let order = ZoneLevel::order();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(order[0], ZoneLevel::World);
        assert_eq!(order[4], ZoneLevel::District);
    }

    #[test]
    fn child_walks_down_to_districts() {
        let mut level = ZoneLevel::World;
        let mut steps = 0;
        while let Some(next) = level.child() {
            assert!(next > level);
            level = next;
            steps += 1;
        }
        assert_eq!(level, ZoneLevel::District);
        assert_eq!(steps, 4);
    }
}
