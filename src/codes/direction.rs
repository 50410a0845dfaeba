//! Compass sectors qualifying the minimum visibility.

code_table! {
    /// Direction in which the minimum visibility was observed.
    pub enum CompassDirection ("visibility direction") {
        #[default]
        None => ("none", "", ""),
        North => ("north", "N", "N"),
        NorthEast => ("north_east", "NE", "NE"),
        NorthWest => ("north_west", "NW", "NW"),
        South => ("south", "S", "S"),
        SouthEast => ("south_east", "SE", "SE"),
        SouthWest => ("south_west", "SW", "SW"),
        East => ("east", "E", "E"),
        West => ("west", "W", "W"),
    }
}
