//! Present-weather code tables.
//!
//! A present-weather group is written as intensity, descriptor,
//! precipitation and obscuration codes run together, e.g. `-SHRA` or `+TSGR`.

code_table! {
    /// Intensity or proximity prefix. Moderate intensity has no code.
    pub enum Intensity ("intensity") {
        /// No significant weather.
        #[default]
        Nsw => ("nsw", "NSW", "NSW"),
        Moderate => ("moderate", "", "moderate"),
        Light => ("light", "-", "- light"),
        Heavy => ("heavy", "+", "+ heavy"),
        Vicinity => ("vicinity", "VC", "VC in the vicinity"),
    }
}

code_table! {
    pub enum Descriptor ("descriptor") {
        #[default]
        None => ("none", "", ""),
        Shallow => ("shallow", "MI", "MI shallow"),
        Patches => ("patches", "BC", "BC patches / broken"),
        Partial => ("partial", "PR", "PR partial"),
        Drifting => ("drifting", "DR", "DR drifting"),
        Blowing => ("blowing", "BL", "BL blowing"),
        Shower => ("shower", "SH", "SH shower"),
        Thunderstorm => ("thunderstorm", "TS", "TS thunderstorm"),
        Freezing => ("freezing", "FZ", "FZ freezing"),
    }
}

code_table! {
    pub enum Precipitation ("precipitation") {
        #[default]
        None => ("none", "", ""),
        Drizzle => ("drizzle", "DZ", "DZ drizzle"),
        Rain => ("rain", "RA", "RA rain"),
        Snow => ("snow", "SN", "SN snow"),
        SnowGrains => ("snow_grains", "SG", "SG snow grains"),
        IceCrystals => ("ice_crystals", "IC", "IC ice crystals"),
        IcePellets => ("ice_pellets", "PL", "PL ice pellets"),
        Hail => ("hail", "GR", "GR hail"),
        /// Small hail or snow pellets, under 5 mm.
        SmallHail => ("small_hail", "GS", "GS small hail or snow pellets (< 5mm)"),
    }
}

code_table! {
    /// Obscuring phenomena reducing visibility.
    pub enum Obscuration ("obscuration") {
        #[default]
        None => ("none", "", ""),
        Mist => ("mist", "BR", "BR mist"),
        Fog => ("fog", "FG", "FG fog"),
        Smoke => ("smoke", "FU", "FU smoke"),
        VolcanicAsh => ("volcanic_ash", "VA", "VA volcanic ash"),
        Dust => ("dust", "DU", "DU dust"),
        Sand => ("sand", "SA", "SA sand"),
        Haze => ("haze", "HZ", "HZ haze"),
    }
}
