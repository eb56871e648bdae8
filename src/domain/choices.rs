//! Closed-choice form options.
//!
//! Every option carries two strings:
//!
//! - `label`: what the form shows (and what ends up in an `InputRecord`),
//!   usually decorated with an emoji
//! - `value`: the plain category the encoder works with
//!
//! The order of `ALL` is the order the form lists the options in, and the order
//! of the one-hot block the encoder emits for the field.

use clap::ValueEnum;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($label:literal, $value:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn index(self) -> usize {
                Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
            }

            pub fn first() -> Self {
                Self::ALL[0]
            }

            /// Step through the options, wrapping at both ends.
            pub fn cycle(self, delta: i32) -> Self {
                let n = Self::ALL.len() as i32;
                let idx = (self.index() as i32 + delta).rem_euclid(n);
                Self::ALL[idx as usize]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum! {
    /// Day of the week.
    DayOfWeek {
        Mon => ("Mon", "Mon"),
        Tue => ("Tue", "Tue"),
        Wed => ("Wed", "Wed"),
        Thu => ("Thu", "Thu"),
        Fri => ("Fri", "Fri"),
        Sat => ("Sat", "Sat"),
        Sun => ("Sun", "Sun"),
    }
}

choice_enum! {
    /// Where the accident occurred.
    AreaAccident {
        OfficeAreas => ("🏢 Office areas", "Office areas"),
        RecreationalAreas => ("🏞️ Recreational areas", "Recreational areas"),
        ResidentialAreas => ("🏠 Residential areas", "Residential areas"),
        IndustrialAreas => ("🏭 Industrial areas", "Industrial areas"),
        Other => ("❓ Other", "Other"),
        ChurchAreas => ("⛪ Church areas", "Church areas"),
        MarketAreas => ("🛒 Market areas", "Market areas"),
        RuralVillageAreas => ("🏡 Rural village areas", "Rural village areas"),
        OutsideRuralAreas => ("🌄 Outside rural areas", "Outside rural areas"),
        HospitalAreas => ("🏥 Hospital areas", "Hospital areas"),
        SchoolAreas => ("🏫 School areas", "School areas"),
        Unknown => ("❓ Unknown", "Unknown"),
        // Present verbatim in the training data.
        RuralVillageOfficeAreas => ("🏡 Rural village areasOffice areas", "Rural village areasOffice areas"),
    }
}

choice_enum! {
    /// Road lane / median layout.
    LaneOrMedians {
        UndividedTwoWay => ("🛣️ Undivided Two way", "Undivided Two way"),
        Other => ("❓ other", "other"),
        DoubleCarriageway => ("🛤️ Double carriageway (median)", "Double carriageway (median)"),
        OneWay => ("➡️ One way", "One way"),
        TwoWaySolidLines => ("🟡 Two-way (solid lines)", "Two-way (solid lines)"),
        TwoWayBrokenLines => ("⚪ Two-way (broken lines)", "Two-way (broken lines)"),
        Unknown => ("❓ Unknown", "Unknown"),
    }
}

choice_enum! {
    /// Vehicle involved.
    TypeOfVehicle {
        LorryHeavy => ("🚚 Lorry (41–100Q)", "Lorry (41–100Q)"),
        PublicSmall => ("🚌 Public (12 seats)", "Public (12 seats)"),
        RiddenHorse => ("🐎 Ridden horse", "Ridden horse"),
        LorryMedium => ("🚛 Lorry (11–40Q)", "Lorry (11–40Q)"),
        Turbo => ("🚗 Turbo", "Turbo"),
        Taxi => ("🚕 Taxi", "Taxi"),
        Bicycle => ("🚲 Bicycle", "Bicycle"),
        Automobile => ("🚙 Automobile", "Automobile"),
        Other => ("❓ Other", "Other"),
        PickUp => ("🛻 Pick up up to 10Q", "Pick up up to 10Q"),
        PublicMedium => ("🚌 Public (13–45 seats)", "Public (13–45 seats)"),
        SpecialVehicle => ("🚜 Special vehicle", "Special vehicle"),
        Stationwagen => ("🚐 Stationwagen", "Stationwagen"),
        LongLorry => ("🚛 Long lorry", "Long lorry"),
        Bajaj => ("🛺 Bajaj", "Bajaj"),
        PublicLarge => ("🚌 Public (> 45 seats)", "Public (> 45 seats)"),
        Motorcycle => ("🏍️ Motorcycle", "Motorcycle"),
    }
}

choice_enum! {
    /// Road surface material.
    RoadSurfaceType {
        AsphaltRoads => ("🛣️ Asphalt roads", "Asphalt roads"),
        EarthRoads => ("🌱 Earth roads", "Earth roads"),
        GravelRoads => ("🪨 Gravel roads", "Gravel roads"),
        Other => ("❓ Other", "Other"),
        AsphaltDistressed => ("🛣️ Asphalt (distressed)", "Asphalt (distressed)"),
    }
}

choice_enum! {
    /// Junction / crossing type at the location.
    RoadSurfaceConditions {
        NoJunction => ("🚦 No junction", "No junction"),
        YShape => ("🔀 Y Shape", "Y Shape"),
        Crossing => ("✖️ Crossing", "Crossing"),
        OShape => ("⭕ O Shape", "O Shape"),
        Other => ("❓ Other", "Other"),
        Unknown => ("❓ Unknown", "Unknown"),
        TShape => ("🔱 T Shape", "T Shape"),
        XShape => ("❌ X Shape", "X Shape"),
    }
}

choice_enum! {
    /// Lighting at the time.
    LightConditions {
        Daylight => ("🌞 Daylight", "Daylight"),
        DarknessLightsLit => ("💡 Darkness - lights lit", "Darkness - lights lit"),
        DarknessNoLighting => ("🌑 Darkness - no lighting", "Darkness - no lighting"),
        DarknessLightsUnlit => ("💡 Darkness - lights unlit", "Darkness - lights unlit"),
    }
}

choice_enum! {
    /// Weather at the time.
    WeatherConditions {
        Normal => ("☀️ Normal", "Normal"),
        Raining => ("🌧️ Raining", "Raining"),
        RainingAndWindy => ("🌧️💨 Raining and Windy", "Raining and Windy"),
        Cloudy => ("☁️ Cloudy", "Cloudy"),
        Other => ("❓ Other", "Other"),
        Windy => ("💨 Windy", "Windy"),
        Snow => ("❄️ Snow", "Snow"),
        Unknown => ("❓ Unknown", "Unknown"),
        FogOrMist => ("🌫️ Fog or mist", "Fog or mist"),
    }
}

choice_enum! {
    /// Sex of the driver.
    SexOfDriver {
        Male => ("♂️ Male", "Male"),
        Female => ("♀️ Female", "Female"),
    }
}
