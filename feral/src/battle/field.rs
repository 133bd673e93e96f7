use feral_data::{
    Terrain,
    Weather,
};

/// The battlefield's ambient state: weather, terrain, and field-wide ability
/// negation.
///
/// Mutators guard against overwriting immutable weather (the primal
/// weathers), which can only be cleared by the effect that set them.
pub struct Field {
    weather: Option<Weather>,
    terrain: Option<Terrain>,
    ignore_abilities: bool,
}

impl Field {
    /// Creates a new, clear field.
    pub fn new() -> Self {
        Self {
            weather: None,
            terrain: None,
            ignore_abilities: false,
        }
    }

    /// The current weather.
    pub fn weather(&self) -> Option<Weather> {
        self.weather
    }

    /// Whether the given weather can replace the current weather.
    pub fn can_set_weather(&self, weather: Weather) -> bool {
        match self.weather {
            Some(current) if current == weather => false,
            Some(current) if current.is_immutable() && !weather.is_immutable() => false,
            _ => true,
        }
    }

    /// Sets the weather, respecting immutable weather states.
    ///
    /// Returns whether the weather changed.
    pub fn set_weather(&mut self, weather: Weather) -> bool {
        if !self.can_set_weather(weather) {
            return false;
        }
        self.weather = Some(weather);
        true
    }

    /// Clears the weather.
    ///
    /// If `expected` is given, the weather is only cleared when it matches,
    /// so an effect can clean up exactly the weather it set.
    pub fn clear_weather(&mut self, expected: Option<Weather>) -> bool {
        match (self.weather, expected) {
            (Some(current), Some(expected)) if current != expected => false,
            (Some(_), _) => {
                self.weather = None;
                true
            }
            (None, _) => false,
        }
    }

    /// The current terrain.
    pub fn terrain(&self) -> Option<Terrain> {
        self.terrain
    }

    /// Sets the terrain. Returns whether the terrain changed.
    pub fn set_terrain(&mut self, terrain: Terrain) -> bool {
        if self.terrain == Some(terrain) {
            return false;
        }
        self.terrain = Some(terrain);
        true
    }

    /// Clears the terrain.
    pub fn clear_terrain(&mut self) -> bool {
        self.terrain.take().is_some()
    }

    /// Whether ignorable abilities are currently negated field-wide.
    pub fn abilities_ignored(&self) -> bool {
        self.ignore_abilities
    }

    pub fn set_abilities_ignored(&mut self, ignored: bool) {
        self.ignore_abilities = ignored;
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
