//! Unit table: five categories, each with its own base unit

use std::sync::LazyLock;
use crate::unit::{convert, Unit, UnitCategory, UnitError};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of unit categories, in display order
pub struct UnitRegistry {
    categories: Vec<UnitCategory>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry { categories: Vec::new() };
        registry.register_all_categories();
        registry
    }

    /// Get a category by key ("length", "mass", ...)
    pub fn category(&self, key: &str) -> Option<&UnitCategory> {
        let key = key.trim().to_lowercase();
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn categories(&self) -> &[UnitCategory] {
        &self.categories
    }

    pub fn keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }

    /// Category that contains a unit with this name
    pub fn category_of(&self, unit: &str) -> Option<&UnitCategory> {
        self.categories.iter().find(|c| c.unit(unit).is_some())
    }

    /// Convert within one named category
    pub fn convert_in(&self, category: &str, value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        let cat = self
            .category(category)
            .ok_or_else(|| UnitError::UnknownCategory(category.to_string()))?;

        for name in [from, to] {
            if cat.unit(name).is_none() {
                return Err(UnitError::UnknownUnit {
                    unit: name.to_string(),
                    category: cat.key.clone(),
                });
            }
        }

        convert(value, from, to, &cat.units).ok_or_else(|| UnitError::UnknownUnit {
            unit: from.to_string(),
            category: cat.key.clone(),
        })
    }

    fn register(&mut self, category: UnitCategory) {
        self.categories.push(category);
    }

    fn register_all_categories(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_temperature_units();
        self.register_force_units();
        self.register_energy_units();
    }

    fn register_length_units(&mut self) {
        self.register(UnitCategory::new("length", "Length", "meter", vec![
            Unit::new("meter", 1.0),
            Unit::new("kilometer", 1000.0),
            Unit::new("centimeter", 0.01),
            Unit::new("millimeter", 0.001),
            Unit::new("mile", 1609.34),
            Unit::new("yard", 0.9144),
            Unit::new("foot", 0.3048),
            Unit::new("inch", 0.0254),
        ]));
    }

    fn register_mass_units(&mut self) {
        self.register(UnitCategory::new("mass", "Mass", "kilogram", vec![
            Unit::new("kilogram", 1.0),
            Unit::new("gram", 0.001),
            Unit::new("milligram", 1e-6),
            Unit::new("tonne", 1000.0),
            Unit::new("pound", 0.453592),
            Unit::new("ounce", 0.0283495),
        ]));
    }

    fn register_temperature_units(&mut self) {
        // Celsius-equivalent base: base = (value - offset) * scale
        self.register(UnitCategory::new("temperature", "Temperature", "celsius", vec![
            Unit::with_offset("celsius", 1.0, 0.0),
            Unit::with_offset("fahrenheit", 5.0 / 9.0, 32.0),
            Unit::with_offset("kelvin", 1.0, 273.15),
        ]));
    }

    fn register_force_units(&mut self) {
        self.register(UnitCategory::new("force", "Force", "newton", vec![
            Unit::new("newton", 1.0),
            Unit::new("kilonewton", 1000.0),
            Unit::new("dyne", 1e-5),
            Unit::new("pound-force", 4.44822),
        ]));
    }

    fn register_energy_units(&mut self) {
        self.register(UnitCategory::new("energy", "Energy", "joule", vec![
            Unit::new("joule", 1.0),
            Unit::new("kilojoule", 1000.0),
            Unit::new("calorie", 4.184),
            Unit::new("kilocalorie", 4184.0),
            Unit::new("electronvolt", 1.60218e-19),
        ]));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
