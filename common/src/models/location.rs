/// A delivery stop. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    name: String,
    package_weight: u32,
}

impl Location {
    pub fn new(name: impl Into<String>, package_weight: u32) -> Self {
        Self {
            name: name.into(),
            package_weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_weight(&self) -> u32 {
        self.package_weight
    }
}
