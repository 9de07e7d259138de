use crate::models::{Category, Observation};

/// The last observation per category in collection order.
///
/// "Latest" means sequence position, not a comparison of time tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatestMeasurements<'a> {
    pub temperature: Option<&'a Observation>,
    pub precipitation: Option<&'a Observation>,
    pub wind_speed: Option<&'a Observation>,
    pub cloud_coverage: Option<&'a Observation>,
}

impl<'a> LatestMeasurements<'a> {
    pub fn select(observations: &'a [Observation]) -> Self {
        let mut latest = Self::default();

        for observation in observations {
            match observation.known_category() {
                Some(Category::Temperature) => latest.temperature = Some(observation),
                Some(Category::Precipitation) => latest.precipitation = Some(observation),
                Some(Category::WindSpeed) => latest.wind_speed = Some(observation),
                Some(Category::CloudCoverage) => latest.cloud_coverage = Some(observation),
                None => {}
            }
        }

        latest
    }

    pub fn get(&self, category: Category) -> Option<&'a Observation> {
        match category {
            Category::Temperature => self.temperature,
            Category::Precipitation => self.precipitation,
            Category::WindSpeed => self.wind_speed,
            Category::CloudCoverage => self.cloud_coverage,
        }
    }

    /// Entries in display order, absent categories included
    pub fn entries(&self) -> impl Iterator<Item = (Category, Option<&'a Observation>)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Last observation of a single category, if any
pub fn latest_of(observations: &[Observation], category: Category) -> Option<&Observation> {
    observations.iter().rev().find(|o| o.is_category(category))
}
