use crate::models::{ForecastRange, Observation, TimeToken};

/// Read-only view handed to renderers.
///
/// Extension fields are optional capabilities: a renderer asks whether an
/// entity carries e.g. an expected-types list instead of matching on the
/// category name, so a new category with the same extension shape needs
/// no renderer change.
pub trait WeatherEntity {
    fn category(&self) -> &str;
    fn time(&self) -> Option<&TimeToken>;
    fn place(&self) -> Option<&str>;
    fn unit(&self) -> Option<&str>;

    fn direction(&self) -> Option<&str> {
        None
    }

    fn precipitation_type(&self) -> Option<&str> {
        None
    }

    fn expected_types(&self) -> Option<&[String]> {
        None
    }

    fn expected_directions(&self) -> Option<&[String]> {
        None
    }
}

impl WeatherEntity for Observation {
    fn category(&self) -> &str {
        Observation::category(self)
    }

    fn time(&self) -> Option<&TimeToken> {
        Observation::time(self)
    }

    fn place(&self) -> Option<&str> {
        Observation::place(self)
    }

    fn unit(&self) -> Option<&str> {
        Observation::unit(self)
    }

    fn direction(&self) -> Option<&str> {
        Observation::direction(self)
    }

    fn precipitation_type(&self) -> Option<&str> {
        Observation::precipitation_type(self)
    }
}

impl WeatherEntity for ForecastRange {
    fn category(&self) -> &str {
        ForecastRange::category_name(self)
    }

    fn time(&self) -> Option<&TimeToken> {
        ForecastRange::time(self)
    }

    fn place(&self) -> Option<&str> {
        ForecastRange::place(self)
    }

    fn unit(&self) -> Option<&str> {
        Some(ForecastRange::unit(self))
    }

    fn expected_types(&self) -> Option<&[String]> {
        ForecastRange::expected_types(self)
    }

    fn expected_directions(&self) -> Option<&[String]> {
        ForecastRange::expected_directions(self)
    }
}
