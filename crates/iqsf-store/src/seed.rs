//! Sample data loaded into a fresh store.

use iqsf_model::{NewCountry, Region, Trend};

/// The four sample countries every seeded store starts with.
pub fn sample_countries() -> Vec<NewCountry> {
    vec![
        country("Canada", "CA", Region::Americas, 85, Trend::Stable, 56.130366, -106.346771),
        country("Netherlands", "NL", Region::Europe, 92, Trend::Improving, 52.132633, 5.291266),
        country("Sweden", "SE", Region::Europe, 89, Trend::Stable, 60.128161, 18.643501),
        country("Germany", "DE", Region::Europe, 76, Trend::Improving, 51.165691, 10.451526),
    ]
}

fn country(
    name: &str,
    code: &str,
    region: Region,
    safety_score: u8,
    trend: Trend,
    latitude: f64,
    longitude: f64,
) -> NewCountry {
    NewCountry {
        name: name.to_string(),
        code: code.to_string(),
        region,
        safety_score,
        trend,
        latitude: Some(latitude),
        longitude: Some(longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqsf_model::Validate;

    #[test]
    fn test_samples_are_valid() {
        let samples = sample_countries();
        assert_eq!(samples.len(), 4);
        for c in &samples {
            c.validate().unwrap();
        }
    }
}
