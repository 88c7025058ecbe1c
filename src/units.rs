//! Conversions from the units minor-planet catalogs use.

use chrono::{DateTime, Utc};

use crate::constants::AU;
use crate::elements::Orbit;
use crate::error::Error;
use crate::Num;

#[inline]
pub fn deg_to_rad(degrees: Num) -> Num {
    degrees.to_radians()
}

#[inline]
pub fn rad_to_deg(radians: Num) -> Num {
    radians.to_degrees()
}

#[inline]
pub fn au_to_km(au: Num) -> Num {
    au * AU
}

#[inline]
pub fn km_to_au(km: Num) -> Num {
    km / AU
}

/// One orbit as a minor-planet catalog stores it, angles in degrees and the
/// semi-major axis in AU.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogRecord {
    pub id: String,
    pub epoch: DateTime<Utc>,
    pub absolute_magnitude: Num,
    pub slope: Num,
    pub mean_anomaly_epoch: Num,
    pub argument_of_perihelion: Num,
    pub longitude_of_ascending_node: Num,
    pub inclination: Num,
    pub eccentricity: Num,
    /// degrees per day
    pub mean_daily_motion: Num,
    pub semi_major_axis: Num,
}

impl TryFrom<&CatalogRecord> for Orbit {
    type Error = Error;

    fn try_from(record: &CatalogRecord) -> Result<Self, Self::Error> {
        let orbit = Orbit {
            id: record.id.clone(),
            epoch: record.epoch,
            anomaly_at_epoch: deg_to_rad(record.mean_anomaly_epoch),
            argument_of_periapsis: deg_to_rad(record.argument_of_perihelion),
            longitude_of_ascending_node: deg_to_rad(record.longitude_of_ascending_node),
            inclination: deg_to_rad(record.inclination),
            eccentricity: record.eccentricity,
            semi_major_axis: au_to_km(record.semi_major_axis),
            absolute_magnitude: record.absolute_magnitude,
            slope: record.slope,
            mean_daily_motion: record.mean_daily_motion,
        };

        orbit.validate()?;

        Ok(orbit)
    }
}

impl TryFrom<CatalogRecord> for Orbit {
    type Error = Error;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        Orbit::try_from(&record)
    }
}
