//! Test utilities for the orbital catalog.
//!
//! Provides fixture records in the GP CSV column layout and helpers for
//! building elements without going through the parser.

/// Fixtures for creating test records and elements.
pub mod fixtures {
    use crate::elements::OrbitalElements;

    /// A complete ISS record.
    pub const ISS_RECORD: &str = "ISS (ZARYA),1998-067A,2024-03-01T12:00:00.000000,15.50103472,0.0005703,51.6416,247.4627,130.5360,325.0288";

    /// A record whose right ascension column is empty.
    pub const MISSING_RA_RECORD: &str =
        "NOAA 15,1998-030A,2024-03-01T12:00:00.000000,14.26,0.0011,98.6,";

    /// Three active satellites.
    pub const ACTIVE_CSV: &str = "\
OBJECT_NAME,OBJECT_ID,EPOCH,MEAN_MOTION,ECCENTRICITY,INCLINATION,RA_OF_ASC_NODE,ARG_OF_PERICENTER,MEAN_ANOMALY
CALSPHERE 1,1964-063C,2024-03-01T08:00:00.000000,13.75899,0.0025,90.18,70.12,60.1,300.2
VANGUARD 1,1958-002B,2024-03-01T09:00:00.000000,10.84869,0.1845,34.25,45.61,120.4,250.9
TIROS N,1978-096A,2024-03-01T10:00:00.000000,14.25890,0.0010,98.70,150.33,80.7,279.5
";

    /// Two space stations.
    pub const STATIONS_CSV: &str = "\
OBJECT_NAME,OBJECT_ID,EPOCH,MEAN_MOTION,ECCENTRICITY,INCLINATION,RA_OF_ASC_NODE,ARG_OF_PERICENTER,MEAN_ANOMALY
ISS (ZARYA),1998-067A,2024-03-01T12:00:00.000000,15.50103472,0.0005703,51.6416,247.4627,130.5360,325.0288
CSS (TIANHE),2021-035A,2024-03-01T12:30:00.000000,15.61612,0.0004,41.4700,108.9100,10.2000,349.9000
";

    /// One well-formed row followed by one missing its right ascension.
    pub const ONE_GOOD_ONE_BAD_CSV: &str = "\
OBJECT_NAME,OBJECT_ID,EPOCH,MEAN_MOTION,ECCENTRICITY,INCLINATION,RA_OF_ASC_NODE,ARG_OF_PERICENTER,MEAN_ANOMALY
NOAA 19,2009-005A,2024-03-01T10:00:00.000000,14.12,0.0013,99.19,128.5,10.0,20.0
NOAA 15,1998-030A,2024-03-01T12:00:00.000000,14.26,0.0011,98.6,
";

    /// A single body at exactly 16 revolutions per day.
    pub const SIXTEEN_REV_CSV: &str = "\
OBJECT_NAME,OBJECT_ID,EPOCH,MEAN_MOTION,ECCENTRICITY,INCLINATION,RA_OF_ASC_NODE
FAST SAT,2020-001A,2024-03-01T00:00:00.000000,16.0,0.0,45.0,0.0
";

    /// Elements with a fixed catalog id of `2000-001A`.
    pub fn elements(
        name: &str,
        rotations_per_day: f64,
        inclination_deg: f64,
        right_ascension_deg: f64,
    ) -> OrbitalElements {
        OrbitalElements {
            name: name.to_string(),
            catalog_id: "2000-001A".to_string(),
            rotations_per_day,
            inclination_deg,
            right_ascension_deg,
        }
    }
}
