//! Reference table of solar physical constants.
//!
//! Values follow the IAU 2015 nominal solar values where those exist, the
//! IAU Working Group on Cartographic Coordinates and Rotational Elements
//! (Archinal et al. 2018) for rotation parameters, and Allen's Astrophysical
//! Quantities (4th ed.) for the rest.
//!
//! `uncertainty: Some(0.0)` means exact by definition; `None` means the
//! reference quotes no uncertainty.

use super::record::ConstantRecord;

const IAU_2015: &str = "IAU 2015 Resolution B 3";
const IAU_2015_CODATA: &str = "IAU 2015 Resolution B 3 + CODATA 2018";
const IAU_2012: &str = "IAU 2012 Resolution B2";
const ALLEN: &str = "Allen's Astrophysical Quantities 4th Ed.";
const ARCHINAL: &str = "Archinal et al. 2018";
const ASPLUND: &str = "Asplund et al. 2009";
const CARRINGTON: &str = "Carrington (1863)";

pub const MASS: ConstantRecord = ConstantRecord {
    name: "mass",
    aliases: &["M_sun", "solar mass"],
    description: "Solar mass",
    value: 1.988_409_870_698_051e30,
    unit: "kg",
    uncertainty: Some(4.468_805_426_856_864e25),
    reference: IAU_2015_CODATA,
};

pub const RADIUS: ConstantRecord = ConstantRecord {
    name: "radius",
    aliases: &["R_sun", "solar radius"],
    description: "Nominal solar radius",
    value: 6.957e8,
    unit: "m",
    uncertainty: Some(0.0),
    reference: IAU_2015,
};

pub const LUMINOSITY: ConstantRecord = ConstantRecord {
    name: "luminosity",
    aliases: &["L_sun", "solar luminosity"],
    description: "Nominal solar luminosity",
    value: 3.828e26,
    unit: "W",
    uncertainty: Some(0.0),
    reference: IAU_2015,
};

pub const MEAN_DISTANCE: ConstantRecord = ConstantRecord {
    name: "mean distance",
    aliases: &["au", "astronomical unit"],
    description: "Astronomical unit",
    value: 1.495_978_707e11,
    unit: "m",
    uncertainty: Some(0.0),
    reference: IAU_2012,
};

pub const PERIHELION_DISTANCE: ConstantRecord = ConstantRecord {
    name: "perihelion distance",
    aliases: &[],
    description: "Perihelion distance",
    value: 1.471e11,
    unit: "m",
    uncertainty: None,
    reference: ALLEN,
};

pub const APHELION_DISTANCE: ConstantRecord = ConstantRecord {
    name: "aphelion distance",
    aliases: &[],
    description: "Aphelion distance",
    value: 1.521e11,
    unit: "m",
    uncertainty: None,
    reference: ALLEN,
};

pub const AGE: ConstantRecord = ConstantRecord {
    name: "age",
    aliases: &[],
    description: "Age of the Sun",
    value: 4.6e9,
    unit: "yr",
    uncertainty: Some(1e8),
    reference: ALLEN,
};

pub const SOLAR_FLUX_UNIT: ConstantRecord = ConstantRecord {
    name: "solar flux unit",
    aliases: &["sfu"],
    description: "Solar flux unit",
    value: 1e-22,
    unit: "W m-2 Hz-1",
    uncertainty: Some(0.0),
    reference: ALLEN,
};

pub const VISUAL_MAGNITUDE: ConstantRecord = ConstantRecord {
    name: "visual magnitude",
    aliases: &["apparent magnitude"],
    description: "Apparent visual magnitude",
    value: -26.75,
    unit: "mag",
    uncertainty: None,
    reference: ALLEN,
};

pub const AVERAGE_ANGULAR_SIZE: ConstantRecord = ConstantRecord {
    name: "average angular size",
    aliases: &["angular radius"],
    description: "Semi-diameter at 1 au",
    value: 959.63,
    unit: "arcsec",
    uncertainty: None,
    reference: ALLEN,
};

pub const SURFACE_AREA: ConstantRecord = ConstantRecord {
    name: "surface area",
    aliases: &[],
    description: "Surface area",
    value: 6.087e18,
    unit: "m2",
    uncertainty: None,
    reference: ALLEN,
};

pub const AVERAGE_DENSITY: ConstantRecord = ConstantRecord {
    name: "average density",
    aliases: &["mean density"],
    description: "Mean density",
    value: 1409.0,
    unit: "kg m-3",
    uncertainty: None,
    reference: ALLEN,
};

pub const SURFACE_GRAVITY: ConstantRecord = ConstantRecord {
    name: "surface gravity",
    aliases: &["g_sun"],
    description: "Surface gravity",
    value: 274.0,
    unit: "m s-2",
    uncertainty: None,
    reference: ALLEN,
};

pub const MOMENT_OF_INERTIA: ConstantRecord = ConstantRecord {
    name: "moment of inertia",
    aliases: &[],
    description: "Moment of inertia",
    value: 5.7e54,
    unit: "kg m2",
    uncertainty: None,
    reference: ALLEN,
};

pub const VOLUME: ConstantRecord = ConstantRecord {
    name: "volume",
    aliases: &[],
    description: "Volume",
    value: 1.4122e27,
    unit: "m3",
    uncertainty: None,
    reference: ALLEN,
};

pub const ESCAPE_VELOCITY: ConstantRecord = ConstantRecord {
    name: "escape velocity",
    aliases: &[],
    description: "Escape velocity at the surface",
    value: 6.177e5,
    unit: "m s-1",
    uncertainty: None,
    reference: ALLEN,
};

pub const OBLATENESS: ConstantRecord = ConstantRecord {
    name: "oblateness",
    aliases: &[],
    description: "Difference between equatorial and polar radius",
    value: 8.01,
    unit: "mas",
    uncertainty: Some(0.14),
    reference: ALLEN,
};

pub const METALLICITY: ConstantRecord = ConstantRecord {
    name: "metallicity",
    aliases: &["Z"],
    description: "Metallicity (mass fraction)",
    value: 0.0134,
    unit: "",
    uncertainty: None,
    reference: ASPLUND,
};

pub const SUNSPOT_CYCLE: ConstantRecord = ConstantRecord {
    name: "sunspot cycle",
    aliases: &["solar cycle"],
    description: "Average length of the sunspot cycle",
    value: 11.4,
    unit: "yr",
    uncertainty: None,
    reference: ALLEN,
};

pub const AVERAGE_INTENSITY: ConstantRecord = ConstantRecord {
    name: "average intensity",
    aliases: &[],
    description: "Mean intensity of the disk",
    value: 2.009e7,
    unit: "W m-2 sr-1",
    uncertainty: None,
    reference: ALLEN,
};

pub const EFFECTIVE_TEMPERATURE: ConstantRecord = ConstantRecord {
    name: "effective temperature",
    aliases: &["T_eff"],
    description: "Nominal effective temperature",
    value: 5772.0,
    unit: "K",
    uncertainty: Some(0.0),
    reference: IAU_2015,
};

pub const MASS_CONVERSION_RATE: ConstantRecord = ConstantRecord {
    name: "mass conversion rate",
    aliases: &[],
    description: "Rate at which mass is converted to energy",
    value: 4.3e9,
    unit: "kg s-1",
    uncertainty: None,
    reference: ALLEN,
};

pub const CENTER_DENSITY: ConstantRecord = ConstantRecord {
    name: "center density",
    aliases: &["central density"],
    description: "Density at the center",
    value: 1.622e5,
    unit: "kg m-3",
    uncertainty: None,
    reference: ALLEN,
};

pub const CENTER_TEMPERATURE: ConstantRecord = ConstantRecord {
    name: "center temperature",
    aliases: &["central temperature"],
    description: "Temperature at the center",
    value: 1.571e7,
    unit: "K",
    uncertainty: None,
    reference: ALLEN,
};

pub const ABSOLUTE_MAGNITUDE: ConstantRecord = ConstantRecord {
    name: "absolute magnitude",
    aliases: &[],
    description: "Absolute visual magnitude",
    value: 4.83,
    unit: "mag",
    uncertainty: None,
    reference: ALLEN,
};

pub const MEAN_ENERGY_PRODUCTION: ConstantRecord = ConstantRecord {
    name: "mean energy production",
    aliases: &[],
    description: "Mean energy production per unit mass",
    value: 1.937e-4,
    unit: "J kg-1",
    uncertainty: None,
    reference: ALLEN,
};

pub const ELLIPTICITY: ConstantRecord = ConstantRecord {
    name: "ellipticity",
    aliases: &[],
    description: "Ellipticity of the photosphere",
    value: 5e-5,
    unit: "",
    uncertainty: None,
    reference: ALLEN,
};

pub const GM: ConstantRecord = ConstantRecord {
    name: "GM",
    aliases: &["gravitational parameter"],
    description: "Nominal solar mass parameter",
    value: 1.327_124_4e20,
    unit: "m3 s-2",
    uncertainty: Some(0.0),
    reference: IAU_2015,
};

pub const W_0: ConstantRecord = ConstantRecord {
    name: "W_0",
    aliases: &["prime meridian"],
    description: "Longitude of the prime meridian at J2000.0",
    value: 84.176,
    unit: "deg",
    uncertainty: None,
    reference: ARCHINAL,
};

pub const SIDEREAL_ROTATION_RATE: ConstantRecord = ConstantRecord {
    name: "sidereal rotation rate",
    aliases: &[],
    description: "Sidereal rotation rate of the prime meridian",
    value: 14.1844,
    unit: "deg d-1",
    uncertainty: None,
    reference: ARCHINAL,
};

pub const FIRST_CARRINGTON_ROTATION: ConstantRecord = ConstantRecord {
    name: "first Carrington rotation (JD TT)",
    aliases: &[],
    description: "Start of Carrington rotation 1 as a Julian date (TT)",
    value: 2_398_167.4,
    unit: "d",
    uncertainty: Some(0.1),
    reference: CARRINGTON,
};

pub const MEAN_SYNODIC_PERIOD: ConstantRecord = ConstantRecord {
    name: "mean synodic period",
    aliases: &["Carrington period"],
    description: "Mean synodic rotation period",
    value: 27.2753,
    unit: "d",
    uncertainty: Some(1e-4),
    reference: CARRINGTON,
};

pub const ALPHA_0: ConstantRecord = ConstantRecord {
    name: "alpha_0",
    aliases: &["pole right ascension"],
    description: "Right ascension (ICRS) of the north pole at J2000.0",
    value: 286.13,
    unit: "deg",
    uncertainty: None,
    reference: ARCHINAL,
};

pub const DELTA_0: ConstantRecord = ConstantRecord {
    name: "delta_0",
    aliases: &["pole declination"],
    description: "Declination (ICRS) of the north pole at J2000.0",
    value: 63.87,
    unit: "deg",
    uncertainty: None,
    reference: ARCHINAL,
};

/// All solar constants in registration order.
pub const SOLAR_CONSTANTS: [ConstantRecord; 34] = [
    MASS,
    RADIUS,
    LUMINOSITY,
    MEAN_DISTANCE,
    PERIHELION_DISTANCE,
    APHELION_DISTANCE,
    AGE,
    SOLAR_FLUX_UNIT,
    VISUAL_MAGNITUDE,
    AVERAGE_ANGULAR_SIZE,
    SURFACE_AREA,
    AVERAGE_DENSITY,
    SURFACE_GRAVITY,
    MOMENT_OF_INERTIA,
    VOLUME,
    ESCAPE_VELOCITY,
    OBLATENESS,
    METALLICITY,
    SUNSPOT_CYCLE,
    AVERAGE_INTENSITY,
    EFFECTIVE_TEMPERATURE,
    MASS_CONVERSION_RATE,
    CENTER_DENSITY,
    CENTER_TEMPERATURE,
    ABSOLUTE_MAGNITUDE,
    MEAN_ENERGY_PRODUCTION,
    ELLIPTICITY,
    GM,
    W_0,
    SIDEREAL_ROTATION_RATE,
    FIRST_CARRINGTON_ROTATION,
    MEAN_SYNODIC_PERIOD,
    ALPHA_0,
    DELTA_0,
];
