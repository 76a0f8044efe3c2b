//! Typed views of the most used solar constants.

use qtty::{Days, Degrees, Kilograms, Meters, Quantity, Watts, Years};

use super::data;

pub fn mass() -> Kilograms {
    Quantity::new(data::MASS.value)
}

/// Nominal solar radius.
pub fn radius() -> Meters {
    Quantity::new(data::RADIUS.value)
}

pub fn luminosity() -> Watts {
    Quantity::new(data::LUMINOSITY.value)
}

/// One astronomical unit.
pub fn mean_distance() -> Meters {
    Quantity::new(data::MEAN_DISTANCE.value)
}

pub fn age() -> Years {
    Quantity::new(data::AGE.value)
}

/// Mean synodic (Carrington) rotation period.
pub fn mean_synodic_period() -> Days {
    Quantity::new(data::MEAN_SYNODIC_PERIOD.value)
}

/// Right ascension of the solar north pole at J2000.0.
pub fn alpha_0() -> Degrees {
    Quantity::new(data::ALPHA_0.value)
}

/// Declination of the solar north pole at J2000.0.
pub fn delta_0() -> Degrees {
    Quantity::new(data::DELTA_0.value)
}

/// Prime meridian longitude at J2000.0.
pub fn w_0() -> Degrees {
    Quantity::new(data::W_0.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::data;
    use approx::assert_relative_eq;
    use qtty::{Day, Deg, Kilogram, Meter, Year};

    #[test]
    fn test_accessors_agree_with_records() {
        assert_eq!(mass(), data::MASS.as_quantity::<Kilogram>().unwrap());
        assert_eq!(radius(), data::RADIUS.as_quantity::<Meter>().unwrap());
        assert_eq!(age(), data::AGE.as_quantity::<Year>().unwrap());
        assert_eq!(
            mean_synodic_period(),
            data::MEAN_SYNODIC_PERIOD.as_quantity::<Day>().unwrap()
        );
        assert_eq!(alpha_0(), data::ALPHA_0.as_quantity::<Deg>().unwrap());
    }

    #[test]
    fn test_nominal_values() {
        assert_relative_eq!(luminosity().value(), 3.828e26);
        assert_relative_eq!(mean_distance().value(), 1.495_978_707e11);
        assert_relative_eq!(delta_0().value(), 63.87);
        assert_relative_eq!(w_0().value(), 84.176);
    }

    #[test]
    fn test_mean_density_is_consistent() {
        let r = radius().value();
        let volume = 4.0 / 3.0 * std::f64::consts::PI * r.powi(3);
        let density = mass().value() / volume;
        assert_relative_eq!(density, data::AVERAGE_DENSITY.value, max_relative = 0.01);
    }
}
