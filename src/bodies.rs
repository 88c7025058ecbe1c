//! Heliocentric J2000 orbits of the major planets, in radians and km.
//!
//! Every orbit here is meant to be propagated with [`SUN_GRAV`](crate::SUN_GRAV).

use crate::constants::j2000;
use crate::elements::Orbit;

pub fn mercury() -> Orbit {
    Orbit::new(
        "Mercury",
        j2000(),
        0.7363828677023899,
        1.290398137330985,
        0.19016162418731905,
        0.122258,
        0.2161872518335417,
        5.7909176e7,
    )
}

pub fn venus() -> Orbit {
    Orbit::new(
        "Venus",
        j2000(),
        6.024347789858294,
        1.8790979389622697,
        0.13963804205942293,
        0.0592489,
        0.017361719534212148,
        1.0820893e8,
    )
}

pub fn earth() -> Orbit {
    Orbit::new(
        "Earth",
        j2000(),
        6.039693392708146,
        1.4877567222443007,
        8.219803446009808e-05,
        0.9e-07,
        0.023506053256160484,
        1.49597887e8,
    )
}

pub fn mars() -> Orbit {
    Orbit::new(
        "Mars",
        j2000(),
        0.9016227920497925,
        5.804221558977953,
        0.059136325715984754,
        0.0322992,
        0.09853112210172534,
        2.27936637e8,
    )
}

pub fn jupiter() -> Orbit {
    Orbit::new(
        "Jupiter",
        j2000(),
        3.986624571747394,
        0.22894709895829354,
        0.056682739190454204,
        0.0227818,
        0.05041232826440195,
        7.78412027e8,
    )
}

pub fn saturn() -> Orbit {
    Orbit::new(
        "Saturn",
        j2000(),
        3.2720797523951766,
        1.5276434137035415,
        0.10399170848152173,
        0.043362,
        0.05853326249640754,
        1.42672541e9,
    )
}

pub fn uranus() -> Orbit {
    Orbit::new(
        "Uranus",
        j2000(),
        3.8644829632802806,
        2.926548412800625,
        0.03235322856941487,
        0.013437,
        0.044645557888114,
        2.87097222e9,
    )
}

pub fn neptune() -> Orbit {
    Orbit::new(
        "Neptune",
        j2000(),
        5.100969108525634,
        0.8712884041923264,
        0.060720496894987035,
        0.0308778,
        0.011600603763700122,
        4.49825291e9,
    )
}

pub fn inner_solar_system() -> Vec<Orbit> {
    vec![mercury(), venus(), earth(), mars()]
}

pub fn outer_solar_system() -> Vec<Orbit> {
    vec![jupiter(), saturn(), uranus(), neptune()]
}

pub fn solar_system() -> Vec<Orbit> {
    let mut bodies = inner_solar_system();
    bodies.extend(outer_solar_system());
    bodies
}
