//! Compiled-in climbing-area dataset.
//!
//! Coordinates, fonts and visibility distances are authored data; ranges are
//! kept verbatim here and validated on load. Distances are meters of camera
//! range; `label_max_m` is typically tighter than `point_max_m` so clustered
//! areas (Tahquitz/Suicide, the Cottonwood canyons) collapse to a single dot
//! at wide zoom.

pub(crate) struct AreaRecord {
    pub name: &'static str,
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub alt_m: f64,
    pub font: &'static str,
    pub min_m: f64,
    pub label_max_m: f64,
    pub point_max_m: f64,
}

const fn area(
    name: &'static str,
    lon_deg: f64,
    lat_deg: f64,
    alt_m: f64,
    font: &'static str,
    min_m: f64,
    label_max_m: f64,
    point_max_m: f64,
) -> AreaRecord {
    AreaRecord {
        name,
        lon_deg,
        lat_deg,
        alt_m,
        font,
        min_m,
        label_max_m,
        point_max_m,
    }
}

#[rustfmt::skip]
pub(crate) const CLIMBING_AREAS: &[AreaRecord] = &[
    area("Joshua Tree NP",           -116.16795, 34.0122,  1000.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Tahquitz & Suicide",       -116.679,   33.7607,  2351.0, "14pt monospace", 20_000.0, 2_000_000.0, 8_000_000.0),
    area("Tahquitz Rock",            -116.68322, 33.76025, 2400.0, "14pt monospace", 0.0,      20_000.0,    20_000.0),
    area("Suicide Rock",             -116.69415, 33.77004, 2100.0, "14pt monospace", 0.0,      20_000.0,    20_000.0),
    area("Yosemite Valley",          -119.63452, 37.72349, 1200.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Squamish",                 -123.15393, 49.67997,   20.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Indian Creek",             -109.53987, 38.02574, 1757.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Red Rocks",                -115.42451, 36.13128, 1127.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Smith Rock",               -121.13906, 44.36779,  992.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Tuolumne Meadows",         -119.35782, 37.87401, 2600.0, "14pt monospace", 0.0,      2_000_000.0, 2_000_000.0),
    area("Vedauwoo",                 -105.37821, 41.18479, 2030.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Ten Sleep Canyon",         -107.24497, 44.13869, 1350.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Devils Tower",             -104.71507, 44.59048, 1584.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Red River Gorge",           -83.68217, 37.67745,  250.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("New River Gorge",           -81.06337, 38.07788,  300.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Rumney",                    -71.8367,  43.8021,   300.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Shawangunks",               -74.20173, 41.65146,  300.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("The Needles",              -118.50838, 36.11985, 1100.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Bishop",                   -118.39539, 37.36119, 1210.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Lover's Leap",             -120.14053, 38.79949, 1200.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Index",                    -121.56191, 47.82481,  150.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Eldorado Canyon",          -105.28121, 39.9318,  1600.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Wasatch Range",            -111.72869, 40.60538, 2000.0, "14pt monospace", 20_000.0, 2_000_000.0, 8_000_000.0),
    area("Little Cottonwood Canyon", -111.77699, 40.5727,  1950.0, "14pt monospace", 0.0,      20_000.0,    20_000.0),
    area("Big Cottonwood Canyon",    -111.789,   40.6193,  1900.0, "14pt monospace", 0.0,      20_000.0,    20_000.0),
    area("City of Rocks",            -113.72398, 42.0778,  1800.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Rifle",                    -107.6912,  39.7159,  1600.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
    area("Saint George",             -113.59297, 37.05079,  960.0, "14pt monospace", 0.0,      2_000_000.0, 8_000_000.0),
];
