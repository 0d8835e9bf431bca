//! Static county-centroid table, keyed by normalized county name.
//!
//! Independent reference data with no owning entity; a county absent from
//! this table is not an error, facilities there simply carry no coordinates.

/// (normalized county key, latitude, longitude) for all 75 Arkansas counties.
pub const COUNTY_CENTROIDS: &[(&str, f64, f64)] = &[
    ("arkansas", 34.2739, -91.3468),
    ("ashley", 33.2025, -91.7879),
    ("baxter", 36.3156, -92.3918),
    ("benton", 36.3729, -94.2088),
    ("boone", 36.2967, -93.1154),
    ("bradley", 33.4539, -92.2401),
    ("calhoun", 33.5556, -92.5557),
    ("carroll", 36.3967, -93.5488),
    ("chicot", 33.2964, -91.2701),
    ("clark", 34.0917, -93.1154),
    ("clay", 36.3951, -90.3468),
    ("cleburne", 35.5267, -92.0154),
    ("cleveland", 33.8739, -92.1968),
    ("columbia", 33.2328, -93.2088),
    ("conway", 35.2267, -92.8918),
    ("craighead", 35.8356, -90.7043),
    ("crawford", 35.5967, -94.2701),
    ("crittenden", 35.2356, -90.3088),
    ("cross", 35.2917, -90.7879),
    ("dallas", 33.9556, -92.6401),
    ("desha", 33.8739, -91.2701),
    ("drew", 33.6017, -91.7318),
    ("faulkner", 35.1356, -92.3918),
    ("franklin", 35.5267, -93.8918),
    ("fulton", 36.3951, -91.7879),
    ("garland", 34.5017, -93.0557),
    ("grant", 34.2328, -92.4401),
    ("greene", 36.1356, -90.5557),
    ("hempstead", 33.7739, -93.6401),
    ("hot spring", 34.2917, -92.8918),
    ("howard", 34.0917, -94.1154),
    ("independence", 35.7267, -91.4918),
    ("izard", 36.0967, -91.9401),
    ("jackson", 35.5967, -91.2088),
    ("jefferson", 34.2328, -91.9401),
    ("johnson", 35.5267, -93.3918),
    ("lafayette", 33.2739, -93.5557),
    ("lawrence", 36.0356, -91.0557),
    ("lee", 34.7739, -90.7879),
    ("lincoln", 33.9556, -91.7318),
    ("little river", 33.6017, -94.2701),
    ("logan", 35.2267, -93.6401),
    ("lonoke", 34.7739, -91.8918),
    ("madison", 35.9967, -93.7318),
    ("marion", 36.2967, -92.6401),
    ("miller", 33.3739, -93.8918),
    ("mississippi", 35.8356, -90.1154),
    ("monroe", 34.7739, -91.2088),
    ("montgomery", 34.5017, -93.6401),
    ("nevada", 33.7739, -93.2088),
    ("newton", 35.9967, -93.1154),
    ("ouachita", 33.6017, -92.8918),
    ("perry", 35.0356, -92.8918),
    ("phillips", 34.4128, -90.7043),
    ("pike", 34.0917, -93.6401),
    ("poinsett", 35.5967, -90.7043),
    ("polk", 34.5017, -94.2701),
    ("pope", 35.4267, -93.0557),
    ("prairie", 34.7739, -91.4918),
    ("pulaski", 34.7489, -92.2746),
    ("randolph", 36.2967, -91.0557),
    ("st. francis", 34.9556, -90.7879),
    ("saline", 34.6739, -92.6401),
    ("scott", 35.1356, -94.1154),
    ("searcy", 35.9967, -92.6401),
    ("sebastian", 35.2267, -94.3918),
    ("sevier", 34.0917, -94.3918),
    ("sharp", 36.1356, -91.6401),
    ("stone", 35.8356, -92.1154),
    ("union", 33.2328, -92.6401),
    ("van buren", 35.5967, -92.3918),
    ("washington", 36.0356, -94.1154),
    ("white", 35.2917, -91.7318),
    ("woodruff", 35.1356, -91.0557),
    ("yell", 35.1356, -93.3918),
];

/// Centroid for a normalized county key, if the table carries one.
pub fn centroid(county_key: &str) -> Option<(f64, f64)> {
    COUNTY_CENTROIDS
        .iter()
        .find(|(name, _, _)| *name == county_key)
        .map(|&(_, lat, lon)| (lat, lon))
}
