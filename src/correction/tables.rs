//! Temperature correction factor table
//!
//! Insulation resistance roughly halves for every 10 °C rise in apparatus
//! temperature, so normalizing a reading to the 20 °C reference multiplies
//! it by 2^((t - 20) / 10). The table fixes that curve as NETA-style
//! per-degree data over the field range −24..=100 °C, normalized so the
//! factor at 20 °C is exactly 1.0. Kept as data, not a formula, so report
//! families that publish their own factors can be diffed against it.

/// Per-degree correction factors as `(celsius, factor)` pairs, strictly
/// increasing in both columns.
pub const TCF_TABLE: &[(i64, f64)] = &[
    (-24, 0.047), (-23, 0.051), (-22, 0.054), (-21, 0.058),
    (-20, 0.062), (-19, 0.067), (-18, 0.072), (-17, 0.077),
    (-16, 0.082), (-15, 0.088), (-14, 0.095), (-13, 0.102),
    (-12, 0.109), (-11, 0.117), (-10, 0.125), (-9, 0.134),
    (-8, 0.144), (-7, 0.154), (-6, 0.165), (-5, 0.177),
    (-4, 0.189), (-3, 0.203), (-2, 0.218), (-1, 0.233),
    (0, 0.250), (1, 0.268), (2, 0.287), (3, 0.308),
    (4, 0.330), (5, 0.354), (6, 0.379), (7, 0.406),
    (8, 0.435), (9, 0.467), (10, 0.500), (11, 0.536),
    (12, 0.574), (13, 0.616), (14, 0.660), (15, 0.707),
    (16, 0.758), (17, 0.812), (18, 0.871), (19, 0.933),
    (20, 1.000), (21, 1.072), (22, 1.149), (23, 1.231),
    (24, 1.320), (25, 1.414), (26, 1.516), (27, 1.625),
    (28, 1.741), (29, 1.866), (30, 2.000), (31, 2.144),
    (32, 2.297), (33, 2.462), (34, 2.639), (35, 2.828),
    (36, 3.031), (37, 3.249), (38, 3.482), (39, 3.732),
    (40, 4.000), (41, 4.287), (42, 4.595), (43, 4.925),
    (44, 5.278), (45, 5.657), (46, 6.063), (47, 6.498),
    (48, 6.964), (49, 7.464), (50, 8.000), (51, 8.574),
    (52, 9.190), (53, 9.849), (54, 10.56), (55, 11.31),
    (56, 12.13), (57, 13.00), (58, 13.93), (59, 14.93),
    (60, 16.00), (61, 17.15), (62, 18.38), (63, 19.70),
    (64, 21.11), (65, 22.63), (66, 24.25), (67, 25.99),
    (68, 27.86), (69, 29.86), (70, 32.00), (71, 34.30),
    (72, 36.76), (73, 39.40), (74, 42.22), (75, 45.25),
    (76, 48.50), (77, 51.98), (78, 55.72), (79, 59.71),
    (80, 64.00), (81, 68.59), (82, 73.52), (83, 78.79),
    (84, 84.45), (85, 90.51), (86, 97.01), (87, 104.0),
    (88, 111.4), (89, 119.4), (90, 128.0), (91, 137.2),
    (92, 147.0), (93, 157.6), (94, 168.9), (95, 181.0),
    (96, 194.0), (97, 207.9), (98, 222.9), (99, 238.9),
    (100, 256.0),
];

/// Coldest tabulated temperature.
pub const TCF_MIN_CELSIUS: i64 = -24;

/// Hottest tabulated temperature.
pub const TCF_MAX_CELSIUS: i64 = 100;

/// Exact table lookup for an integer Celsius temperature.
pub fn factor_at(celsius: i64) -> Option<f64> {
    TCF_TABLE
        .binary_search_by_key(&celsius, |&(t, _)| t)
        .ok()
        .map(|i| TCF_TABLE[i].1)
}
