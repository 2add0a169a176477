//! Raw hand score to normalized hand strength.

/// Hand strength returned for scores above every bucket threshold.
pub const STRENGTH_EXCEPTIONAL: f64 = 1.0;

/// Score buckets as `(inclusive upper bound, strength)`, scanned low to high.
///
/// The thresholds are tuned against the game's hand ranker and are kept as
/// literal constants.
pub const STRENGTH_BUCKETS: [(i32, f64); 7] = [
    (0, 0.1),  // Very weak
    (18, 0.2), // Weak
    (38, 0.4), // Below average
    (55, 0.6), // Average
    (70, 0.7), // Good
    (85, 0.8), // Strong
    (95, 0.9), // Very strong
];

/// Map a raw hand-evaluation score onto `[0.0, 1.0]`.
///
/// Total and monotonic: every score maps to a bucket, scores at or below 0
/// land in the weakest one and anything above the last threshold is 1.0.
///
/// # Examples
///
/// ```
/// use pokermon::ai::hand_strength::assess;
///
/// assert_eq!(assess(-10), 0.1);
/// assert_eq!(assess(50), 0.6);
/// assert_eq!(assess(100), 1.0);
/// ```
pub fn assess(raw_score: i32) -> f64 {
    STRENGTH_BUCKETS
        .iter()
        .find(|(threshold, _)| raw_score <= *threshold)
        .map_or(STRENGTH_EXCEPTIONAL, |&(_, strength)| strength)
}
