use crate::config::SortingPolicy;
use crate::domain::Category;

/// Bulky when the volume or the largest side reaches its threshold (inclusive).
pub fn is_bulky(policy: &SortingPolicy, width: f64, height: f64, length: f64) -> bool {
    let volume = width * height * length;
    let max_dimension = width.max(height).max(length);
    volume >= policy.bulky_volume || max_dimension >= policy.bulky_dimension
}

pub fn is_heavy(policy: &SortingPolicy, mass: f64) -> bool {
    mass >= policy.heavy_mass
}

/// Classify already-validated measurements with the default thresholds.
///
/// No bounds are re-checked here; out-of-range input is classified as-is.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Category {
    classify_with(&SortingPolicy::default(), width, height, length, mass)
}

pub fn classify_with(
    policy: &SortingPolicy,
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
) -> Category {
    let bulky = is_bulky(policy, width, height, length);
    let heavy = is_heavy(policy, mass);

    let category = match (bulky, heavy) {
        (false, false) => Category::Standard,
        (true, false) | (false, true) => Category::Special,
        (true, true) => Category::Rejected,
    };
    tracing::trace!(bulky, heavy, %category, "classified package");
    category
}
