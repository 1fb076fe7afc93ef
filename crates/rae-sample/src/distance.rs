use std::collections::BTreeMap;

/// Euclidean distance over the domains both profiles carry.
///
/// Returns `None` when the profiles share no scored domain.
pub fn profile_distance(
    a: &BTreeMap<String, f64>,
    b: &BTreeMap<String, f64>,
    domain_keys: &[String],
) -> Option<f64> {
    let mut shared = 0usize;
    let mut sum = 0.0;
    for key in domain_keys {
        if let (Some(x), Some(y)) = (a.get(key), b.get(key)) {
            shared += 1;
            sum += (x - y).powi(2);
        }
    }
    (shared > 0).then(|| sum.sqrt())
}

/// Per-domain mean over the profiles that carry each domain.
///
/// Domains no profile carries are left out of the result.
pub fn mean_profile<'a, I>(profiles: I, domain_keys: &[String]) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a BTreeMap<String, f64>>,
{
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for profile in profiles {
        for key in domain_keys {
            if let Some(value) = profile.get(key) {
                let entry = sums.entry(key.as_str()).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key.to_string(), sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    #[test]
    fn distance_ignores_unshared_domains() {
        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let left = profile(&[("a", 1.0), ("b", 1.0)]);
        let right = profile(&[("a", 4.0), ("c", 0.0)]);
        assert_eq!(profile_distance(&left, &right, &keys), Some(3.0));
        let disjoint = profile(&[("c", 2.0)]);
        assert_eq!(profile_distance(&left, &disjoint, &keys), None);
    }

    #[test]
    fn mean_skips_missing_values() {
        let keys = vec!["a".to_string(), "b".to_string(), "z".to_string()];
        let profiles = [profile(&[("a", 1.0), ("b", 4.0)]), profile(&[("a", 3.0)])];
        let mean = mean_profile(profiles.iter(), &keys);
        assert_eq!(mean, profile(&[("a", 2.0), ("b", 4.0)]));
    }
}
