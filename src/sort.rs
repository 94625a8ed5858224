//! Natural sorting of whole sequences
//!
//! Every function here computes one key per element and runs a stable sort
//! over element positions, so equal elements keep their input order in both
//! directions. Large inputs are keyed and sorted on the rayon pool.

use crate::config::SortConfig;
use crate::error::{NatsortError, NatsortResult};
use crate::key::{Mismatch, SortKey};
use crate::keygen::KeyGenerator;
use crate::ns::Ns;
use crate::value::{Sortable, Value};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Sort `seq` naturally.
///
/// ```
/// use natsort::{natsorted, Ns};
///
/// let sorted = natsorted(&["a9", "a10", "a2"], Ns::DEFAULT).unwrap();
/// assert_eq!(sorted, ["a2", "a9", "a10"]);
/// ```
pub fn natsorted<T>(seq: &[T], alg: Ns) -> NatsortResult<Vec<T>>
where
    T: Sortable + Clone + Sync,
{
    natsorted_by(seq, T::to_value, &SortConfig::new().with_alg(alg))
}

/// Sort `seq` by the natural order of `key_fn` applied to each element.
///
/// `key_fn` runs once per element, before key generation; it is not applied
/// again to the members of sequence values.
pub fn natsorted_by<T, F>(seq: &[T], key_fn: F, config: &SortConfig) -> NatsortResult<Vec<T>>
where
    T: Clone + Sync,
    F: for<'a> Fn(&'a T) -> Value<'a> + Sync,
{
    let order = index_natsorted_by(seq, key_fn, config)?;
    Ok(order.into_iter().map(|i| seq[i].clone()).collect())
}

/// Positions of the elements of `seq` in natural order.
pub fn index_natsorted<T>(seq: &[T], alg: Ns) -> NatsortResult<Vec<usize>>
where
    T: Sortable + Sync,
{
    index_natsorted_by(seq, T::to_value, &SortConfig::new().with_alg(alg))
}

/// Positions of the elements of `seq`, ordered by `key_fn`.
pub fn index_natsorted_by<T, F>(seq: &[T], key_fn: F, config: &SortConfig) -> NatsortResult<Vec<usize>>
where
    T: Sync,
    F: for<'a> Fn(&'a T) -> Value<'a> + Sync,
{
    let generator = KeyGenerator::from_config(config)?;

    if !config.use_parallel(seq.len()) {
        return sort_positions(seq, &key_fn, &generator, config, false);
    }

    tracing::trace!(
        len = seq.len(),
        threads = config.effective_thread_count(),
        "sorting on the rayon pool"
    );
    match config.parallel_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| NatsortError::thread_pool_error(&e.to_string()))?;
            pool.install(|| sort_positions(seq, &key_fn, &generator, config, true))
        }
        None => sort_positions(seq, &key_fn, &generator, config, true),
    }
}

fn sort_positions<T, F>(
    seq: &[T],
    key_fn: &F,
    generator: &KeyGenerator,
    config: &SortConfig,
    parallel: bool,
) -> NatsortResult<Vec<usize>>
where
    T: Sync,
    F: for<'a> Fn(&'a T) -> Value<'a> + Sync,
{
    // The locale is read once for the whole sequence.
    let pipeline = generator.pipeline()?;
    let mut order: Vec<usize> = (0..seq.len()).collect();

    if config.alg.contains(Ns::PRESORT) {
        let shown: Vec<String> = if parallel {
            seq.par_iter().map(|item| key_fn(item).to_string()).collect()
        } else {
            seq.iter().map(|item| key_fn(item).to_string()).collect()
        };
        stable_sort(&mut order, parallel, |a, b| {
            directed(shown[a].cmp(&shown[b]), config.reverse)
        });
    }

    let keys: Vec<SortKey> = if parallel {
        seq.par_iter()
            .map(|item| generator.key_with(&key_fn(item), &pipeline))
            .collect::<NatsortResult<_>>()?
    } else {
        seq.iter()
            .map(|item| generator.key_with(&key_fn(item), &pipeline))
            .collect::<NatsortResult<_>>()?
    };

    // The lenient order is total, so the sort always completes; a type
    // mismatch seen on the way is reported afterwards.
    let first_mismatch: Mutex<Mismatch> = Mutex::new(None);
    stable_sort(&mut order, parallel, |a, b| {
        let mut mismatch = None;
        let ordering = keys[a].cmp_lenient(&keys[b], &mut mismatch);
        if mismatch.is_some() {
            let mut slot = first_mismatch.lock();
            if slot.is_none() {
                *slot = mismatch;
            }
        }
        directed(ordering, config.reverse)
    });

    if let Some((left, right)) = first_mismatch.into_inner() {
        return Err(NatsortError::incomparable(left, right));
    }
    Ok(order)
}

fn directed(ordering: Ordering, reverse: bool) -> Ordering {
    if reverse {
        ordering.reverse()
    } else {
        ordering
    }
}

fn stable_sort<C>(order: &mut [usize], parallel: bool, compare: C)
where
    C: Fn(usize, usize) -> Ordering + Sync,
{
    if parallel {
        order.par_sort_by(|&a, &b| compare(a, b));
    } else {
        order.sort_by(|&a, &b| compare(a, b));
    }
}

/// Reorder `seq` by positions such as those from [`index_natsorted`].
pub fn order_by_index<T: Clone>(seq: &[T], index: &[usize]) -> NatsortResult<Vec<T>> {
    order_by_index_iter(seq, index)
        .map(|item| item.cloned())
        .collect()
}

/// Lazy form of [`order_by_index`].
pub fn order_by_index_iter<'a, T>(
    seq: &'a [T],
    index: &'a [usize],
) -> impl Iterator<Item = NatsortResult<&'a T>> + 'a {
    index.iter().map(move |&i| {
        seq.get(i)
            .ok_or_else(|| NatsortError::index_out_of_range(i, seq.len()))
    })
}

/// [`natsorted`] with locale-aware collation and number formatting.
pub fn humansorted<T>(seq: &[T], alg: Ns) -> NatsortResult<Vec<T>>
where
    T: Sortable + Clone + Sync,
{
    natsorted(seq, alg | Ns::LOCALE)
}

pub fn index_humansorted<T>(seq: &[T], alg: Ns) -> NatsortResult<Vec<usize>>
where
    T: Sortable + Sync,
{
    index_natsorted(seq, alg | Ns::LOCALE)
}

/// [`natsorted`] reading signed floating point numbers.
pub fn realsorted<T>(seq: &[T], alg: Ns) -> NatsortResult<Vec<T>>
where
    T: Sortable + Clone + Sync,
{
    natsorted(seq, alg | Ns::REAL)
}

pub fn index_realsorted<T>(seq: &[T], alg: Ns) -> NatsortResult<Vec<usize>>
where
    T: Sortable + Sync,
{
    index_natsorted(seq, alg | Ns::REAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FixedLocale;
    use crate::value::{as_utf8, Bytes};
    use std::sync::Arc;

    fn fixed(alg: Ns) -> SortConfig {
        SortConfig::new()
            .with_alg(alg)
            .with_locale(Arc::new(FixedLocale::en_us()))
    }

    #[test]
    fn test_basic_natural_order() {
        let sorted = natsorted(&["a9", "a10", "a2"], Ns::DEFAULT).expect("Failed to sort");
        assert_eq!(sorted, ["a2", "a9", "a10"]);
    }

    #[test]
    fn test_sign_handling() {
        let data = ["a-5", "a7", "a+2"];
        assert_eq!(
            natsorted(&data, Ns::UNSIGNED).expect("Failed to sort"),
            ["a7", "a+2", "a-5"]
        );
        assert_eq!(
            natsorted(&data, Ns::SIGNED).expect("Failed to sort"),
            ["a-5", "a+2", "a7"]
        );
    }

    #[test]
    fn test_reverse_keeps_ties_in_input_order() {
        let data = ["a1", "a01", "b", "a001"];
        let config = SortConfig::new().with_reverse(true);
        let sorted = natsorted_by(&data, |s| s.to_value(), &config).expect("Failed to sort");
        assert_eq!(sorted, ["b", "a1", "a01", "a001"]);
    }

    #[test]
    fn test_key_function() {
        let data = [("x", 10), ("y", 2), ("z", 33)];
        let sorted = natsorted_by(&data, |pair| Value::Int(pair.1.into()), &SortConfig::new())
            .expect("Failed to sort");
        assert_eq!(sorted, [("y", 2), ("x", 10), ("z", 33)]);
    }

    #[test]
    fn test_index_matches_values() {
        let data = ["version-1.10", "version-1.9", "version-1.11", "version-2"];
        let index = index_natsorted(&data, Ns::DEFAULT).expect("Failed to sort");
        let sorted = natsorted(&data, Ns::DEFAULT).expect("Failed to sort");
        assert_eq!(order_by_index(&data, &index).expect("Failed to reorder"), sorted);
    }

    #[test]
    fn test_order_by_index_bounds() {
        let data = ["a", "b"];
        let err = order_by_index(&data, &[1, 2]).expect_err("index 2 is out of range");
        assert!(matches!(err, NatsortError::IndexOutOfRange { index: 2, len: 2 }));
        let lazy: Vec<&&str> = order_by_index_iter(&data, &[1, 0])
            .collect::<NatsortResult<_>>()
            .expect("Failed to reorder");
        assert_eq!(lazy, [&"b", &"a"]);
    }

    #[test]
    fn test_bytes_and_str_do_not_mix() {
        let data = [Value::from("ä"), Value::from(&b"b"[..])];
        let err = natsorted(&data, Ns::DEFAULT).expect_err("bytes and str must not compare");
        assert!(matches!(err, NatsortError::IncomparableTypes { .. }));

        let sorted = natsorted_by(&data, as_utf8, &SortConfig::new()).expect("Failed to sort");
        assert_eq!(sorted, [Value::from("ä"), Value::from(&b"b"[..])]);
    }

    #[test]
    fn test_bytes_sort_among_themselves() {
        let data = [Bytes(b"b10"), Bytes(b"b9")];
        // Bytes are not split into numbers
        assert_eq!(
            natsorted(&data, Ns::DEFAULT).expect("Failed to sort"),
            [Bytes(b"b10"), Bytes(b"b9")]
        );
    }

    #[test]
    fn test_path_mode_folders() {
        let data = ["/Folder (10)/", "/Folder/", "/Folder (1)/"];
        assert_eq!(
            natsorted(&data, Ns::PATH).expect("Failed to sort"),
            ["/Folder/", "/Folder (1)/", "/Folder (10)/"]
        );
        assert_eq!(
            natsorted(&data, Ns::DEFAULT).expect("Failed to sort"),
            ["/Folder (1)/", "/Folder (10)/", "/Folder/"]
        );
    }

    #[test]
    fn test_presort_makes_ties_deterministic() {
        let a = ["a1.4500", "a1", "a01", "a1.45"];
        let b = ["a1.45", "a01", "a1.4500", "a1"];
        let config = SortConfig::new().with_alg(Ns::FLOAT | Ns::PRESORT);
        let from_a = natsorted_by(&a, |s| s.to_value(), &config).expect("Failed to sort");
        let from_b = natsorted_by(&b, |s| s.to_value(), &config).expect("Failed to sort");
        assert_eq!(from_a, from_b);
        assert_eq!(from_a, ["a01", "a1", "a1.45", "a1.4500"]);

        let plain = SortConfig::new().with_alg(Ns::FLOAT);
        let from_a = natsorted_by(&a, |s| s.to_value(), &plain).expect("Failed to sort");
        let from_b = natsorted_by(&b, |s| s.to_value(), &plain).expect("Failed to sort");
        assert_ne!(from_a, from_b);
    }

    #[test]
    fn test_numbers_and_missing_values() {
        let data = [Some(3.0), None, Some(f64::NAN), Some(-1.0)];
        let sorted = index_natsorted(&data, Ns::DEFAULT).expect("Failed to sort");
        assert_eq!(sorted, [1, 2, 3, 0]);
        let sorted = index_natsorted(&data, Ns::NANLAST).expect("Failed to sort");
        assert_eq!(sorted, [3, 0, 1, 2]);
    }

    #[test]
    fn test_real_and_human_aliases() {
        let data = ["x-1.5", "x-2", "x1e1", "x3"];
        assert_eq!(
            realsorted(&data, Ns::DEFAULT).expect("Failed to sort"),
            ["x-2", "x-1.5", "x3", "x1e1"]
        );
        assert_eq!(
            index_realsorted(&data, Ns::DEFAULT).expect("Failed to sort"),
            [1, 0, 3, 2]
        );
        let config = fixed(Ns::LOCALE);
        let sorted = natsorted_by(&["b", "a10", "a9"], |s| s.to_value(), &config)
            .expect("Failed to sort");
        assert_eq!(sorted, ["a9", "a10", "b"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<String> = (0..500).map(|i| format!("item{}", (i * 7919) % 500)).collect();
        let sequential = natsorted(&data, Ns::DEFAULT).expect("Failed to sort");
        let config = SortConfig::new().with_parallel_threads(Some(4));
        let parallel = natsorted_by(&data, |s| s.to_value(), &config).expect("Failed to sort");
        assert_eq!(sequential, parallel);
        assert_eq!(parallel[0], "item0");
        assert_eq!(parallel[499], "item499");
    }

    #[test]
    fn test_opaque_values_fail() {
        let data = [Value::from("a"), Value::opaque("Widget")];
        let err = natsorted(&data, Ns::DEFAULT).expect_err("opaque values have no key");
        assert_eq!(err.to_string(), "'Widget' object is not iterable");
    }
}
