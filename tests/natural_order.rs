use natsort::{
    as_utf8, index_natsorted, natsort_keygen, natsorted, natsorted_by, order_by_index, Bytes,
    FixedLocale, KeyGenerator, NatsortError, Ns, SortConfig, Sortable, Value,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

fn shuffled<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = items.to_vec();
    out.shuffle(&mut rng);
    out
}

#[test]
fn test_embedded_numbers() {
    let sorted = natsorted(&["a9", "a10", "a2"], Ns::DEFAULT).expect("Failed to sort");
    assert_eq!(sorted, ["a2", "a9", "a10"]);

    let versions = ["1.10.1", "1.9.3", "1.10.0", "1.2"];
    assert_eq!(
        natsorted(&versions, Ns::VERSION).expect("Failed to sort"),
        ["1.2", "1.9.3", "1.10.0", "1.10.1"]
    );
}

#[test]
fn test_digits_outside_numeral_table_sort_as_text() {
    let sorted = natsorted(&["x\u{11F51}", "x5"], Ns::DEFAULT).expect("Failed to sort");
    assert_eq!(sorted, ["x5", "x\u{11F51}"]);
}

#[test]
fn test_signed_versus_unsigned() {
    let data = ["a5", "a-3", "a1"];
    assert_eq!(
        natsorted(&data, Ns::SIGNED).expect("Failed to sort"),
        ["a-3", "a1", "a5"]
    );
    assert_eq!(
        natsorted(&data, Ns::DEFAULT).expect("Failed to sort"),
        ["a1", "a5", "a-3"]
    );
}

#[test]
fn test_float_exponents() {
    let data = ["x1e3", "x2.5", "x10"];
    assert_eq!(
        natsorted(&data, Ns::FLOAT).expect("Failed to sort"),
        ["x2.5", "x10", "x1e3"]
    );
    assert_eq!(
        natsorted(&data, Ns::FLOAT | Ns::NOEXP).expect("Failed to sort"),
        ["x1e3", "x2.5", "x10"]
    );
}

#[test]
fn test_path_ordering() {
    let paths: Vec<PathBuf> = [
        "/p/Folder (10)/file.tar.gz",
        "/p/Folder/file.tar.gz",
        "/p/Folder (1)/file.tar.gz",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    let sorted = natsorted(&paths, Ns::PATH).expect("Failed to sort");
    assert_eq!(
        sorted,
        [
            PathBuf::from("/p/Folder/file.tar.gz"),
            PathBuf::from("/p/Folder (1)/file.tar.gz"),
            PathBuf::from("/p/Folder (10)/file.tar.gz"),
        ]
    );

    let files = ["image10.png", "image2.png", "image1.jpeg"];
    assert_eq!(
        natsorted(&files, Ns::PATH).expect("Failed to sort"),
        ["image1.jpeg", "image2.png", "image10.png"]
    );
}

#[test]
fn test_bytes_and_str_mix_needs_decoding() {
    let data = [Value::from("a2"), Value::from(&b"a10"[..]), Value::from("a1")];
    let err = natsorted(&data, Ns::DEFAULT).expect_err("bytes and str must not compare");
    assert!(matches!(err, NatsortError::IncomparableTypes { .. }));

    let sorted = natsorted_by(&data, as_utf8, &SortConfig::new()).expect("Failed to sort");
    assert_eq!(
        sorted,
        [Value::from("a1"), Value::from("a2"), Value::from(&b"a10"[..])]
    );
}

#[test]
fn test_bytes_only_sort_bytewise() {
    let data = [Bytes(b"b"), Bytes(b"a2"), Bytes(b"a10")];
    assert_eq!(
        natsorted(&data, Ns::DEFAULT).expect("Failed to sort"),
        [Bytes(b"a10"), Bytes(b"a2"), Bytes(b"b")]
    );
}

#[test]
fn test_presort_is_independent_of_input_order() {
    let data = ["a01", "a1", "a001", "a1.0", "b", "a2"];
    let config = SortConfig::new().with_alg(Ns::FLOAT | Ns::PRESORT);
    let expected = natsorted_by(&data, |s| s.to_value(), &config).expect("Failed to sort");
    for seed in 0..8 {
        let input = shuffled(&data, seed);
        let sorted = natsorted_by(&input, |s| s.to_value(), &config).expect("Failed to sort");
        assert_eq!(sorted, expected, "seed {seed}");
    }
}

#[test]
fn test_index_and_value_agree() {
    let data: Vec<String> = (0..200).map(|i| format!("file{}-v{}", i % 17, i % 5)).collect();
    for seed in 0..4 {
        let input = shuffled(&data, seed);
        let index = index_natsorted(&input, Ns::DEFAULT).expect("Failed to sort");
        let by_index = order_by_index(&input, &index).expect("Failed to reorder");
        let sorted = natsorted(&input, Ns::DEFAULT).expect("Failed to sort");
        assert_eq!(by_index, sorted);
    }
}

#[test]
fn test_reverse_is_stable() {
    let data = ["a1", "b2", "a01", "b02", "a001"];
    let config = SortConfig::new().with_reverse(true);
    let sorted = natsorted_by(&data, |s| s.to_value(), &config).expect("Failed to sort");
    assert_eq!(sorted, ["b2", "b02", "a1", "a01", "a001"]);
}

#[test]
fn test_mixed_numbers_and_text() {
    let data = [Value::Int(10), Value::from("a5"), Value::Float(2.5), Value::Missing];
    let sorted = natsorted(&data, Ns::DEFAULT).expect("Failed to sort");
    assert_eq!(
        sorted,
        [Value::Missing, Value::Float(2.5), Value::Int(10), Value::from("a5")]
    );
    let sorted = natsorted(&data, Ns::NUMAFTER | Ns::NANLAST).expect("Failed to sort");
    assert_eq!(
        sorted,
        [Value::from("a5"), Value::Float(2.5), Value::Int(10), Value::Missing]
    );
}

#[test]
fn test_generator_is_shareable() {
    let generator = Arc::new(
        KeyGenerator::with_locale(Ns::REAL, Arc::new(FixedLocale::en_us()))
            .expect("Failed to build key generator"),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let generator = Arc::clone(&generator);
            std::thread::spawn(move || {
                generator
                    .key(format!("x{}", -i).as_str())
                    .expect("Failed to generate key")
            })
        })
        .collect();
    let keys: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("Failed to join thread"))
        .collect();
    for pair in keys.windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

#[test]
fn test_keygen_matches_sort_order() {
    let generator = natsort_keygen(Ns::DEFAULT).expect("Failed to build key generator");
    let a = generator.key("chapter 9").expect("Failed to generate key");
    let b = generator.key("chapter 10").expect("Failed to generate key");
    assert!(a < b);
}

#[test]
fn test_parallel_sort_matches_sequential() {
    let data: Vec<String> = (0..10_000).map(|i| format!("row{}", (i * 7) % 10_000)).collect();
    let input = shuffled(&data, 42);
    let sequential = natsorted(&input, Ns::DEFAULT).expect("Failed to sort");
    let config = SortConfig::new().with_parallel_threads(Some(3));
    let parallel = natsorted_by(&input, |s| s.to_value(), &config).expect("Failed to sort");
    assert_eq!(sequential, parallel);
    assert_eq!(parallel.first().map(String::as_str), Some("row0"));
    assert_eq!(parallel.last().map(String::as_str), Some("row9999"));
}
