#![no_main]
use huffcode::huffman_coding;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<(u8, u16)>| {
    // Integer weights keep the input finite; duplicates are expected to be rejected.
    let symbols: Vec<u8> = data.iter().map(|&(s, _)| s).collect();
    let weights: Vec<f64> = data.iter().map(|&(_, w)| f64::from(w)).collect();

    let mut seen = [false; 256];
    let has_duplicate = symbols.iter().any(|&s| std::mem::replace(&mut seen[s as usize], true));

    match huffman_coding(&symbols, &weights) {
        Ok(codes) => {
            assert!(!has_duplicate);
            assert_eq!(codes.len(), symbols.len());
            assert!(codes.is_prefix_free());
            assert!(codes.iter().all(|(_, c)| !c.is_empty()));
        }
        Err(_) => assert!(data.is_empty() || has_duplicate),
    }
});
