//! Tests for the Pi-Sponge algorithm

use crate::*;

/// Bit-per-element round function, written straight from the register
/// equations, used to cross-check the packed implementation.
fn reference_advance(state: &mut [bool; STATE_BITS], rounds: u32) {
    let mut p: Vec<u8> = state[..P_BITS].iter().map(|&b| b as u8).collect();
    let mut q: Vec<u8> = state[P_BITS..].iter().map(|&b| b as u8).collect();

    for _ in 0..rounds {
        let pf = (p[0] & p[11]) ^ (p[0] & p[55]) ^ (p[11] & q[23]) ^ (q[23] & p[55]) ^ q[23] ^ p[55] ^ 1;
        let qf = (q[25] & p[48]) ^ (q[25] & q[41]) ^ (q[0] & p[48]) ^ (q[0] & q[41]) ^ q[25] ^ q[41];
        let lf = p[1] ^ q[1] ^ p[50];

        p.remove(0);
        p.push(pf ^ lf);
        q.remove(0);
        q.push(qf ^ lf);
    }

    for (i, bit) in p.iter().chain(q.iter()).enumerate() {
        state[i] = *bit == 1;
    }
}

/// Bit-sequence sponge, written straight from the absorption policy
fn reference_digest(input: &[u8]) -> [bool; DIGEST_BITS] {
    let message: Vec<bool> = input
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect();
    let k = message.len();
    let mut state = pi_seed();

    if k == 0 {
        reference_advance(&mut state, 324);
    } else {
        state[160] ^= message[0];
        reference_advance(&mut state, 324);
    }
    for bit in message.iter().take(k.saturating_sub(1)).skip(1) {
        state[160] ^= *bit;
        reference_advance(&mut state, 162);
    }
    if k > 1 {
        state[160] ^= message[k - 1];
        reference_advance(&mut state, 324);
    }

    let mut out = [false; DIGEST_BITS];
    for bit in out.iter_mut() {
        reference_advance(&mut state, 1);
        *bit = state[160];
    }
    out
}

/// Small deterministic generator for test states
fn xorshift_bits(seed: u64) -> [bool; STATE_BITS] {
    let mut x = seed | 1;
    let mut bits = [false; STATE_BITS];
    for bit in bits.iter_mut() {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        *bit = x & 1 == 1;
    }
    bits
}

fn flip_last_hex_char(hex: &str) -> String {
    let mut chars: Vec<char> = hex.chars().collect();
    let last = chars.last_mut().expect("non-empty hex");
    *last = if *last == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}

#[test]
fn test_seed_matches_pi_expansion() {
    let seed = pi_seed();
    assert_eq!(seed.len(), STATE_BITS);
    assert_eq!(
        &seed[..8],
        &[false, false, true, false, false, true, false, false]
    );

    // First 160 bits are the well-known hex expansion of π's fraction
    assert_eq!(to_hex(&seed[..160]), "243f6a8885a308d313198a2e03707344a4093822");
    assert!(!seed[160]);
    assert_eq!(to_hex(&seed), "0487ed5110b4611a62633145c06e0e68948127044");
}

#[test]
fn test_seed_is_constant() {
    assert_eq!(pi_seed(), PI_SEED);
    assert_eq!(State::seeded().to_bits(), PI_SEED);
    assert_eq!(State::default(), State::seeded());
}

#[test]
fn test_advance_zero_rounds_is_identity() {
    for seed in 1..20u64 {
        let bits = xorshift_bits(seed);
        let mut state = State::from_bits(&bits);
        advance(&mut state, 0);
        assert_eq!(state.to_bits(), bits);
    }

    let mut state = State::seeded();
    state.advance(0);
    assert_eq!(state, State::seeded());
}

#[test]
fn test_state_bit_round_trip() {
    let bits = xorshift_bits(0xDEADBEEF);
    let state = State::from_bits(&bits);
    assert_eq!(state.to_bits(), bits);
    for (i, &bit) in bits.iter().enumerate() {
        assert_eq!(state.bit(i), bit, "bit {i}");
    }
    assert_eq!(state.output_bit(), bits[INJECTION_INDEX]);
}

#[test]
fn test_inject_touches_only_last_bit() {
    let bits = xorshift_bits(42);
    let mut state = State::from_bits(&bits);
    state.inject(true);
    let after = state.to_bits();
    assert_eq!(&after[..INJECTION_INDEX], &bits[..INJECTION_INDEX]);
    assert_eq!(after[INJECTION_INDEX], !bits[INJECTION_INDEX]);

    state.inject(false);
    assert_eq!(state.to_bits(), after);
}

#[test]
fn test_packed_round_matches_reference() {
    for seed in 1..50u64 {
        let bits = xorshift_bits(seed);
        let rounds = (seed as u32 * 7) % 400;

        let mut packed = State::from_bits(&bits);
        packed.advance(rounds);

        let mut reference = bits;
        reference_advance(&mut reference, rounds);

        assert_eq!(packed.to_bits(), reference, "seed {seed}, {rounds} rounds");
    }
}

#[test]
fn test_single_round_shifts_registers() {
    let bits = xorshift_bits(7);
    let mut state = State::from_bits(&bits);
    state.advance(1);
    let after = state.to_bits();

    // P0 and Q0 fall off, everything else moves down one position
    assert_eq!(&after[..P_BITS - 1], &bits[1..P_BITS]);
    assert_eq!(&after[P_BITS..STATE_BITS - 1], &bits[P_BITS + 1..]);
}

#[test]
fn test_digest_length() {
    for len in [0usize, 1, 2, 3, 10_000] {
        let input = vec![0xABu8; len];
        let d = digest(&input);
        assert_eq!(d.as_bytes().len(), DIGEST_BYTES);
        assert_eq!(d.bits().len(), DIGEST_BITS);
        assert_eq!(d.to_binary_string().len(), DIGEST_BITS);
        assert_eq!(d.to_hex().len(), HEX_DIGITS);
    }
}

#[test]
fn test_digest_deterministic() {
    let input = b"test input data";
    assert_eq!(digest(input), digest(input));
    assert_ne!(digest(b"input 1"), digest(b"input 2"));
}

#[test]
fn test_digest_vectors() {
    let vectors: [(&[u8], &str); 7] = [
        (b"", "e50a9a3f562b83f9e1708292b618682ed44345df"),
        (b"a", "a52df62a110355ce0880828b36b9722e5e520c83"),
        (b"ab", "db54f61e43a702fc9184188beabc41ea54958217"),
        (b"abc", "9daf92bd082555795685fef394783d2ea1be6b59"),
        (&[0x00], "f06bb44c650aefc0cee2bdbc65d90fab025ebb6a"),
        (&[0x80], "7f4e29205341cf619131b87e89a1ac1049ca2d31"),
        (b"hello world", "5380429c21cc9f72f27ddc304a94bae4148c611d"),
    ];
    for (input, expected) in vectors {
        assert_eq!(digest(input).to_hex(), expected, "input {:?}", input);
    }
}

#[test]
fn test_digest_matches_reference_sponge() {
    let inputs: [&[u8]; 5] = [b"", b"x", b"xy", b"abc", &[0xFF, 0x00, 0x5A, 0xA5]];
    for input in inputs {
        let expected = reference_digest(input);
        assert_eq!(digest(input).bits(), expected, "input {:?}", input);
    }
}

#[test]
fn test_streaming_matches_one_shot() {
    let input: Vec<u8> = (0..300u32).map(|i| (i * 31 + 7) as u8).collect();
    let expected = digest(&input);

    for chunk in [1usize, 2, 3, 7, 64, 299, 300] {
        let mut hasher = Hasher::new();
        for piece in input.chunks(chunk) {
            hasher.update(piece);
        }
        assert_eq!(hasher.finalize(), expected, "chunk size {chunk}");
    }

    // Empty updates are no-ops
    let mut hasher = Hasher::new();
    hasher.update(&[]).update(&input).update(&[]);
    assert_eq!(hasher.finalize(), expected);
}

#[test]
fn test_hasher_bit_count_and_reset() {
    let mut hasher = Hasher::new();
    assert_eq!(hasher.bits_absorbed(), 0);
    hasher.update(b"abc");
    assert_eq!(hasher.bits_absorbed(), 24);

    hasher.reset();
    assert_eq!(hasher.bits_absorbed(), 0);
    assert_eq!(hasher.finalize(), digest(b""));
}

#[test]
fn test_hasher_clone_forks_state() {
    let mut hasher = Hasher::new();
    hasher.update(b"ab");
    let fork = hasher.clone();
    hasher.update(b"c");
    assert_eq!(fork.finalize(), digest(b"ab"));
    assert_eq!(hasher.finalize(), digest(b"abc"));
}

#[test]
fn test_avalanche_effect() {
    let input1 = b"test input";
    let mut input2 = input1.to_vec();
    input2[0] ^= 1;

    let a = digest(input1);
    let b = digest(&input2);
    let diff_bits: u32 = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum();

    assert!(diff_bits > 0, "single-bit change must alter the digest");
}

#[test]
fn test_digest_bits_round_trip() {
    let d = digest(b"abc");
    assert_eq!(Digest::from_bits(&d.bits()), d);
    assert_eq!(Digest::from_bytes(*d.as_bytes()), d);
    assert_eq!(bits_to_binary_string(&d.bits()), d.to_binary_string());
    assert_eq!(to_hex(&d.bits()), d.to_hex());
}

#[test]
fn test_digest_formatting() {
    let d = digest(b"abc");
    assert_eq!(format!("{d}"), "9daf92bd082555795685fef394783d2ea1be6b59");
    assert_eq!(format!("{d:x}"), "9daf92bd082555795685fef394783d2ea1be6b59");
    assert_eq!(format!("{d:#x}"), "0x9daf92bd082555795685fef394783d2ea1be6b59");
    assert!(d.to_binary_string().starts_with("10011101"));
}

#[test]
fn test_to_hex_left_pads() {
    assert_eq!(to_hex(&[true]), "1");
    assert_eq!(to_hex(&[true, false, true, false, true]), "15");
    assert_eq!(to_hex(&[true, true, true, true, false, false, false, false]), "f0");
    assert_eq!(to_hex(&[]), "");
}

#[test]
fn test_hex_to_bits160() {
    let d = digest(b"abc");
    let hex = d.to_hex();

    assert_eq!(hex_to_bits160(&hex).unwrap(), d.bits());
    assert_eq!(hex_to_bits160(&format!("0x{hex}")).unwrap(), d.bits());
    assert_eq!(hex_to_bits160(&format!("0X{}", hex.to_uppercase())).unwrap(), d.bits());

    // Short input is left-padded
    let one = hex_to_bits160("1").unwrap();
    assert!(one[DIGEST_BITS - 1]);
    assert_eq!(one.iter().filter(|&&b| b).count(), 1);

    // Long input keeps the first 160 bits
    assert_eq!(hex_to_bits160(&format!("{hex}ff")).unwrap(), d.bits());

    assert_eq!(hex_to_bits160("").unwrap(), [false; DIGEST_BITS]);
    assert!(matches!(hex_to_bits160("xyz"), Err(CodecError::InvalidHex(_))));
}

#[test]
fn test_hex_round_trip_is_left_padded_canonical_form() {
    for seed in 1..10u64 {
        let state_bits = xorshift_bits(seed);
        let bits: [bool; DIGEST_BITS] = state_bits[..DIGEST_BITS].try_into().unwrap();
        assert_eq!(hex_to_bits160(&to_hex(&bits)).unwrap(), bits);
    }

    // Shorter sequences come back left-padded to 160 bits
    let short = [true, false, true];
    let back = hex_to_bits160(&to_hex(&short)).unwrap();
    assert_eq!(&back[DIGEST_BITS - 3..], &short);
    assert!(back[..DIGEST_BITS - 3].iter().all(|&b| !b));
}

#[test]
fn test_classify() {
    assert_eq!(classify("0101"), Some(CandidateFormat::Binary));
    assert_eq!(classify("0x0101"), Some(CandidateFormat::Hex));
    assert_eq!(classify("DEADbeef"), Some(CandidateFormat::Hex));
    assert_eq!(classify("0XAB"), Some(CandidateFormat::Hex));
    assert_eq!(classify(""), None);
    assert_eq!(classify("0x"), None);
    assert_eq!(classify("not-a-hash!!"), None);
    assert_eq!(classify("12 34"), None);
}

#[test]
fn test_verify_hex_and_binary() {
    let inputs: [&[u8]; 4] = [b"", b"a", b"abc", b"some longer input"];
    for input in inputs {
        let d = digest(input);
        assert_eq!(verify(input, &d.to_hex()), Verification::Match);
        assert_eq!(verify(input, &format!("0x{}", d.to_hex())), Verification::Match);
        assert_eq!(verify(input, &d.to_hex().to_uppercase()), Verification::Match);
        assert_eq!(verify(input, &d.to_binary_string()), Verification::Match);
    }
}

#[test]
fn test_verify_mismatch_on_any_bit_flip() {
    let input = b"flip me";
    let bits = digest(input).bits();
    for i in [0usize, 1, 79, 80, 158, 159] {
        let mut flipped = bits;
        flipped[i] = !flipped[i];
        let candidate = Digest::from_bits(&flipped);
        assert_eq!(verify(input, &candidate.to_hex()), Verification::Mismatch);
        assert_eq!(
            verify(input, &candidate.to_binary_string()),
            Verification::Mismatch
        );
    }
}

#[test]
fn test_verify_short_binary_is_left_padded() {
    // A digest whose leading bits are zero can be written without them
    let d = Digest::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]);
    assert_eq!(verify_digest(&d, "101"), Verification::Match);
    assert_eq!(verify_digest(&d, "0x5"), Verification::Match);
    assert_eq!(verify_digest(&d, "100"), Verification::Mismatch);

    // Too long to ever match
    let long = format!("0{}", d.to_binary_string());
    assert_eq!(verify_digest(&d, &long), Verification::Mismatch);
}

#[test]
fn test_verify_invalid_format() {
    assert_eq!(verify(b"abc", "not-a-hash!!"), Verification::InvalidFormat);
    assert_eq!(verify(b"abc", ""), Verification::InvalidFormat);
    assert_eq!(verify(b"abc", "0x"), Verification::InvalidFormat);
    assert_eq!(verify(b"abc", "0xg1"), Verification::InvalidFormat);
    assert!(!verify(b"abc", "zz").is_match());
}

#[test]
fn test_abc_end_to_end() {
    let input = "abc".as_bytes();
    let d = digest(input);
    let hex = to_hex(&d.bits());

    assert_eq!(hex.len(), HEX_DIGITS);
    assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_eq!(verify(input, &hex), Verification::Match);
    assert_eq!(verify(input, &flip_last_hex_char(&hex)), Verification::Mismatch);
}

#[cfg(feature = "parallel")]
#[test]
fn test_digest_many_preserves_order() {
    let inputs: Vec<Vec<u8>> = (0..16u8).map(|i| vec![i; i as usize]).collect();
    let results = digest_many(&inputs);
    assert_eq!(results.len(), inputs.len());
    for (input, result) in inputs.iter().zip(&results) {
        assert_eq!(*result, digest(input));
    }
}

#[cfg(feature = "std")]
#[test]
fn test_ffi_digest_and_verify() {
    use crate::ffi::*;
    use std::ffi::CString;

    let input = b"abc";
    let mut out = [0u8; DIGEST_BYTES];
    pisponge_digest(input.as_ptr(), input.len(), out.as_mut_ptr());
    assert_eq!(Digest::from_bytes(out), digest(input));

    let handle = pisponge_hasher_new();
    pisponge_hasher_update(handle, input.as_ptr(), 1);
    pisponge_hasher_update(handle, input[1..].as_ptr(), 2);
    let mut streamed = [0u8; DIGEST_BYTES];
    pisponge_hasher_finalize(handle, streamed.as_mut_ptr());
    assert_eq!(streamed, out);

    let good = CString::new(digest(input).to_hex()).unwrap();
    let bad = CString::new("not-a-hash!!").unwrap();
    assert_eq!(pisponge_verify(input.as_ptr(), input.len(), good.as_ptr()), 0);
    assert_eq!(pisponge_verify(b"abd".as_ptr(), 3, good.as_ptr()), 1);
    assert_eq!(pisponge_verify(input.as_ptr(), input.len(), bad.as_ptr()), 2);
    assert_eq!(pisponge_verify(input.as_ptr(), input.len(), std::ptr::null()), -1);

    // Empty input may be passed as a null pointer
    let mut empty = [0u8; DIGEST_BYTES];
    pisponge_digest(std::ptr::null(), 0, empty.as_mut_ptr());
    assert_eq!(Digest::from_bytes(empty), digest(b""));
}
