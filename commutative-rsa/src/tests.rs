//! Cross-module properties: layered encryption and commutativity.

use crate::bigint::{from_little_endian, to_little_endian};
use crate::cipher::{decrypt, encrypt};
use crate::keygen::generate;
use crate::primality::gen_prime;

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// A card encrypted by party A and then by party B peels off in
/// last-on-first-off order, whichever party encrypted first.
///
/// Layering is only well defined when the inner ciphertext is below the
/// outer modulus; trials where the random moduli violate that are
/// skipped.
#[test]
fn layered_encryption_peels_in_reverse_order() {
    let mut rng = ChaChaRng::seed_from_u64(21);
    let message = [12, 2, 1, 1]; // queen of hearts, ace of spades

    let mut exercised = 0;
    for _ in 0..20 {
        let a = generate(&mut rng).unwrap();
        let b = generate(&mut rng).unwrap();

        // A's layer first, B's on top
        let inner = encrypt(&message, &a.modulus).unwrap();
        if from_little_endian(&inner) < b.modulus_int() {
            let outer = encrypt(&inner, &b.modulus).unwrap();
            let peeled = decrypt(&outer, &b.modulus, &b.exponent).unwrap();
            let plain = decrypt(&peeled, &a.modulus, &a.exponent).unwrap();
            assert_eq!(plain, message);
            exercised += 1;
        }

        // B's layer first, A's on top
        let inner = encrypt(&message, &b.modulus).unwrap();
        if from_little_endian(&inner) < a.modulus_int() {
            let outer = encrypt(&inner, &a.modulus).unwrap();
            let peeled = decrypt(&outer, &a.modulus, &a.exponent).unwrap();
            let plain = decrypt(&peeled, &b.modulus, &b.exponent).unwrap();
            assert_eq!(plain, message);
            exercised += 1;
        }
    }
    assert!(exercised > 0, "no trial met the layering precondition");
}

/// Over a shared modulus the scheme commutes outright: exponentiations
/// apply and peel in any order. `decrypt` doubles as the generic
/// modular-exponentiation step here since every layer is one.
#[test]
fn shared_modulus_layers_commute() {
    let mut rng = ChaChaRng::seed_from_u64(22);

    let p = gen_prime(&mut rng, 128);
    let q = loop {
        let q = gen_prime(&mut rng, 128);
        if q != p {
            break q;
        }
    };
    let n = &p * &q;
    let phi = (&p - 1u32) * (&q - 1u32);

    // two independent exponent pairs over the same modulus
    let mut pairs = exponent_pairs(&phi, &[65537, 257, 17, 5, 3, 65539]);
    let (e2, d2) = pairs.pop().unwrap();
    let (e1, d1) = pairs.pop().unwrap();

    let n_bytes = to_little_endian(&n);
    let message = [13, 4, 2, 3];

    let ab = decrypt(&decrypt(&message, &n_bytes, &e1).unwrap(), &n_bytes, &e2).unwrap();
    let ba = decrypt(&decrypt(&message, &n_bytes, &e2).unwrap(), &n_bytes, &e1).unwrap();
    assert_eq!(ab, ba);

    // peel in the same order the layers were applied: only possible
    // because the exponentiations commute
    let peeled = decrypt(&decrypt(&ab, &n_bytes, &d1).unwrap(), &n_bytes, &d2).unwrap();
    assert_eq!(peeled, message);

    let peeled = decrypt(&decrypt(&ab, &n_bytes, &d2).unwrap(), &n_bytes, &d1).unwrap();
    assert_eq!(peeled, message);
}

/// First two candidate exponents invertible mod phi, little-endian
/// encoded as (public, private) pairs.
fn exponent_pairs(phi: &BigUint, candidates: &[u32]) -> Vec<([u8; 32], [u8; 32])> {
    let pairs: Vec<_> = candidates
        .iter()
        .filter_map(|&public| {
            let e = BigUint::from(public);
            e.modinv(phi)
                .map(|d| (to_little_endian(&e), to_little_endian(&d)))
        })
        .take(2)
        .collect();
    assert_eq!(pairs.len(), 2, "no two invertible exponents among candidates");
    pairs
}
