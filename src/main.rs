use std::time::Instant;

use num_bigint::BigUint;

use threshold_elgamal::curve::SubgroupPoint;
use threshold_elgamal::decrypt::{combine, partial_decrypt, recover};
use threshold_elgamal::elgamal::encrypt_batch;
use threshold_elgamal::keygen::{combine_public_keys, generate_share, KeyShare};
use threshold_elgamal::scalar::Fr;
use threshold_elgamal::signature::{sign, verify};

/// End-to-end demo of the federated flow: N model owners establish an
/// additive joint key, one owner batch-encrypts its per-feature mean and
/// variance statistics, every owner partially decrypts, and the
/// aggregator combines and recovers the plaintexts. The on-chain
/// transport between those steps is out of scope; points would travel as
/// decimal coordinate strings.
fn main() {
    let parties = 3;
    let max_value = 100u64;
    let means = [52u64, 17, 88, 3];
    let variances = [9u64, 41, 77, 25];

    let t = Instant::now();
    let shares: Vec<KeyShare> = (0..parties).map(|_| generate_share()).collect();
    let joint = combine_public_keys(
        &shares.iter().map(|s| s.public.clone()).collect::<Vec<_>>(),
    );
    let keygen_ms = t.elapsed().as_secs_f64() * 1e3;

    let values: Vec<BigUint> = means
        .iter()
        .chain(variances.iter())
        .map(|&v| BigUint::from(v))
        .collect();

    let t = Instant::now();
    let (_r, ciphertexts) = encrypt_batch(&values, &joint);
    let encrypt_ms = t.elapsed().as_secs_f64() * 1e3;

    let t = Instant::now();
    let mut recovered = Vec::with_capacity(values.len());
    for ct in &ciphertexts {
        // in production each decryptor validates the wire points itself
        let random: SubgroupPoint = ct.random.clone().try_into().expect("random point invalid");
        let cipher: SubgroupPoint = ct.cipher.clone().try_into().expect("cipher point invalid");

        let contributions: Vec<_> = shares
            .iter()
            .map(|s| partial_decrypt(&random, &s.secret))
            .collect();

        let message_point = combine(&cipher, &contributions, parties).expect("missing parties");
        recovered.push(recover(&message_point, max_value).expect("value out of range"));
    }
    let decrypt_ms = t.elapsed().as_secs_f64() * 1e3;

    let (rec_means, rec_vars) = recovered.split_at(means.len());
    println!("means     : {:?} -> {:?}", means, rec_means);
    println!("variances : {:?} -> {:?}", variances, rec_vars);

    let t = Instant::now();
    let sk = Fr::from_decimal_str(
        "503727473305877844506873996931912511231165373045349997878819676436274883747",
    )
    .unwrap();
    let sig = sign(b"model submission", &sk);
    let ok = verify(&sig, b"model submission");
    let sig_ms = t.elapsed().as_secs_f64() * 1e3;

    println!(
        "RESULT,parties={},features={},sig_ok={},keygen_ms={:.3},encrypt_ms={:.3},decrypt_ms={:.3},sign_verify_ms={:.3}",
        parties,
        values.len(),
        ok,
        keygen_ms,
        encrypt_ms,
        decrypt_ms,
        sig_ms,
    );
}
