use rand::Rng;

const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const BASE36_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random lowercase-alphanumeric string, used as the API key tail.
pub fn random_token(len: usize) -> String {
    let mut rng = rand::thread_rng();
    sample(&mut rng, TOKEN_CHARSET, len)
}

/// License key in the `LUASYNC-XXXXXXXX-XXXXXX` format (base36 uppercase).
pub fn license_key() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "LUASYNC-{}-{}",
        sample(&mut rng, BASE36_UPPER, 8),
        sample(&mut rng, BASE36_UPPER, 6)
    )
}

fn sample(rng: &mut impl Rng, charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}
