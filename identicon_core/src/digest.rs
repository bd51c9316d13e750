use md5::{Digest as _, Md5};

pub const DIGEST_LENGTH: usize = 16;

pub type Digest = [u8; DIGEST_LENGTH];

pub fn hash_input(input: &[u8]) -> Digest {
    Md5::digest(input).into()
}
