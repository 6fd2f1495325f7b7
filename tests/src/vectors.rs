//! Known-answer vectors
//!
//! Integers are big-endian hex. The signature vectors are the worked
//! examples of GOST R 34.10-2001 (on the 256-bit test curve) and
//! GOST R 34.10-2012 (on the 512-bit test curve). The key-agreement
//! references use the same private keys against second, fixed keys.

use gostcrypt_params::traditional::gost3410::CurveId;
use gostcrypt_sign::DigestSize;

/// A signing example: key, digest, nonce and the expected outputs
#[derive(Debug, Clone, Copy)]
pub struct SignatureVector {
    /// Curve parameter set
    pub curve: CurveId,
    /// Digest size of the key
    pub digest_size: DigestSize,
    /// Private key d
    pub d: &'static str,
    /// Public key x-coordinate
    pub qx: &'static str,
    /// Public key y-coordinate
    pub qy: &'static str,
    /// Digest integer e
    pub e: &'static str,
    /// Nonce k
    pub k: &'static str,
    /// Expected r
    pub r: &'static str,
    /// Expected s
    pub s: &'static str,
}

/// A VKO example between two fixed keys
#[derive(Debug, Clone, Copy)]
pub struct KekVector {
    /// Curve parameter set
    pub curve: CurveId,
    /// Digest size of both keys
    pub digest_size: DigestSize,
    /// Local private key
    pub d_local: &'static str,
    /// Peer private key
    pub d_peer: &'static str,
    /// Peer public key x-coordinate
    pub peer_x: &'static str,
    /// Peer public key y-coordinate
    pub peer_y: &'static str,
    /// User keying material
    pub ukm: &'static str,
    /// Expected key-encryption key
    pub kek: &'static str,
}

/// GOST R 34.10-2001 worked example
pub const SIGN_2001: SignatureVector = SignatureVector {
    curve: CurveId::GostR34102001Test,
    digest_size: DigestSize::Size256,
    d: "7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28",
    qx: "7f2b49e270db6d90d8595bec458b50c58585ba1d4e9b788f6689dbd8e56fd80b",
    qy: "26f1b489d6701dd185c8413a977b3cbbaf64d1c593d26627dffb101a87ff77da",
    e: "2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5",
    k: "77105c9b20bcd3122823c8cf6fcc7b956de33814e95b7fe64fed924594dceab3",
    r: "41aa28d2f1ab148280cd9ed56feda41974053554a42767b83ad043fd39dc0493",
    s: "01456c64ba4642a1653c235a98a60249bcd6d3f746b631df928014f6c5bf9c40",
};

/// GOST R 34.10-2012 512-bit worked example
pub const SIGN_2012_512: SignatureVector = SignatureVector {
    curve: CurveId::GostR34102012Test512,
    digest_size: DigestSize::Size512,
    d: "0ba6048aadae241ba40936d47756d7c93091a0e8514669700ee7508e508b102072e8123b2200a0563322dad2827e2714a2636b7bfd18aadfc62967821fa18dd4",
    qx: "115dc5bc96760c7b48598d8ab9e740d4c4a85a65be33c1815b5c320c854621dd5a515856d13314af69bc5b924c8b4ddff75c45415c1d9dd9dd33612cd530efe1",
    qy: "37c7c90cd40b0f5621dc3ac1b751cfa0e2634fa0503b3d52639f5d7fb72afd61ea199441d943ffe7f0c70a2759a3cdb84c114e1f9339fdf27f35eca93677beec",
    e: "3754f3cfacc9e0615c4f4a7c4d8dab531b09b6f9c170c533a71d147035b0c5917184ee536593f4414339976c647c5d5a407adedb1d560c4fc6777d2972075b8c",
    k: "0359e7f4b1410feacc570456c6801496946312120b39d019d455986e364f365886748ed7a44b3e794434006011842286212273a6d14cf70ea3af71bb1ae679f1",
    r: "2f86fa60a081091a23dd795e1e3c689ee512a3c82ee0dcc2643c78eea8fcacd35492558486b20f1c9ec197c90699850260c93bcbcd9c5c3317e19344e173ae36",
    s: "1081b394696ffe8e6585e7a9362d26b6325f56778aadbc081c0bfbe933d52ff5823ce288e8c4f362526080df7f70ce406a6eeb1f56919cb92a9853bde73e5b4a",
};

const PEER_2001_D: &str = "3bf5dd5e0d6a2a96cbe5f0d6b7e4cb79cc9b6a2c9a2b1d5e0f9d8c7b6a5f4e3d";
const PEER_2001_X: &str = "17607bba90563064d111f88547c4aafa04788ce5589107bb02e02602ec65f30a";
const PEER_2001_Y: &str = "51bc9a572fbae6843e48ea81892bf8a8327a50198152eec87b26e103f678ab78";

/// VKO on the 256-bit test curve with an all-zero UKM
pub const KEK_2001_ZERO_UKM: KekVector = KekVector {
    curve: CurveId::GostR34102001Test,
    digest_size: DigestSize::Size256,
    d_local: SIGN_2001.d,
    d_peer: PEER_2001_D,
    peer_x: PEER_2001_X,
    peer_y: PEER_2001_Y,
    ukm: "0000000000000000",
    kek: "d1656ca6d36e24aa9260c8c73500ef0244e8bb84268e689b41498129d0446684",
};

/// VKO on the 256-bit test curve
pub const KEK_2001: KekVector = KekVector {
    ukm: "33a252f825be7251",
    kek: "7a433bb7186c6a2900ad4d4060063b597b44d5d1cbe2eddceaf012d5aae4d1ce",
    ..KEK_2001_ZERO_UKM
};

/// VKO on the 512-bit test curve; coordinates are hashed at full width
pub const KEK_2012_512: KekVector = KekVector {
    curve: CurveId::GostR34102012Test512,
    digest_size: DigestSize::Size512,
    d_local: SIGN_2012_512.d,
    d_peer: "1f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a7988",
    peer_x: "41774e0014beb492a4ec142e9dbe6d0f28b82518d829b13fc99f0de273c9c7ec60b947302b8f6c8cc55860c4dd5be8dc24154e5c5eb8cfaefc8476635ffdb29b",
    peer_y: "18825646783cf22e8f760736e96ae0f4061618a18357bd94208c0d05d6786c50b7336db477f36244603d806cdbdc1d5ae52c584f038147b39b12ad562f82fb84",
    ukm: "33a252f825be7251",
    kek: "531127538ea4a425f4a85e496ab9d273fe490906ca2af32954a32a7c08bf4524",
};

/// Published VKO GOST R 34.10-2001 example on the 256-bit test curve
pub const KEK_2001_PUBLISHED: KekVector = KekVector {
    curve: CurveId::GostR34102001Test,
    digest_size: DigestSize::Size256,
    d_local: "28f90b15445ccc5587d01747f8b2369fc62d16f452a8f6685b34ab3de429f11d",
    d_peer: "73d49eac5711249390219d799dfd431adfd5eda05e88831e3f914f47c656935b",
    peer_x: "13f2c00c90449797779cde666eb840a500c78905d64b692ef1e6a2c4b7efd53d",
    peer_y: "463290a973f779b4e340941718529d3f9c27ade81679d994d3a4c8eb8a76ba81",
    ukm: "33a252f825be7251",
    kek: "ee4618a0dbb10cb31777b4b86a53d9e7ef6cb3e400101410f0c0f2af46c494a6",
};

/// The published example's private keys in raw (little-endian) form
pub const KEK_2001_PUBLISHED_RAW: (&str, &str) = (
    "1df129e43dab345b68f6a852f4162dc69f36b2f84717d08755cc5c44150bf928",
    "5b9356c6474f913f1e83885ea0edd5df1a43fd9d799d219093241157ac9ed473",
);

/// Decode big-endian hex into the little-endian wire order of width `len`
pub fn wire(hex_be: &str, len: usize) -> Vec<u8> {
    let bytes = hex::decode(hex_be).expect("valid hex");
    assert!(bytes.len() <= len, "value wider than {} bytes", len);
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_pads_and_reverses() {
        assert_eq!(wire("0102", 4), vec![0x02, 0x01, 0x00, 0x00]);
    }
}
