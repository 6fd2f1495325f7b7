//! Constants for GOST R 34.10-2001 / 34.10-2012 digital signatures
//!
//! Curve parameter sets are stored as big-endian byte strings of the
//! curve's coordinate width. The curve equation is
//! y² = x³ + a·x + b over the prime field F_p, with the base point (x, y)
//! generating a subgroup of prime order q.

/// Digest and scalar size of the 256-bit variant in bytes
pub const GOST3410_DIGEST_SIZE_256: usize = 32;

/// Digest and scalar size of the 512-bit variant in bytes
pub const GOST3410_DIGEST_SIZE_512: usize = 64;

/// Size of the user keying material mixed into VKO key agreement
pub const VKO_UKM_SIZE: usize = 8;

/// Minimum coordinate width used when hashing the VKO shared point
pub const VKO_POINT_COORDINATE_SIZE: usize = 32;

/// Size of a derived key-encryption key in bytes
pub const VKO_KEK_SIZE: usize = 32;

/// A named GOST R 34.10 curve parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Registered name of the parameter set
    pub name: &'static str,
    /// Width of p, q and the point coordinates in bytes
    pub coordinate_size: usize,
    /// Field modulus
    pub p: &'static [u8],
    /// Curve coefficient a
    pub a: &'static [u8],
    /// Curve coefficient b
    pub b: &'static [u8],
    /// Subgroup order
    pub q: &'static [u8],
    /// Base point x-coordinate
    pub x: &'static [u8],
    /// Base point y-coordinate
    pub y: &'static [u8],
}

/// Identifiers of the shipped parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// GOST R 34.10-2001 example curve (id-GostR3410-2001-TestParamSet)
    GostR34102001Test,
    /// id-GostR3410-2001-CryptoPro-A-ParamSet
    GostR34102001CryptoProA,
    /// id-GostR3410-2001-CryptoPro-B-ParamSet
    GostR34102001CryptoProB,
    /// id-GostR3410-2001-CryptoPro-C-ParamSet
    GostR34102001CryptoProC,
    /// GOST R 34.10-2012 512-bit example curve
    GostR34102012Test512,
    /// id-tc26-gost-3410-12-512-paramSetA
    Tc26Gost341012512ParamSetA,
}

impl CurveId {
    /// All shipped parameter sets
    pub const ALL: [CurveId; 6] = [
        CurveId::GostR34102001Test,
        CurveId::GostR34102001CryptoProA,
        CurveId::GostR34102001CryptoProB,
        CurveId::GostR34102001CryptoProC,
        CurveId::GostR34102012Test512,
        CurveId::Tc26Gost341012512ParamSetA,
    ];

    /// Parameter set for this identifier
    pub const fn params(self) -> &'static CurveParams {
        match self {
            CurveId::GostR34102001Test => &GOST_R3410_2001_TEST,
            CurveId::GostR34102001CryptoProA => &GOST_R3410_2001_CRYPTOPRO_A,
            CurveId::GostR34102001CryptoProB => &GOST_R3410_2001_CRYPTOPRO_B,
            CurveId::GostR34102001CryptoProC => &GOST_R3410_2001_CRYPTOPRO_C,
            CurveId::GostR34102012Test512 => &GOST_R3410_2012_TEST_512,
            CurveId::Tc26Gost341012512ParamSetA => &TC26_GOST_3410_12_512_A,
        }
    }
}

/// GOST R 34.10-2001 example parameters (256-bit)
pub const GOST_R3410_2001_TEST: CurveParams = CurveParams {
    name: "id-GostR3410-2001-TestParamSet",
    coordinate_size: 32,
    p: &[
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x04, 0x31,
    ],
    a: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x07,
    ],
    b: &[
        0x5F, 0xBF, 0xF4, 0x98, 0xAA, 0x93, 0x8C, 0xE7, 0x39, 0xB8, 0xE0, 0x22, 0xFB, 0xAF, 0xEF,
        0x40, 0x56, 0x3F, 0x6E, 0x6A, 0x34, 0x72, 0xFC, 0x2A, 0x51, 0x4C, 0x0C, 0xE9, 0xDA, 0xE2,
        0x3B, 0x7E,
    ],
    q: &[
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0x50, 0xFE, 0x8A, 0x18, 0x92, 0x97, 0x61, 0x54, 0xC5, 0x9C, 0xFC, 0x19, 0x3A, 0xCC,
        0xF5, 0xB3,
    ],
    x: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x02,
    ],
    y: &[
        0x08, 0xE2, 0xA8, 0xA0, 0xE6, 0x51, 0x47, 0xD4, 0xBD, 0x63, 0x16, 0x03, 0x0E, 0x16, 0xD1,
        0x9C, 0x85, 0xC9, 0x7F, 0x0A, 0x9C, 0xA2, 0x67, 0x12, 0x2B, 0x96, 0xAB, 0xBC, 0xEA, 0x7E,
        0x8F, 0xC8,
    ],
};

/// CryptoPro A parameters (256-bit, a = p - 3)
pub const GOST_R3410_2001_CRYPTOPRO_A: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-A-ParamSet",
    coordinate_size: 32,
    p: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFD, 0x97,
    ],
    a: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFD, 0x94,
    ],
    b: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0xA6,
    ],
    q: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x6C, 0x61, 0x10, 0x70, 0x99, 0x5A, 0xD1, 0x00, 0x45, 0x84, 0x1B, 0x09, 0xB7, 0x61,
        0xB8, 0x93,
    ],
    x: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x01,
    ],
    y: &[
        0x8D, 0x91, 0xE4, 0x71, 0xE0, 0x98, 0x9C, 0xDA, 0x27, 0xDF, 0x50, 0x5A, 0x45, 0x3F, 0x2B,
        0x76, 0x35, 0x29, 0x4F, 0x2D, 0xDF, 0x23, 0xE3, 0xB1, 0x22, 0xAC, 0xC9, 0x9C, 0x9E, 0x9F,
        0x1E, 0x14,
    ],
};

/// CryptoPro B parameters (256-bit, a = p - 3)
pub const GOST_R3410_2001_CRYPTOPRO_B: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-B-ParamSet",
    coordinate_size: 32,
    p: &[
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x0C, 0x99,
    ],
    a: &[
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x0C, 0x96,
    ],
    b: &[
        0x3E, 0x1A, 0xF4, 0x19, 0xA2, 0x69, 0xA5, 0xF8, 0x66, 0xA7, 0xD3, 0xC2, 0x5C, 0x3D, 0xF8,
        0x0A, 0xE9, 0x79, 0x25, 0x93, 0x73, 0xFF, 0x2B, 0x18, 0x2F, 0x49, 0xD4, 0xCE, 0x7E, 0x1B,
        0xBC, 0x8B,
    ],
    q: &[
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0x5F, 0x70, 0x0C, 0xFF, 0xF1, 0xA6, 0x24, 0xE5, 0xE4, 0x97, 0x16, 0x1B, 0xCC, 0x8A,
        0x19, 0x8F,
    ],
    x: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x01,
    ],
    y: &[
        0x3F, 0xA8, 0x12, 0x43, 0x59, 0xF9, 0x66, 0x80, 0xB8, 0x3D, 0x1C, 0x3E, 0xB2, 0xC0, 0x70,
        0xE5, 0xC5, 0x45, 0xC9, 0x85, 0x8D, 0x03, 0xEC, 0xFB, 0x74, 0x4B, 0xF8, 0xD7, 0x17, 0x71,
        0x7E, 0xFC,
    ],
};

/// CryptoPro C parameters (256-bit, a = p - 3)
pub const GOST_R3410_2001_CRYPTOPRO_C: CurveParams = CurveParams {
    name: "id-GostR3410-2001-CryptoPro-C-ParamSet",
    coordinate_size: 32,
    p: &[
        0x9B, 0x9F, 0x60, 0x5F, 0x5A, 0x85, 0x81, 0x07, 0xAB, 0x1E, 0xC8, 0x5E, 0x6B, 0x41, 0xC8,
        0xAA, 0xCF, 0x84, 0x6E, 0x86, 0x78, 0x90, 0x51, 0xD3, 0x79, 0x98, 0xF7, 0xB9, 0x02, 0x2D,
        0x75, 0x9B,
    ],
    a: &[
        0x9B, 0x9F, 0x60, 0x5F, 0x5A, 0x85, 0x81, 0x07, 0xAB, 0x1E, 0xC8, 0x5E, 0x6B, 0x41, 0xC8,
        0xAA, 0xCF, 0x84, 0x6E, 0x86, 0x78, 0x90, 0x51, 0xD3, 0x79, 0x98, 0xF7, 0xB9, 0x02, 0x2D,
        0x75, 0x98,
    ],
    b: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x80, 0x5A,
    ],
    q: &[
        0x9B, 0x9F, 0x60, 0x5F, 0x5A, 0x85, 0x81, 0x07, 0xAB, 0x1E, 0xC8, 0x5E, 0x6B, 0x41, 0xC8,
        0xAA, 0x58, 0x2C, 0xA3, 0x51, 0x1E, 0xDD, 0xFB, 0x74, 0xF0, 0x2F, 0x3A, 0x65, 0x98, 0x98,
        0x0B, 0xB9,
    ],
    x: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    y: &[
        0x41, 0xEC, 0xE5, 0x57, 0x43, 0x71, 0x1A, 0x8C, 0x3C, 0xBF, 0x37, 0x83, 0xCD, 0x08, 0xC0,
        0xEE, 0x4D, 0x4D, 0xC4, 0x40, 0xD4, 0x64, 0x1A, 0x8F, 0x36, 0x6E, 0x55, 0x0D, 0xFD, 0xB3,
        0xBB, 0x67,
    ],
};

/// GOST R 34.10-2012 example parameters (512-bit)
pub const GOST_R3410_2012_TEST_512: CurveParams = CurveParams {
    name: "id-tc26-gost-3410-12-512-paramSetTest",
    coordinate_size: 64,
    p: &[
        0x45, 0x31, 0xAC, 0xD1, 0xFE, 0x00, 0x23, 0xC7, 0x55, 0x0D, 0x26, 0x7B, 0x6B, 0x2F, 0xEE,
        0x80, 0x92, 0x2B, 0x14, 0xB2, 0xFF, 0xB9, 0x0F, 0x04, 0xD4, 0xEB, 0x7C, 0x09, 0xB5, 0xD2,
        0xD1, 0x5D, 0xF1, 0xD8, 0x52, 0x74, 0x1A, 0xF4, 0x70, 0x4A, 0x04, 0x58, 0x04, 0x7E, 0x80,
        0xE4, 0x54, 0x6D, 0x35, 0xB8, 0x33, 0x6F, 0xAC, 0x22, 0x4D, 0xD8, 0x16, 0x64, 0xBB, 0xF5,
        0x28, 0xBE, 0x63, 0x73,
    ],
    a: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x07,
    ],
    b: &[
        0x1C, 0xFF, 0x08, 0x06, 0xA3, 0x11, 0x16, 0xDA, 0x29, 0xD8, 0xCF, 0xA5, 0x4E, 0x57, 0xEB,
        0x74, 0x8B, 0xC5, 0xF3, 0x77, 0xE4, 0x94, 0x00, 0xFD, 0xD7, 0x88, 0xB6, 0x49, 0xEC, 0xA1,
        0xAC, 0x43, 0x61, 0x83, 0x40, 0x13, 0xB2, 0xAD, 0x73, 0x22, 0x48, 0x0A, 0x89, 0xCA, 0x58,
        0xE0, 0xCF, 0x74, 0xBC, 0x9E, 0x54, 0x0C, 0x2A, 0xDD, 0x68, 0x97, 0xFA, 0xD0, 0xA3, 0x08,
        0x4F, 0x30, 0x2A, 0xDC,
    ],
    q: &[
        0x45, 0x31, 0xAC, 0xD1, 0xFE, 0x00, 0x23, 0xC7, 0x55, 0x0D, 0x26, 0x7B, 0x6B, 0x2F, 0xEE,
        0x80, 0x92, 0x2B, 0x14, 0xB2, 0xFF, 0xB9, 0x0F, 0x04, 0xD4, 0xEB, 0x7C, 0x09, 0xB5, 0xD2,
        0xD1, 0x5D, 0xA8, 0x2F, 0x2D, 0x7E, 0xCB, 0x1D, 0xBA, 0xC7, 0x19, 0x90, 0x5C, 0x5E, 0xEC,
        0xC4, 0x23, 0xF1, 0xD8, 0x6E, 0x25, 0xED, 0xBE, 0x23, 0xC5, 0x95, 0xD6, 0x44, 0xAA, 0xF1,
        0x87, 0xE6, 0xE6, 0xDF,
    ],
    x: &[
        0x24, 0xD1, 0x9C, 0xC6, 0x45, 0x72, 0xEE, 0x30, 0xF3, 0x96, 0xBF, 0x6E, 0xBB, 0xFD, 0x7A,
        0x6C, 0x52, 0x13, 0xB3, 0xB3, 0xD7, 0x05, 0x7C, 0xC8, 0x25, 0xF9, 0x10, 0x93, 0xA6, 0x8C,
        0xD7, 0x62, 0xFD, 0x60, 0x61, 0x12, 0x62, 0xCD, 0x83, 0x8D, 0xC6, 0xB6, 0x0A, 0xA7, 0xEE,
        0xE8, 0x04, 0xE2, 0x8B, 0xC8, 0x49, 0x97, 0x7F, 0xAC, 0x33, 0xB4, 0xB5, 0x30, 0xF1, 0xB1,
        0x20, 0x24, 0x8A, 0x9A,
    ],
    y: &[
        0x2B, 0xB3, 0x12, 0xA4, 0x3B, 0xD2, 0xCE, 0x6E, 0x0D, 0x02, 0x06, 0x13, 0xC8, 0x57, 0xAC,
        0xDD, 0xCF, 0xBF, 0x06, 0x1E, 0x91, 0xE5, 0xF2, 0xC3, 0xF3, 0x24, 0x47, 0xC2, 0x59, 0xF3,
        0x9B, 0x2C, 0x83, 0xAB, 0x15, 0x6D, 0x77, 0xF1, 0x49, 0x6B, 0xF7, 0xEB, 0x33, 0x51, 0xE1,
        0xEE, 0x4E, 0x43, 0xDC, 0x1A, 0x18, 0xB9, 0x1B, 0x24, 0x64, 0x0B, 0x6D, 0xBB, 0x92, 0xCB,
        0x1A, 0xDD, 0x37, 0x1E,
    ],
};

/// TC26 512-bit parameter set A (a = p - 3)
pub const TC26_GOST_3410_12_512_A: CurveParams = CurveParams {
    name: "id-tc26-gost-3410-12-512-paramSetA",
    coordinate_size: 64,
    p: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFD, 0xC7,
    ],
    a: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFD, 0xC4,
    ],
    b: &[
        0xE8, 0xC2, 0x50, 0x5D, 0xED, 0xFC, 0x86, 0xDD, 0xC1, 0xBD, 0x0B, 0x2B, 0x66, 0x67, 0xF1,
        0xDA, 0x34, 0xB8, 0x25, 0x74, 0x76, 0x1C, 0xB0, 0xE8, 0x79, 0xBD, 0x08, 0x1C, 0xFD, 0x0B,
        0x62, 0x65, 0xEE, 0x3C, 0xB0, 0x90, 0xF3, 0x0D, 0x27, 0x61, 0x4C, 0xB4, 0x57, 0x40, 0x10,
        0xDA, 0x90, 0xDD, 0x86, 0x2E, 0xF9, 0xD4, 0xEB, 0xEE, 0x47, 0x61, 0x50, 0x31, 0x90, 0x78,
        0x5A, 0x71, 0xC7, 0x60,
    ],
    q: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0x27, 0xE6, 0x95, 0x32, 0xF4, 0x8D, 0x89, 0x11, 0x6F, 0xF2, 0x2B, 0x8D, 0x4E,
        0x05, 0x60, 0x60, 0x9B, 0x4B, 0x38, 0xAB, 0xFA, 0xD2, 0xB8, 0x5D, 0xCA, 0xCD, 0xB1, 0x41,
        0x1F, 0x10, 0xB2, 0x75,
    ],
    x: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x03,
    ],
    y: &[
        0x75, 0x03, 0xCF, 0xE8, 0x7A, 0x83, 0x6A, 0xE3, 0xA6, 0x1B, 0x88, 0x16, 0xE2, 0x54, 0x50,
        0xE6, 0xCE, 0x5E, 0x1C, 0x93, 0xAC, 0xF1, 0xAB, 0xC1, 0x77, 0x80, 0x64, 0xFD, 0xCB, 0xEF,
        0xA9, 0x21, 0xDF, 0x16, 0x26, 0xBE, 0x4F, 0xD0, 0x36, 0xE9, 0x3D, 0x75, 0xE6, 0xA5, 0x0E,
        0x3A, 0x41, 0xE9, 0x80, 0x28, 0xFE, 0x5F, 0xC2, 0x35, 0xF5, 0xB8, 0x89, 0xA5, 0x89, 0xCB,
        0x52, 0x15, 0xF2, 0xA4,
    ],
};
