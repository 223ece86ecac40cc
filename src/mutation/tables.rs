//! Embedded tables of the mutation model, in the `AminoAcid` order
//! (C M F I L V W Y A G T S Q N E D H R K P).
use crate::shared::amino_acids::{NB_AMINO_ACIDS, NB_OUTCOMES};

/// Probability of each amino-acid in an unconstrained sequence
/// (number of codons coding for it / 61 sense codons).
pub static GENERATION_PROBABILITIES: [f64; NB_AMINO_ACIDS] = [
    0.03278689, 0.01639344, 0.03278689, 0.04918033, 0.09836066,
    0.06557377, 0.01639344, 0.03278689, 0.06557377, 0.06557377,
    0.06557377, 0.09836066, 0.03278689, 0.03278689, 0.03278689,
    0.03278689, 0.03278689, 0.09836066, 0.03278689, 0.06557377,
];

/// Probability of each outcome after one random base change in a codon of
/// the source amino-acid (rows), the last column is the stop codon.
#[rustfmt::skip]
pub static TRANSITION_PROBABILITIES: [[f64; NB_OUTCOMES]; NB_AMINO_ACIDS] = [
    // C
    [
        0.11111111, 0.0, 0.11111111, 0.0, 0.0, 0.0, 0.11111111,
        0.11111111, 0.0, 0.11111111, 0.0, 0.22222222, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0, 0.11111111,
    ],
    // M
    [
        0.0, 0.0, 0.0, 0.33333333, 0.22222222, 0.11111111, 0.0,
        0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.11111111, 0.11111111, 0.0, 0.0,
    ],
    // F
    [
        0.11111111, 0.0, 0.11111111, 0.11111111, 0.33333333, 0.11111111, 0.0,
        0.11111111, 0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    // I
    [
        0.0, 0.11111111, 0.07407407, 0.22222222, 0.14814815, 0.11111111, 0.0,
        0.0, 0.0, 0.0, 0.11111111, 0.07407407, 0.0, 0.07407407,
        0.0, 0.0, 0.0, 0.03703704, 0.03703704, 0.0, 0.0,
    ],
    // L
    [
        0.0, 0.03703704, 0.11111111, 0.07407407, 0.33333333, 0.11111111, 0.01851852,
        0.0, 0.0, 0.0, 0.0, 0.03703704, 0.03703704, 0.0,
        0.0, 0.0, 0.03703704, 0.07407407, 0.0, 0.07407407, 0.05555556,
    ],
    // V
    [
        0.0, 0.02777778, 0.05555556, 0.08333333, 0.16666667, 0.33333333, 0.0,
        0.0, 0.11111111, 0.11111111, 0.0, 0.0, 0.0, 0.0,
        0.05555556, 0.05555556, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    // W
    [
        0.22222222, 0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0,
        0.0, 0.0, 0.11111111, 0.0, 0.11111111, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.22222222, 0.0, 0.0, 0.22222222,
    ],
    // Y
    [
        0.11111111, 0.0, 0.11111111, 0.0, 0.0, 0.0, 0.0,
        0.11111111, 0.0, 0.0, 0.0, 0.11111111, 0.0, 0.11111111,
        0.0, 0.11111111, 0.11111111, 0.0, 0.0, 0.0, 0.22222222,
    ],
    // A
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.11111111, 0.0,
        0.0, 0.33333333, 0.11111111, 0.11111111, 0.11111111, 0.0, 0.0,
        0.05555556, 0.05555556, 0.0, 0.0, 0.0, 0.11111111, 0.0,
    ],
    // G
    [
        0.05555556, 0.0, 0.0, 0.0, 0.0, 0.11111111, 0.02777778,
        0.0, 0.11111111, 0.33333333, 0.0, 0.05555556, 0.0, 0.0,
        0.05555556, 0.05555556, 0.0, 0.16666667, 0.0, 0.0, 0.02777778,
    ],
    // T
    [
        0.0, 0.02777778, 0.0, 0.08333333, 0.0, 0.0, 0.0,
        0.0, 0.11111111, 0.0, 0.33333333, 0.16666667, 0.0, 0.05555556,
        0.0, 0.0, 0.0, 0.05555556, 0.05555556, 0.11111111, 0.0,
    ],
    // S
    [
        0.07407407, 0.0, 0.03703704, 0.03703704, 0.03703704, 0.0, 0.01851852,
        0.03703704, 0.07407407, 0.03703704, 0.11111111, 0.25925926, 0.0, 0.03703704,
        0.0, 0.0, 0.0, 0.11111111, 0.0, 0.07407407, 0.05555556,
    ],
    // Q
    [
        0.0, 0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.11111111, 0.0,
        0.11111111, 0.0, 0.22222222, 0.11111111, 0.11111111, 0.11111111, 0.11111111,
    ],
    // N
    [
        0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0, 0.0,
        0.11111111, 0.0, 0.0, 0.11111111, 0.11111111, 0.0, 0.11111111,
        0.0, 0.11111111, 0.11111111, 0.0, 0.22222222, 0.0, 0.0,
    ],
    // E
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.11111111, 0.0,
        0.0, 0.11111111, 0.11111111, 0.0, 0.0, 0.11111111, 0.0,
        0.11111111, 0.22222222, 0.0, 0.0, 0.11111111, 0.0, 0.11111111,
    ],
    // D
    [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.11111111, 0.0,
        0.11111111, 0.11111111, 0.11111111, 0.0, 0.0, 0.0, 0.11111111,
        0.22222222, 0.11111111, 0.11111111, 0.0, 0.0, 0.0, 0.0,
    ],
    // H
    [
        0.0, 0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0,
        0.11111111, 0.0, 0.0, 0.0, 0.0, 0.22222222, 0.11111111,
        0.0, 0.11111111, 0.11111111, 0.11111111, 0.0, 0.11111111, 0.0,
    ],
    // R
    [
        0.03703704, 0.01851852, 0.0, 0.01851852, 0.07407407, 0.0, 0.03703704,
        0.0, 0.0, 0.11111111, 0.03703704, 0.11111111, 0.03703704, 0.0,
        0.0, 0.0, 0.03703704, 0.33333333, 0.03703704, 0.07407407, 0.03703704,
    ],
    // K
    [
        0.0, 0.05555556, 0.0, 0.05555556, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.11111111, 0.0, 0.11111111, 0.22222222,
        0.11111111, 0.0, 0.0, 0.11111111, 0.11111111, 0.0, 0.11111111,
    ],
    // P
    [
        0.0, 0.0, 0.0, 0.0, 0.11111111, 0.0, 0.0,
        0.0, 0.11111111, 0.0, 0.11111111, 0.11111111, 0.05555556, 0.0,
        0.0, 0.0, 0.05555556, 0.11111111, 0.0, 0.33333333, 0.0,
    ],
];

/// Thomas-Dill pair contact energies (kT), symmetric.
#[rustfmt::skip]
pub static THOMAS_DILL: [[f64; NB_AMINO_ACIDS]; NB_AMINO_ACIDS] = [
    /* C */ [-1.79, -1.23, -0.98, -0.48, -0.69, -0.94,  -0.3, -0.96,  -0.3, -0.42, -0.38,  -0.2, -0.49, -0.32,  0.04,  0.55, -0.82,  -0.4,   0.0,  0.07],
    /* M */ [-1.23,  0.36, -1.03, -0.41, -0.31, -0.94, -0.07,  -1.1,  0.05,   0.0,  0.06, -0.47, -0.54,  0.31,  0.02,  1.07, -0.35, -0.43,  0.55, -0.25],
    /* F */ [-0.98, -1.03, -0.61, -0.66, -1.02, -0.78, -0.89, -0.82, -0.05,  0.21, -0.19,  0.14,   0.1, -0.02,  0.19,   0.2, -0.75, -0.22, -0.17, -0.43],
    /* I */ [-0.48, -0.41, -0.66, -0.71, -1.04, -0.98, -0.89, -0.87, -0.64,   0.4, -0.29, -0.13, -0.39,  0.39,  -0.2,  0.04, -0.52, -0.08, -0.26,  0.25],
    /* L */ [-0.69, -0.31, -1.02, -1.04, -1.14, -1.03, -0.97,  -0.6, -0.57, -0.08, -0.39, -0.07, -0.13,  -0.1, -0.05,   0.5, -0.36,  -0.1,   0.1,  0.09],
    /* V */ [-0.94, -0.94, -0.78, -0.98, -1.03, -1.15,  -0.6,  -0.7,  -0.6,  -0.2,  0.06, -0.31, -0.09, -0.24, -0.02,  0.25, -0.35, -0.48, -0.08, -0.08],
    /* W */ [ -0.3, -0.07, -0.89, -0.89, -0.97,  -0.6,  0.02, -0.99, -0.08, -0.14,  0.07,  -0.2,   0.4, -0.68,  0.32,  0.24, -0.41, -0.78,  -0.3, -0.44],
    /* Y */ [-0.96,  -1.1, -0.82, -0.87,  -0.6,  -0.7, -0.99,  0.35, -0.37, -0.32, -0.23,  0.25, -0.39, -0.74,  0.22,  0.11, -0.67,  0.21,  -0.2, -0.45],
    /* A */ [ -0.3,  0.05, -0.05, -0.64, -0.57,  -0.6, -0.08, -0.37, -0.08, -0.09, -0.22, -0.01, -0.11, -0.14,  0.03,   0.1, -0.15,  0.07,   0.0,  0.41],
    /* G */ [-0.42,   0.0,  0.21,   0.4, -0.08,  -0.2, -0.14, -0.32, -0.09,  0.04,  0.13, -0.04,  0.12, -0.18,   0.4, -0.06,   0.0, -0.15,   0.1,   0.4],
    /* T */ [-0.38,  0.06, -0.19, -0.29, -0.39,  0.06,  0.07, -0.23, -0.22,  0.13,  0.26,  0.05, -0.17, -0.27,  0.15, -0.03, -0.27, -0.17,  0.09,  0.36],
    /* S */ [ -0.2, -0.47,  0.14, -0.13, -0.07, -0.31,  -0.2,  0.25, -0.01, -0.04,  0.05, -0.13,   0.4,  0.37,   0.3, -0.09, -0.59,  0.61,  0.18,  0.44],
    /* Q */ [-0.49, -0.54,   0.1, -0.39, -0.13, -0.09,   0.4, -0.39, -0.11,  0.12, -0.17,   0.4, -0.08, -0.05,  0.62,  0.46,  0.05,  0.62,  0.04, -0.21],
    /* N */ [-0.32,  0.31, -0.02,  0.39,  -0.1, -0.24, -0.68, -0.74, -0.14, -0.18, -0.27,  0.37, -0.05, -0.86, -0.25, -0.12,  0.06,  0.04,  0.18,  0.11],
    /* E */ [ 0.04,  0.02,  0.19,  -0.2, -0.05, -0.02,  0.32,  0.22,  0.03,   0.4,  0.15,   0.3,  0.62, -0.25,  0.21,  0.68, -0.53, -0.26, -0.09,  0.84],
    /* D */ [ 0.55,  1.07,   0.2,  0.04,   0.5,  0.25,  0.24,  0.11,   0.1, -0.06, -0.03, -0.09,  0.46, -0.12,  0.68,   0.6, -0.06, -0.15, -0.09,  0.84],
    /* H */ [-0.82, -0.35, -0.75, -0.52, -0.36, -0.35, -0.41, -0.67, -0.15,   0.0, -0.27, -0.59,  0.05,  0.06, -0.53, -0.06,  0.14, -0.01,  0.14, -0.22],
    /* R */ [ -0.4, -0.43, -0.22, -0.08,  -0.1, -0.48, -0.78,  0.21,  0.07, -0.15, -0.17,  0.61,  0.62,  0.04, -0.26, -0.15, -0.01,  0.23,   0.3, -0.02],
    /* K */ [  0.0,  0.55, -0.17, -0.26,   0.1, -0.08,  -0.3,  -0.2,   0.0,   0.1,  0.09,  0.18,  0.04,  0.18, -0.09, -0.09,  0.14,   0.3,  1.45,  0.51],
    /* P */ [ 0.07, -0.25, -0.43,  0.25,  0.09, -0.08, -0.44, -0.45,  0.41,   0.4,  0.36,  0.44, -0.21,  0.11,  0.84,  0.84, -0.22, -0.02,  0.51,  0.28],
];
