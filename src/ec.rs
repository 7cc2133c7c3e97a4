//! The `ec` module computes Reed-Solomon error correction codewords and
//! interleaves the codeword blocks of a QR code.

use crate::bits::DATA_LENGTHS;
use crate::types::{EcLevel, QrError, QrResult, Version};

/// Product of two field elements of GF(2^8) with the QR code reducer
/// polynomial 0x11d, computed Russian peasant style.
fn gf_multiply(x: u8, y: u8) -> u8 {
    let mut z = 0u8;
    for i in (0..8).rev() {
        z = (z << 1) ^ ((z >> 7) * 0x1d);
        z ^= ((y >> i) & 1) * x;
    }
    z
}

/// Coefficients of the Reed-Solomon generator polynomial of the given
/// degree, stored from the highest to the lowest power, without the leading
/// term (which is always 1).
///
/// The polynomial is the product `(x - r^0)(x - r^1)...(x - r^{degree-1})`
/// where `r = 0x02` generates the field.
fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut coefficients = vec![0u8; degree - 1];
    coefficients.push(1);

    let mut root: u8 = 1;
    for _ in 0..degree {
        for j in 0..degree {
            coefficients[j] = gf_multiply(coefficients[j], root);
            if j + 1 < degree {
                coefficients[j] ^= coefficients[j + 1];
            }
        }
        root = gf_multiply(root, 0x02);
    }
    coefficients
}

/// Computes `ec_bytes` Reed-Solomon error correction codewords for the
/// given data codewords.
///
/// This is a pure function: equal inputs give equal outputs.
pub fn create_error_correction_code(data: &[u8], ec_bytes: usize) -> Vec<u8> {
    let generator = generator_polynomial(ec_bytes);
    let mut remainder = vec![0u8; ec_bytes];
    for byte in data {
        let factor = byte ^ remainder.remove(0);
        remainder.push(0);
        for (r, g) in remainder.iter_mut().zip(&generator) {
            *r ^= gf_multiply(*g, factor);
        }
    }
    remainder
}

/// Splits the padded data codewords into the version's error correction
/// blocks, computes the error correction codewords of every block, and
/// interleaves both sequences.
///
/// Blocks are laid out in declaration order with the short blocks first;
/// during data interleaving an exhausted short block is simply skipped.
/// Returns the interleaved data codewords and the interleaved error
/// correction codewords.
///
/// # Errors
///
/// Returns `Err(QrError::DataTooLong)` if `rawbits` does not match the
/// version's data capacity exactly.
pub fn construct_codewords(
    rawbits: &[u8],
    version: Version,
    ec_level: EcLevel,
) -> QrResult<(Vec<u8>, Vec<u8>)> {
    if rawbits.len() * 8 != version.fetch(ec_level, &DATA_LENGTHS) {
        return Err(QrError::DataTooLong);
    }

    let num_blocks = version.fetch(ec_level, &NUM_BLOCKS);
    let ec_bytes_per_block = version.fetch(ec_level, &EC_BYTES_PER_BLOCK);

    let short_block_len = rawbits.len() / num_blocks;
    let num_long_blocks = rawbits.len() % num_blocks;

    let mut blocks = Vec::with_capacity(num_blocks);
    let mut start = 0;
    for i in 0..num_blocks {
        let block_len = short_block_len + usize::from(i >= num_blocks - num_long_blocks);
        blocks.push(&rawbits[start..start + block_len]);
        start += block_len;
    }

    let ec_blocks = blocks
        .iter()
        .map(|block| create_error_correction_code(block, ec_bytes_per_block))
        .collect::<Vec<_>>();

    let max_block_len = short_block_len + usize::from(num_long_blocks > 0);
    let mut data = Vec::with_capacity(rawbits.len());
    for i in 0..max_block_len {
        for block in &blocks {
            if let Some(byte) = block.get(i) {
                data.push(*byte);
            }
        }
    }

    let mut ec = Vec::with_capacity(ec_bytes_per_block * num_blocks);
    for i in 0..ec_bytes_per_block {
        for ec_block in &ec_blocks {
            ec.push(ec_block[i]);
        }
    }

    Ok((data, ec))
}

/// Number of error correction codewords per block, per version and error
/// correction level \[L, M, Q, H\].
static EC_BYTES_PER_BLOCK: [[usize; 4]; 40] = [
    [7, 10, 13, 17],
    [10, 16, 22, 28],
    [15, 26, 18, 22],
    [20, 18, 26, 16],
    [26, 24, 18, 22],
    [18, 16, 24, 28],
    [20, 18, 18, 26],
    [24, 22, 22, 26],
    [30, 22, 20, 24],
    [18, 26, 24, 28],
    [20, 30, 28, 24],
    [24, 22, 26, 28],
    [26, 22, 24, 22],
    [30, 24, 20, 24],
    [22, 24, 30, 24],
    [24, 28, 24, 30],
    [28, 28, 28, 28],
    [30, 26, 28, 28],
    [28, 26, 26, 26],
    [28, 26, 30, 28],
    [28, 26, 28, 30],
    [28, 28, 30, 24],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [26, 28, 30, 30],
    [28, 28, 28, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
];

/// Number of error correction blocks, per version and error correction
/// level \[L, M, Q, H\].
static NUM_BLOCKS: [[usize; 4]; 40] = [
    [1, 1, 1, 1],
    [1, 1, 1, 1],
    [1, 1, 2, 2],
    [1, 2, 2, 4],
    [1, 2, 4, 4],
    [2, 4, 4, 4],
    [2, 4, 6, 5],
    [2, 4, 6, 6],
    [2, 5, 8, 8],
    [4, 5, 8, 8],
    [4, 5, 8, 11],
    [4, 8, 10, 11],
    [4, 9, 12, 16],
    [4, 9, 16, 16],
    [6, 10, 12, 18],
    [6, 10, 17, 16],
    [6, 11, 16, 19],
    [6, 13, 18, 21],
    [7, 14, 21, 25],
    [8, 16, 20, 25],
    [8, 17, 23, 25],
    [9, 17, 23, 34],
    [9, 18, 25, 30],
    [10, 20, 27, 32],
    [12, 21, 29, 35],
    [12, 23, 34, 37],
    [12, 25, 34, 40],
    [13, 26, 35, 42],
    [14, 28, 38, 45],
    [15, 29, 40, 48],
    [16, 31, 43, 51],
    [17, 33, 45, 54],
    [18, 35, 48, 57],
    [19, 37, 51, 60],
    [19, 38, 53, 63],
    [20, 40, 56, 66],
    [21, 43, 59, 70],
    [22, 45, 62, 74],
    [24, 47, 65, 77],
    [25, 49, 68, 81],
];
