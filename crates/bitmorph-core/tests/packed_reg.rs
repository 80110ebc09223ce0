//! Packed image regression test
//!
//! Bit layout, pack/unpack round trips and the raster operations.
//!
//! Run with:
//! ```
//! cargo test -p bitmorph-core --test packed_reg
//! ```

use bitmorph_core::{
    ExecutionStrategy, LabelMap, PackedImage, RopOp, for_each_row, pack, to_label_seed, unpack,
};
use bitmorph_test::{RegParams, ascii, checkerboard, random_image};

#[test]
fn packed_layout_reg() {
    let mut rp = RegParams::new("packed_layout");

    for width in [2u32, 7, 8, 9, 15, 16, 17, 31, 64, 100] {
        let image = random_image(width, 5, 0.5, width as u64).unwrap();
        rp.compare_values(width.div_ceil(8) as f64, image.stride() as f64, 0.0);

        // every pixel lives at stride*y + x/8 under 0x80 >> (x % 8)
        let bits = unpack(&image);
        let mut layout_ok = true;
        for y in 0..5usize {
            for x in 0..width as usize {
                let byte = image.data()[image.stride() * y + x / 8];
                let bit = byte & (0x80 >> (x % 8)) != 0;
                layout_ok &= bit == bits[y * width as usize + x];
            }
        }
        rp.compare_bool(true, layout_ok, "MSB-first layout");

        // padding bits are zero
        let mask = image.padding_mask();
        let padding_clear = image.rows().all(|row| row[row.len() - 1] & !mask == 0);
        rp.compare_bool(true, padding_clear, "padding clear");

        // round trip
        let repacked = pack(&bits, width, 5).unwrap();
        rp.compare_images(&image, &repacked);
        rp.compare_bool(true, unpack(&repacked) == bits, "unpack(pack(x)) == x");

        let seed = to_label_seed(&image);
        let seed_ok = seed
            .labels()
            .iter()
            .zip(&bits)
            .all(|(&l, &b)| l == u32::from(b));
        rp.compare_bool(true, seed_ok, "label seed");
    }

    assert!(rp.cleanup());
}

#[test]
fn packed_rop_reg() {
    let mut rp = RegParams::new("packed_rop");

    let a = random_image(37, 13, 0.5, 1).unwrap();
    let b = random_image(37, 13, 0.5, 2).unwrap();

    let and = a.and(&b).unwrap();
    let or = a.or(&b).unwrap();
    let xor = a.xor(&b).unwrap();
    let sub = a.subtract(&b).unwrap();

    // |a| + |b| = |a | b| + |a & b|
    rp.compare_values(
        (a.count_pixels() + b.count_pixels()) as f64,
        (or.count_pixels() + and.count_pixels()) as f64,
        0.0,
    );
    rp.compare_images(&or.subtract(&and).unwrap(), &xor);
    rp.compare_images(&a.and(&b.invert()).unwrap(), &sub);
    rp.compare_images(&a.rop(&b, RopOp::Subtract).unwrap(), &sub);
    rp.compare_bool(true, sub.is_subset_of(&a).unwrap(), "a - b inside a");
    rp.compare_bool(true, and.is_subset_of(&or).unwrap(), "and inside or");

    // invert covers exactly the pixels, not the padding
    let inv = a.invert();
    rp.compare_values(
        (37 * 13) as f64,
        (a.count_pixels() + inv.count_pixels()) as f64,
        0.0,
    );
    rp.compare_images(&a, &inv.invert());

    let other = random_image(36, 13, 0.5, 3).unwrap();
    rp.compare_bool(true, a.and(&other).is_err(), "size mismatch rejected");

    assert!(rp.cleanup());
}

#[test]
fn packed_ascii_reg() {
    let mut rp = RegParams::new("packed_ascii");

    let board = checkerboard(10, 3, 1).unwrap();
    rp.compare_images(
        &ascii(
            "
            #.#.#.#.#.
            .#.#.#.#.#
            #.#.#.#.#.
            ",
        ),
        &board,
    );
    rp.compare_bool(
        true,
        board.to_bit_string() == "10101010 10000000\n01010101 01000000\n10101010 10000000\n",
        "bit string",
    );

    let map = LabelMap::from_raw(3, 2, vec![1, 0, 2, 0, 10, 255]).unwrap();
    rp.compare_bool(true, map.to_hex_string() == "01  02\n  0aff\n", "hex string");

    assert!(rp.cleanup());
}

#[test]
fn packed_strategy_reg() {
    let mut serial = vec![0u16; 40];
    let mut parallel = vec![0u16; 40];
    let fill = |y: usize, row: &mut [u16]| {
        for (x, v) in row.iter_mut().enumerate() {
            *v = (y * 100 + x) as u16;
        }
    };
    for_each_row(&mut serial, 8, ExecutionStrategy::Serial, fill);
    for_each_row(&mut parallel, 8, ExecutionStrategy::Parallel, fill);
    assert_eq!(serial, parallel);

    let image = PackedImage::from_raw(8, 2, vec![0xff, 0x00]).unwrap();
    assert_eq!(image.count_pixels(), 8);
}
